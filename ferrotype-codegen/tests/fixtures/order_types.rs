// Code generated by ferrotype. DO NOT EDIT.

//! Generated types for the `orders` schema package.
//!
//! Decimal numbers decode as [`serde_json::Number`]; serde_json's
//! `arbitrary_precision` feature preserves their full precision. Raw
//! payload carriers rely on the `raw_value` feature.

use serde::{Deserialize, Serialize};

/// Order created event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Root {
    #[serde(rename = "data")]
    pub data: RootData,
    #[serde(rename = "metadata")]
    pub metadata: RootMetadata,
}

impl Root {
    /// Wire name to rule-binding key, in field order.
    pub const FIELD_BINDINGS: &[(&str, &str)] = &[
        ("data", "data"),
        ("metadata", "metadata"),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootDataItems {
    #[serde(rename = "product_id")]
    pub product_id: String,
    #[serde(rename = "quantity")]
    pub quantity: i64,
    #[serde(rename = "total_price")]
    pub total_price: serde_json::Number,
    #[serde(rename = "unit_price")]
    pub unit_price: serde_json::Number,
}

impl RootDataItems {
    /// Wire name to rule-binding key, in field order.
    pub const FIELD_BINDINGS: &[(&str, &str)] = &[
        ("product_id", "productid"),
        ("quantity", "quantity"),
        ("total_price", "totalprice"),
        ("unit_price", "unitprice"),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootDataShippingAddress {
    #[serde(rename = "city")]
    pub city: String,
    #[serde(rename = "country")]
    pub country: String,
    #[serde(rename = "postal_code")]
    pub postal_code: String,
    #[serde(rename = "state")]
    pub state: String,
    #[serde(rename = "street")]
    pub street: String,
}

impl RootDataShippingAddress {
    /// Wire name to rule-binding key, in field order.
    pub const FIELD_BINDINGS: &[(&str, &str)] = &[
        ("city", "city"),
        ("country", "country"),
        ("postal_code", "postalcode"),
        ("state", "state"),
        ("street", "street"),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootData {
    #[serde(rename = "created_at")]
    pub created_at: String,
    #[serde(rename = "customer_id")]
    pub customer_id: String,
    #[serde(rename = "items")]
    pub items: Vec<RootDataItems>,
    #[serde(rename = "order_id")]
    pub order_id: String,
    #[serde(rename = "order_status")]
    pub order_status: String,
    #[serde(rename = "shipping_address")]
    pub shipping_address: RootDataShippingAddress,
    #[serde(rename = "shipping_method", default, skip_serializing_if = "String::is_empty")]
    pub shipping_method: String,
    /// Decimal order total.
    #[serde(rename = "total_amount")]
    pub total_amount: serde_json::Number,
}

impl RootData {
    /// Wire name to rule-binding key, in field order.
    pub const FIELD_BINDINGS: &[(&str, &str)] = &[
        ("created_at", "createdat"),
        ("customer_id", "customerid"),
        ("items", "items"),
        ("order_id", "orderid"),
        ("order_status", "orderstatus"),
        ("shipping_address", "shippingaddress"),
        ("shipping_method", "shippingmethod"),
        ("total_amount", "totalamount"),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootMetadata {
    #[serde(rename = "event_id")]
    pub event_id: String,
    #[serde(rename = "event_type")]
    pub event_type: String,
    #[serde(rename = "schema_version")]
    pub schema_version: String,
    #[serde(rename = "timestamp")]
    pub timestamp: String,
    #[serde(rename = "version")]
    pub version: i64,
}

impl RootMetadata {
    /// Wire name to rule-binding key, in field order.
    pub const FIELD_BINDINGS: &[(&str, &str)] = &[
        ("event_id", "eventid"),
        ("event_type", "eventtype"),
        ("schema_version", "schemaversion"),
        ("timestamp", "timestamp"),
        ("version", "version"),
    ];
}
