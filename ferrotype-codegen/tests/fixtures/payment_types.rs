// Code generated by ferrotype. DO NOT EDIT.

//! Generated types for the `payments` schema package.
//!
//! Decimal numbers decode as [`serde_json::Number`]; serde_json's
//! `arbitrary_precision` feature preserves their full precision. Raw
//! payload carriers rely on the `raw_value` feature.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Root {
    #[serde(rename = "payment")]
    pub payment: Payment,
}

impl Root {
    /// Wire name to rule-binding key, in field order.
    pub const FIELD_BINDINGS: &[(&str, &str)] = &[
        ("payment", "payment"),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BankPayment {
    #[serde(rename = "iban")]
    pub iban: String,
    #[serde(rename = "kind")]
    pub kind: String,
}

impl BankPayment {
    /// Wire name to rule-binding key, in field order.
    pub const FIELD_BINDINGS: &[(&str, &str)] = &[
        ("iban", "iban"),
        ("kind", "kind"),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardPayment {
    #[serde(rename = "card_number")]
    pub card_number: String,
    #[serde(rename = "kind")]
    pub kind: String,
}

impl CardPayment {
    /// Wire name to rule-binding key, in field order.
    pub const FIELD_BINDINGS: &[(&str, &str)] = &[
        ("card_number", "cardnumber"),
        ("kind", "kind"),
    ];
}

/// One of the supported payment methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payment {
    /// Raw, undecoded payload.
    pub raw: Box<serde_json::value::RawValue>,
}

impl Default for Payment {
    fn default() -> Self {
        Self { raw: raw_null() }
    }
}

impl Payment {
    /// Attempts to decode the payload as [`CardPayment`].
    pub fn decode_card_payment(&self) -> Result<CardPayment, serde_json::Error> {
        serde_json::from_str(self.raw.get())
    }

    /// Attempts to decode the payload as [`BankPayment`].
    pub fn decode_bank_payment(&self) -> Result<BankPayment, serde_json::Error> {
        serde_json::from_str(self.raw.get())
    }
}

/// Default value for raw payload fields absent from the input.
fn raw_null() -> Box<serde_json::value::RawValue> {
    serde_json::value::RawValue::from_string("null".to_owned())
        .expect("null is valid JSON")
}
