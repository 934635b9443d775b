//! # Ferrotype CLI Entry Point
//!
//! Compiles one JSON Schema document into Rust type declarations.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

/// Generates Rust types from a JSON Schema document.
#[derive(Parser, Debug)]
#[command(name = "ferrotype", version, about)]
struct Cli {
    /// Path to the JSON Schema document.
    #[arg(short = 's', long = "schema")]
    schema: PathBuf,

    /// Path of the generated Rust source file.
    #[arg(short = 'o', long = "out")]
    out: PathBuf,

    /// Package label for the generated module docs. Defaults to the
    /// name of the output directory.
    #[arg(short = 'n', long = "package")]
    package: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let package = cli.package.unwrap_or_else(|| default_package(&cli.out));

    tracing::info!(schema = %cli.schema.display(), package = %package, "compiling schema");
    ferrotype_codegen::generate_to_file(&cli.schema, &cli.out, &package)
        .with_context(|| format!("failed to generate types from '{}'", cli.schema.display()))?;

    println!("generated {} ({package})", cli.out.display());
    Ok(())
}

/// Derives the package label from the output file's parent directory.
fn default_package(out: &Path) -> String {
    out.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "types".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_arguments() {
        let cli = Cli::try_parse_from([
            "ferrotype",
            "--schema",
            "order.schema.json",
            "--out",
            "src/types.rs",
        ])
        .expect("Failed to parse arguments");

        assert_eq!(cli.schema, PathBuf::from("order.schema.json"));
        assert_eq!(cli.out, PathBuf::from("src/types.rs"));
        assert!(cli.package.is_none());
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["ferrotype", "-s", "a.json", "-o", "out.rs", "-n", "orders"])
            .expect("Failed to parse arguments");
        assert_eq!(cli.package.as_deref(), Some("orders"));
    }

    #[test]
    fn test_missing_schema_is_rejected() {
        assert!(Cli::try_parse_from(["ferrotype", "--out", "out.rs"]).is_err());
    }

    #[test]
    fn test_default_package_from_output_directory() {
        assert_eq!(default_package(Path::new("gen/orders/types.rs")), "orders");
        assert_eq!(default_package(Path::new("types.rs")), "types");
    }
}
