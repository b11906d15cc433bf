//! # Configuration
//!
//! Application configuration resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`, `--store-name`, `--atomic`)
//! 2. Environment variables (`STOREFRONT_*`)
//! 3. Defaults (built-in demo catalog, [`DEFAULT_STORE_NAME`])
//!
//! Configuration is read-only after [`AppConfig`] is built.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use storefront_core::{CatalogConfig, DEFAULT_STORE_NAME};

use crate::error::CliError;

/// Storefront - interactive store menu
#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON catalog file (the demo catalog is used when omitted)
    #[arg(long, env = "STOREFRONT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Name shown in the welcome banner
    #[arg(long, env = "STOREFRONT_NAME", default_value = DEFAULT_STORE_NAME)]
    pub store_name: String,

    /// Reject the whole order when any line fails
    #[arg(long, env = "STOREFRONT_ATOMIC_CHECKOUT")]
    pub atomic: bool,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Demo,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Demo => f.write_str("built-in demo"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Store name (displayed in the welcome banner)
    pub store_name: String,

    /// Catalog location
    pub catalog: CatalogSource,

    /// Use all-or-nothing checkout instead of line-by-line
    pub atomic_checkout: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            catalog: CatalogSource::Demo,
            atomic_checkout: false,
        }
    }
}

impl From<CliArgs> for AppConfig {
    fn from(args: CliArgs) -> Self {
        AppConfig {
            store_name: args.store_name,
            catalog: args.catalog.map_or(CatalogSource::Demo, CatalogSource::File),
            atomic_checkout: args.atomic,
        }
    }
}

impl AppConfig {
    /// Reads and parses the catalog file, or returns the demo catalog.
    pub fn load_catalog(&self) -> Result<CatalogConfig, CliError> {
        match &self.catalog {
            CatalogSource::Demo => Ok(CatalogConfig::demo()),
            CatalogSource::File(path) => {
                let json = fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
                    path: path.clone(),
                    source,
                })?;
                CatalogConfig::from_json(&json).map_err(|source| CliError::CatalogParse {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_args_without_catalog_use_demo() {
        let args = CliArgs::try_parse_from(["storefront", "--store-name", "Corner Shop"]).unwrap();
        let config = AppConfig::from(args);

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.catalog, CatalogSource::Demo);
        assert_eq!(config.load_catalog().unwrap(), CatalogConfig::demo());
    }

    #[test]
    fn test_args_with_catalog_and_atomic() {
        let args =
            CliArgs::try_parse_from(["storefront", "--catalog", "shop.json", "--atomic"]).unwrap();
        let config = AppConfig::from(args);

        assert_eq!(config.catalog, CatalogSource::File(PathBuf::from("shop.json")));
        assert!(config.atomic_checkout);
    }

    #[test]
    fn test_catalog_file_is_parsed() {
        let path = std::env::temp_dir().join(format!("storefront-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{ "products": [ { "kind": "unlimited", "name": "License", "price_cents": 500 } ] }"#,
        )
        .unwrap();

        let config = AppConfig {
            catalog: CatalogSource::File(path.clone()),
            ..AppConfig::default()
        };
        let catalog = config.load_catalog();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.unwrap().products.len(), 1);
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = AppConfig {
            catalog: CatalogSource::File(PathBuf::from("/nonexistent/storefront.json")),
            ..AppConfig::default()
        };
        let err = config.load_catalog().unwrap_err();
        assert_eq!(err.code(), ErrorCode::Catalog);
        assert!(matches!(err, CliError::CatalogRead { .. }));
    }

    #[test]
    fn test_catalog_source_display() {
        assert_eq!(CatalogSource::Demo.to_string(), "built-in demo");
        assert_eq!(
            CatalogSource::File(PathBuf::from("shop.json")).to_string(),
            "shop.json"
        );
    }
}
