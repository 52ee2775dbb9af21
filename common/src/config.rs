//! Catalog configuration embedded in the page at build time.

use serde::Deserialize;

use crate::error::ModelError;
use crate::model::Product;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// What the page sells and to whom.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Premium members ship for free. Fixed for the lifetime of the page.
    #[serde(default)]
    pub premium: bool,
    pub product: Product,
}

impl CatalogConfig {
    /// Parses a catalog document; the product is validated while deserializing.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The catalog bundled from `data/catalog.json`.
    pub fn embedded() -> Result<Self, ModelError> {
        Self::from_json(EMBEDDED_CATALOG)
    }
}
