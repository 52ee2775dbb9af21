//! Product definition and the pricing rules derived from it.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use super::{Variant, VariantId};
use crate::error::ModelError;

/// Shipping charged to members without a premium account.
pub const FLAT_SHIPPING_COST: f64 = 2.99;

/// Shipping cost shown next to the product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shipping {
    Free,
    Flat(f64),
}

impl Shipping {
    pub fn for_member(premium: bool) -> Self {
        if premium {
            Shipping::Free
        } else {
            Shipping::Flat(FLAT_SHIPPING_COST)
        }
    }
}

impl fmt::Display for Shipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shipping::Free => f.write_str("Free"),
            Shipping::Flat(cost) => write!(f, "{cost}"),
        }
    }
}

/// A product with at least one variant. Variant ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    brand: String,
    details: Vec<String>,
    variants: Vec<Variant>,
}

#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    brand: String,
    #[serde(default)]
    details: Vec<String>,
    variants: Vec<Variant>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ModelError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.name, record.brand, record.details, record.variants)
    }
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        details: Vec<String>,
        variants: Vec<Variant>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if variants.is_empty() {
            return Err(ModelError::NoVariants(name));
        }

        let mut seen: HashSet<VariantId> = HashSet::with_capacity(variants.len());
        for variant in &variants {
            if !seen.insert(variant.id) {
                return Err(ModelError::DuplicateVariant(variant.id));
            }
        }

        Ok(Self {
            name,
            brand: brand.into(),
            details,
            variants,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Brand and product name, as shown in the heading.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Never empty.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}
