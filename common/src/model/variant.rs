use std::fmt;

use serde::Deserialize;

/// Identifier of a variant, unique within its product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One purchasable flavour of a product (a colour, for socks).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    /// CSS colour used for the swatch background.
    pub color: String,
    /// Image reference shown while this variant is selected.
    pub image: String,
    /// Units available; zero means out of stock.
    pub quantity: u32,
}

impl Variant {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}
