//! Typed records exchanged between the presentation units.

mod cart;
mod product;
mod review;
mod variant;

pub use cart::Cart;
pub use product::{Product, Shipping, FLAT_SHIPPING_COST};
pub use review::{Rating, Review};
pub use variant::{Variant, VariantId};
