use common::bus::EventBus;
use common::model::{Cart, Product, VariantId};
use yew::prelude::*;

/// Properties handed down by the page root.
#[derive(Properties, PartialEq, Clone)]
pub struct ProductProps {
    /// Premium members get free shipping.
    pub premium: bool,

    /// The root's cart. Only its presence matters here; the count is shown by the root.
    pub cart: Cart,

    /// Product to display. Read once, when the component is created.
    pub product: Product,

    /// Bus the review form publishes on.
    pub bus: EventBus,

    /// Receives the id of the selected variant on every "Add to Cart" click.
    pub on_add_to_cart: Callback<VariantId>,

    /// Fired by "Clear Cart".
    pub on_clear_cart: Callback<()>,
}
