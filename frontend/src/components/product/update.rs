use log::warn;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ProductComponent;

/// Applies `msg` and reports whether the view must re-render.
///
/// Cart changes are forwarded to the page root through the callbacks in props.
pub fn update(component: &mut ProductComponent, ctx: &Context<ProductComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Hover(index) => {
            if component.catalog.selected_index() == index {
                return false;
            }
            match component.catalog.hover(index) {
                Ok(()) => true,
                Err(err) => {
                    warn!("product: {err}");
                    false
                }
            }
        }
        Msg::AddToCart => {
            let id = component.catalog.add_to_cart();
            ctx.props().on_add_to_cart.emit(id);
            true
        }
        Msg::ClearCart => {
            component.catalog.clear_cart();
            ctx.props().on_clear_cart.emit(());
            true
        }
        Msg::ReviewSubmitted(review) => {
            component.catalog.receive_review(review);
            true
        }
    }
}
