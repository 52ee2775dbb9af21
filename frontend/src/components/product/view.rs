//! View for the catalog display.
//!
//! The "Add to Cart" button is disabled (and styled `disabledButton`) while the selected
//! variant is out of stock. "Clear Cart" only appears once something was added.

use std::rc::Rc;

use common::state::CatalogState;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ProductComponent;
use crate::components::product_tabs::ProductTabsComponent;

pub fn view(component: &ProductComponent, ctx: &Context<ProductComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let catalog = &component.catalog;

    html! {
        <div class="product">
            <div class="product-image">
                <img src={catalog.image().to_string()} alt={catalog.title()} />
            </div>

            <div class="product-info">
                <p class="product-title">{ catalog.title() }</p>
                {
                    if catalog.in_stock() {
                        html! { <p>{"In Stock"}</p> }
                    } else {
                        html! { <p>{"Out of Stock"}</p> }
                    }
                }
                <p>{ format!("Shipping: {}", catalog.shipping(props.premium)) }</p>

                { build_details(catalog) }
                { build_swatches(catalog, link) }
                { build_cart_buttons(catalog, link) }
            </div>

            <div class="tabs">
                <ProductTabsComponent
                    reviews={Rc::clone(catalog.reviews())}
                    bus={props.bus.clone()}
                />
            </div>
        </div>
    }
}

fn build_details(catalog: &CatalogState) -> Html {
    html! {
        <ul>
            { for catalog.product().details().iter().map(|detail| html! { <li>{ detail.clone() }</li> }) }
        </ul>
    }
}

/// One colour box per variant; hovering a box selects that variant.
fn build_swatches(catalog: &CatalogState, link: &Scope<ProductComponent>) -> Html {
    catalog
        .product()
        .variants()
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            html! {
                <div
                    key={variant.id.to_string()}
                    class="color-box"
                    style={format!("background-color: {};", variant.color)}
                    onmouseover={link.callback(move |_: MouseEvent| Msg::Hover(index))}
                />
            }
        })
        .collect::<Html>()
}

fn build_cart_buttons(catalog: &CatalogState, link: &Scope<ProductComponent>) -> Html {
    let in_stock = catalog.in_stock();

    html! {
        <>
            <button
                onclick={link.callback(|_| Msg::AddToCart)}
                disabled={!in_stock}
                class={classes!(if in_stock { "" } else { "disabledButton" })}
            >
                {"Add to Cart"}
            </button>
            {
                if catalog.cart_has_contents() {
                    html! {
                        <button class="clear-cart-btn" onclick={link.callback(|_| Msg::ClearCart)}>
                            {"Clear Cart"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
