//! Page root. Owns the cart, the premium flag and the broadcast bus, and hands them
//! down to the product display.

use common::bus::EventBus;
use common::config::CatalogConfig;
use common::model::{Cart, VariantId};
use log::error;
use yew::{html, Component, Context, Html};

use crate::components::product::ProductComponent;

pub enum Msg {
    AddToCart(VariantId),
    ClearCart,
}

pub struct App {
    bus: EventBus,
    catalog: Result<CatalogConfig, String>,
    cart: Cart,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let catalog = CatalogConfig::embedded().map_err(|err| {
            error!("catalog could not be loaded: {err}");
            err.to_string()
        });

        Self {
            bus: EventBus::new(),
            catalog,
            cart: Cart::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AddToCart(id) => self.cart.receive_add(id),
            Msg::ClearCart => self.cart.receive_clear(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div id="app">
                <div class="nav-bar"></div>
                <div class="cart">
                    <p>{ format!("Cart({})", self.cart.len()) }</p>
                </div>
                {
                    match &self.catalog {
                        Ok(config) => html! {
                            <ProductComponent
                                premium={config.premium}
                                cart={self.cart.clone()}
                                product={config.product.clone()}
                                bus={self.bus.clone()}
                                on_add_to_cart={link.callback(Msg::AddToCart)}
                                on_clear_cart={link.callback(|_| Msg::ClearCart)}
                            />
                        },
                        Err(message) => html! {
                            <p class="load-error">{ format!("The catalog could not be loaded: {message}") }</p>
                        },
                    }
                }
            </div>
        }
    }
}
