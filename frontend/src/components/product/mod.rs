//! Catalog display: product image and info, variant swatches, the cart buttons and the
//! review tabs underneath.
//!
//! On creation the component subscribes to `ReviewSubmitted` on the bus it receives
//! through props and appends each review to its own list, which it passes down to the
//! tab panel.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::ProductProps;
pub use state::ProductComponent;

impl Component for ProductComponent {
    type Message = Msg;
    type Properties = ProductProps;

    fn create(ctx: &Context<Self>) -> Self {
        let on_review = ctx.link().callback(Msg::ReviewSubmitted);
        ctx.props()
            .bus
            .on_review_submitted(move |review| on_review.emit(review.clone()));

        ProductComponent::new(ctx.props().product.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
