//! Review form. Keeps the three drafts and the last validation errors, and publishes a
//! complete review on the bus it receives through props.

use common::bus::EventBus;
use common::state::ReviewForm;
use yew::prelude::*;

mod messages;
mod update;
mod view;

use messages::Msg;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductReviewProps {
    pub bus: EventBus,
}

pub struct ProductReviewComponent {
    pub form: ReviewForm,
}

impl Component for ProductReviewComponent {
    type Message = Msg;
    type Properties = ProductReviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ReviewForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
