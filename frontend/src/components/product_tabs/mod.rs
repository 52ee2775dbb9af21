//! Review tab panel: "Reviews" lists what the catalog display has collected, "Make a
//! Review" hosts the review form.
//!
//! Both views are always mounted and only their visibility changes, so a half-written
//! review survives switching tabs. Every submitted review switches back to "Reviews".

use std::rc::Rc;

use common::bus::EventBus;
use common::model::Review;
use common::state::{Tab, TabsState};
use yew::prelude::*;

mod view;

pub enum Msg {
    Select(Tab),
    ReviewSubmitted,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProductTabsProps {
    /// The catalog display's review list.
    pub reviews: Rc<Vec<Review>>,
    pub bus: EventBus,
}

pub struct ProductTabsComponent {
    pub tabs: TabsState,
}

impl Component for ProductTabsComponent {
    type Message = Msg;
    type Properties = ProductTabsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let on_review = ctx.link().callback(|_: ()| Msg::ReviewSubmitted);
        ctx.props()
            .bus
            .on_review_submitted(move |_| on_review.emit(()));

        Self {
            tabs: TabsState::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.tabs.active();
        match msg {
            Msg::Select(tab) => self.tabs.select_tab(tab),
            Msg::ReviewSubmitted => self.tabs.on_review_submitted(),
        }
        self.tabs.active() != before
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
