use common::model::Review;
use common::state::Tab;
use yew::prelude::*;

use super::{Msg, ProductTabsComponent};
use crate::components::product_review::ProductReviewComponent;

pub fn view(component: &ProductTabsComponent, ctx: &Context<ProductTabsComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    html! {
        <div class="reviews">
            <div class="tabs">
                {
                    for Tab::ALL.iter().map(|&tab| html! {
                        <span
                            class={classes!("tab", if component.tabs.is_active(tab) { "activeTab" } else { "" })}
                            onclick={link.callback(move |_| Msg::Select(tab))}
                        >
                            { tab.label() }
                        </span>
                    })
                }
            </div>

            <div style={visibility(component.tabs.is_active(Tab::Reviews))}>
                { build_review_list(&props.reviews) }
            </div>

            <div style={visibility(component.tabs.is_active(Tab::MakeReview))}>
                <ProductReviewComponent bus={props.bus.clone()} />
            </div>
        </div>
    }
}

fn visibility(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "display: none;"
    }
}

fn build_review_list(reviews: &[Review]) -> Html {
    if reviews.is_empty() {
        return html! {
            <p style="text-align: center;">{"There are no reviews yet."}</p>
        };
    }

    html! {
        <ul>
            {
                for reviews.iter().map(|review| html! {
                    <li>
                        <p>{ review.name().to_string() }</p>
                        <p>{ format!("Rating: {}", review.rating()) }</p>
                        <p><i>{ format!("'{}'", review.body()) }</i></p>
                    </li>
                })
            }
        </ul>
    }
}
