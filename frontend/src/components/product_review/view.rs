use common::model::Rating;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::messages::Msg;
use super::ProductReviewComponent;

pub fn view(component: &ProductReviewComponent, ctx: &Context<ProductReviewComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    html! {
        <form
            class="review-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            { build_errors(component) }

            <p>
                <label for="name">{"Name:"}</label>
                <input
                    id="name"
                    value={form.name().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </p>

            <p>
                <label for="review">{"Review:"}</label>
                <textarea
                    id="review"
                    value={form.body().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetBody(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </p>

            <p>
                <label for="rating">{"Rating:"}</label>
                <select
                    id="rating"
                    onchange={link.callback(|e: Event| {
                        Msg::SetRating(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}
                >
                    <option value="" disabled=true selected={form.rating().is_none()}></option>
                    {
                        for Rating::choices().map(|rating| html! {
                            <option
                                value={rating.to_string()}
                                selected={form.rating() == Some(rating)}
                            >
                                { rating.to_string() }
                            </option>
                        })
                    }
                </select>
            </p>

            <p>
                <input type="submit" value="Submit" />
            </p>
        </form>
    }
}

fn build_errors(component: &ProductReviewComponent) -> Html {
    let errors = component.form.errors();
    if errors.is_empty() {
        return html! {};
    }

    html! {
        <div class="form-errors">
            <b>{"Please correct the following error(s):"}</b>
            <ul>
                { for errors.iter().map(|error| html! { <li>{ error.to_string() }</li> }) }
            </ul>
        </div>
    }
}
