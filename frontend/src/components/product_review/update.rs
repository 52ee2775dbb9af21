use log::warn;
use yew::prelude::*;

use super::messages::Msg;
use super::ProductReviewComponent;

pub fn update(
    component: &mut ProductReviewComponent,
    ctx: &Context<ProductReviewComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetName(name) => {
            component.form.set_name(name);
            true
        }
        Msg::SetBody(body) => {
            component.form.set_body(body);
            true
        }
        Msg::SetRating(raw) => match component.form.set_rating_input(&raw) {
            Ok(()) => true,
            Err(err) => {
                warn!("review form: ignored rating option: {err}");
                false
            }
        },
        Msg::Submit => {
            // Sibling components see the review through the bus; nothing to forward here.
            component.form.submit(&ctx.props().bus);
            true
        }
    }
}
