use common::model::Review;

pub enum Msg {
    /// Pointer entered the swatch of the variant at this index.
    Hover(usize),
    AddToCart,
    ClearCart,
    ReviewSubmitted(Review),
}
