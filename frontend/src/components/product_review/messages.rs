pub enum Msg {
    SetName(String),
    SetBody(String),
    /// Raw value of the selected rating option.
    SetRating(String),
    Submit,
}
