//! Error types shared by the model, the catalog state and the configuration loader.
//!
//! `FieldError` is the only error a shopper ever sees: its `Display` text is the
//! message rendered in the review form. `ModelError` and `CatalogError` guard
//! construction of typed records and selection changes; they never reach the page
//! under normal interaction because every control draws its input from valid data.

use thiserror::Error;

use crate::model::VariantId;

/// A required review field that was left empty when the form was submitted.
///
/// Variants are declared in the order the form reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name required.")]
    NameRequired,
    #[error("Review required.")]
    ReviewRequired,
    #[error("Rating required.")]
    RatingRequired,
}

/// Rejected construction of a typed record or of the catalog configuration.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(i64),

    #[error("rating {0:?} is not a whole number")]
    RatingNotANumber(String),

    #[error("review {0} must not be empty")]
    EmptyField(&'static str),

    #[error("product {0:?} has no variants")]
    NoVariants(String),

    #[error("variant id {0} appears more than once")]
    DuplicateVariant(VariantId),

    #[error("invalid catalog configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Rejected change to the catalog display's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("variant index {index} is out of range for {len} variants")]
    VariantOutOfRange { index: usize, len: usize },
}
