//! Draft state and submission rules of the review form.
//!
//! Validation is presence-only: empty text counts as unset, and the rating comes from a
//! fixed set of options. A submission either publishes one complete `Review` on the bus
//! and clears the drafts, or records one `FieldError` per missing field and publishes
//! nothing.

use log::warn;

use crate::bus::{BusEvent, EventBus};
use crate::error::{FieldError, ModelError};
use crate::model::{Rating, Review};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    name: Option<String>,
    body: Option<String>,
    rating: Option<Rating>,
    errors: Vec<FieldError>,
}

fn present(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl ReviewForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = present(value.into());
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.body = present(value.into());
    }

    pub fn set_rating(&mut self, rating: Option<Rating>) {
        self.rating = rating;
    }

    /// Sets the rating from a select-box value. An empty or rejected value unsets it.
    pub fn set_rating_input(&mut self, raw: &str) -> Result<(), ModelError> {
        self.rating = None;
        if !raw.trim().is_empty() {
            self.rating = Some(raw.parse()?);
        }
        Ok(())
    }

    /// Current name draft, empty when unset.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Current review text draft, empty when unset.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Messages from the last submission, in name, review, rating order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Validates the drafts and publishes the resulting review.
    ///
    /// Returns the published review, or `None` when a field was missing. Every bus
    /// subscriber has seen the review by the time this returns.
    pub fn submit(&mut self, bus: &EventBus) -> Option<Review> {
        self.errors.clear();

        match (self.name.take(), self.body.take(), self.rating.take()) {
            (Some(name), Some(body), Some(rating)) => match Review::new(name, body, rating) {
                Ok(review) => {
                    bus.publish(BusEvent::ReviewSubmitted(review.clone()));
                    Some(review)
                }
                Err(err) => {
                    warn!("review form: dropped invalid draft: {err}");
                    None
                }
            },
            (name, body, rating) => {
                if name.is_none() {
                    self.errors.push(FieldError::NameRequired);
                }
                if body.is_none() {
                    self.errors.push(FieldError::ReviewRequired);
                }
                if rating.is_none() {
                    self.errors.push(FieldError::RatingRequired);
                }
                self.name = name;
                self.body = body;
                self.rating = rating;
                None
            }
        }
    }
}
