//! Review records published by the review form.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Star rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every rating the form offers, highest first (the order of the select box).
    pub fn choices() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(ModelError::RatingOutOfRange(i64::from(value)))
        }
    }
}

/// Parses the value of a rating `<select>` option.
impl FromStr for Rating {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ModelError::RatingNotANumber(trimmed.to_string()))?;
        u8::try_from(value)
            .map_err(|_| ModelError::RatingOutOfRange(value))
            .and_then(Rating::try_from)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted review. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    name: String,
    body: String,
    rating: Rating,
}

impl Review {
    /// Builds a review, rejecting an empty name or body.
    pub fn new(
        name: impl Into<String>,
        body: impl Into<String>,
        rating: Rating,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let body = body.into();
        if name.is_empty() {
            return Err(ModelError::EmptyField("name"));
        }
        if body.is_empty() {
            return Err(ModelError::EmptyField("body"));
        }
        Ok(Self { name, body, rating })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}
