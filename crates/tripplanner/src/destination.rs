//! The destination record.
//!
//! This module defines [`Destination`], the immutable value object one
//! itinerary entry is made of.

use std::fmt;

/// A single travel destination.
///
/// All three fields are trimmed at construction and never change afterwards.
/// Natural equality (`==`) compares every field; identity for deduplication
/// purposes is [`same_place`](Destination::same_place), which considers only
/// name and country, case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    name: String,
    country: String,
    description: String,
}

impl Destination {
    /// Create a new destination, trimming surrounding whitespace from every
    /// field.
    #[must_use]
    pub fn new(name: &str, country: &str, description: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            country: country.trim().to_string(),
            description: description.trim().to_string(),
        }
    }

    /// The destination's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The country the destination is in.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Free-form description of the destination.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Identity comparison: name and country match case-insensitively; the
    /// description plays no part.
    ///
    /// Usable directly as an equality strategy for the container:
    ///
    /// ```
    /// use tripplanner::{Destination, DynArray};
    ///
    /// let mut itinerary = DynArray::new();
    /// itinerary.push(Destination::new("Paris", "France", "City of lights"));
    ///
    /// let probe = Destination::new("PARIS", "france", "");
    /// assert!(itinerary.contains_by(&probe, Destination::same_place));
    /// ```
    #[must_use]
    pub fn same_place(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
            && self.country.to_lowercase() == other.country.to_lowercase()
    }

    /// Case-insensitive match against the name field only. The country is
    /// deliberately ignored; the shell's search and remove flows look up
    /// entries by name alone.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) — {}", self.name, self.country, self.description)
    }
}
