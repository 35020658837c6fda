//! Likelihood value object (0-100 scale).
//!
//! Base likelihood of a condition, used only for ranking matched
//! conditions in checklist mode.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A likelihood between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Likelihood(u8);

impl Likelihood {
    /// Zero likelihood.
    pub const ZERO: Self = Self(0);

    /// Certain.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Likelihood, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Likelihood, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "likelihood",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Likelihood {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
