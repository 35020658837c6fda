//! Condition entity - a candidate diagnosis with its checklist and guidance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConditionKey, Likelihood, ValidationError};
use super::criterion::Criterion;

/// Opaque reference to illustrative media, resolved by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A candidate diagnosis with associated guidance text and an ordered
/// checklist of criteria.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `criteria` is non-empty; criteria order is presentation order only
/// - Immutable after knowledge-base load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    key: ConditionKey,
    name: String,
    summary: String,
    treatment: String,
    prevention: String,
    likelihood: Likelihood,
    media: Vec<MediaRef>,
    criteria: Vec<Criterion>,
}

impl Condition {
    /// Creates a condition, validating name and checklist.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        key: ConditionKey,
        name: impl Into<String>,
        summary: impl Into<String>,
        treatment: impl Into<String>,
        prevention: impl Into<String>,
        likelihood: Likelihood,
        media: Vec<MediaRef>,
        criteria: Vec<Criterion>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        Ok(Self {
            key,
            name,
            summary: summary.into(),
            treatment: treatment.into(),
            prevention: prevention.into(),
            likelihood,
            media,
            criteria,
        })
    }

    pub fn key(&self) -> &ConditionKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    pub fn prevention(&self) -> &str {
        &self.prevention
    }

    /// Base likelihood, used only for ranking in checklist mode.
    pub fn likelihood(&self) -> Likelihood {
        self.likelihood
    }

    pub fn media(&self) -> &[MediaRef] {
        &self.media
    }

    /// Ordered checklist of criteria for this condition.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }
}
