//! Emergency veterinary contact configuration

use serde::Deserialize;
use std::collections::HashMap;

use super::error::ValidationError;

/// Region shown when the caller's region has no dedicated contact.
pub const FALLBACK_REGION: &str = "Other";

/// Emergency veterinary contacts by region
#[derive(Debug, Clone, Deserialize)]
pub struct ContactsConfig {
    /// Region name to phone number. Overrides replace the stock map
    /// entirely rather than merging with it.
    #[serde(default = "default_contacts")]
    pub regions: HashMap<String, String>,
}

fn default_contacts() -> HashMap<String, String> {
    HashMap::from([
        ("Nigeria".to_string(), "+234XXXXXXXXXX".to_string()),
        ("Kenya".to_string(), "+254XXXXXXXXX".to_string()),
        ("Uganda".to_string(), "+256XXXXXXXXX".to_string()),
        (FALLBACK_REGION.to_string(), "N/A".to_string()),
    ])
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            regions: default_contacts(),
        }
    }
}

impl ContactsConfig {
    /// The contact number for a region, falling back to the
    /// [`FALLBACK_REGION`] entry when the region is unknown.
    pub fn contact_for(&self, region: &str) -> Option<&str> {
        self.regions
            .get(region)
            .or_else(|| self.regions.get(FALLBACK_REGION))
            .map(String::as_str)
    }

    /// Region names, sorted for stable presentation.
    pub fn region_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Validate contact configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (region, number) in &self.regions {
            if number.trim().is_empty() {
                return Err(ValidationError::EmptyContactNumber(region.clone()));
            }
        }
        Ok(())
    }
}
