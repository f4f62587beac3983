//! Listing verification results.

use serde::{Deserialize, Serialize};

use super::Score;
use crate::domain::errors::ServiceError;

/// A non-blank listing URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingUrl(String);

impl ListingUrl {
    /// Creates URL from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns error if the input is blank.
    pub fn new(value: &str) -> Result<Self, ServiceError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ServiceError::EmptyListingUrl);
        }
        Ok(Self(value.to_string()))
    }

    /// Returns URL as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One listing field checked against vehicle records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCheck {
    /// Field name.
    pub label: String,
    /// Value claimed by the listing.
    pub listed: String,
    /// Whether records confirm the claim.
    pub verified: bool,
    /// Mismatch explanation for unverified fields.
    pub flag: Option<String>,
}

impl ListingCheck {
    /// Creates a confirmed check.
    #[must_use]
    pub fn verified(label: impl Into<String>, listed: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            listed: listed.into(),
            verified: true,
            flag: None,
        }
    }

    /// Creates a mismatched check.
    #[must_use]
    pub fn flagged(
        label: impl Into<String>,
        listed: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            listed: listed.into(),
            verified: false,
            flag: Some(flag.into()),
        }
    }
}

/// Result of verifying a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingReport {
    /// Listing that was checked.
    pub url: ListingUrl,
    /// Field checks in display order.
    pub checks: Vec<ListingCheck>,
    /// Overall listing reliability.
    pub reliability_score: Score,
}

impl ListingReport {
    /// Returns number of confirmed fields.
    #[must_use]
    pub fn verified_count(&self) -> usize {
        self.checks.iter().filter(|c| c.verified).count()
    }

    /// Returns number of mismatched fields.
    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.verified).count()
    }
}
