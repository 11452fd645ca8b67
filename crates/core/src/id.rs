//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::Serialize;

use crate::error::DomainError;

/// Identifier of a product.
///
/// Product ids are chosen by the caller (they arrive with the create request),
/// so the only structural requirement is that they are not blank. Uniqueness
/// across the collection is the warehouse's concern, not the id's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier from a caller-supplied string.
    ///
    /// Fails with [`DomainError::InvalidId`] if the string is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("product id must not be blank"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
