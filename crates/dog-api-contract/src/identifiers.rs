// crates/dog-api-contract/src/identifiers.rs
// ============================================================================
// Module: Dog API Identifiers
// Description: Opaque names for breeds and subbreeds.
// Purpose: Keep breed and subbreed strings from being mixed up at call sites.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Breed and subbreed names are opaque strings owned by the upstream catalog.
//! They serialize transparently; no validation happens here because the
//! catalog itself is the authority on which names exist.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Top-level breed name, unique within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreedName(String);

impl BreedName {
    /// Creates a new breed name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for BreedName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BreedName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Subbreed name nested under a [`BreedName`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubbreedName(String);

impl SubbreedName {
    /// Creates a new subbreed name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubbreedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SubbreedName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SubbreedName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
