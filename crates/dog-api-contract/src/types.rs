// crates/dog-api-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Response envelopes and the breed catalog.
// Purpose: Provide typed views over the JSON documents the API returns.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every response from the API is wrapped in an envelope carrying a `status`
//! string and an endpoint-specific `message`. Error responses add a numeric
//! `code`. The breed catalog is the `message` of the list-all endpoint and is
//! the source for the derived fixture views used by the sampled tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::ContractError;
use crate::STATUS_ERROR;
use crate::identifiers::BreedName;
use crate::identifiers::SubbreedName;

// ============================================================================
// SECTION: Envelopes
// ============================================================================

/// Success envelope `{status, message}`.
///
/// `T` is `String` for single-image endpoints, `Vec<String>` for image lists
/// and subbreed lists, and [`BreedCatalog`] for the list-all endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Envelope status, `"success"` for successful responses.
    pub status: String,
    /// Endpoint-specific payload.
    pub message: T,
}

/// Error envelope `{status, message, code}`.
///
/// # Invariants
/// - For responses produced by the API, `code` equals the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Envelope status, `"error"` for error responses.
    pub status: String,
    /// Human-readable error description.
    pub message: String,
    /// Numeric error code mirroring the HTTP status.
    pub code: u16,
}

impl ErrorEnvelope {
    /// Returns true when the envelope reports an error whose code matches `http_status`.
    #[must_use]
    pub fn matches_status(&self, http_status: u16) -> bool {
        self.status == STATUS_ERROR && self.code == http_status
    }
}

// ============================================================================
// SECTION: Breed Catalog
// ============================================================================

/// Breed paired with its non-empty subbreed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedWithSubbreeds {
    /// Breed name.
    pub breed: BreedName,
    /// Subbreeds in catalog order.
    pub subbreeds: Vec<SubbreedName>,
}

/// Snapshot of the breed → subbreed mapping.
///
/// # Invariants
/// - Breeds iterate in name order.
/// - Subbreed lists keep the order the API returned them in and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreedCatalog {
    /// Breed → subbreed mapping.
    breeds: BTreeMap<BreedName, Vec<SubbreedName>>,
}

impl BreedCatalog {
    /// Creates a catalog from an existing mapping.
    #[must_use]
    pub const fn new(breeds: BTreeMap<BreedName, Vec<SubbreedName>>) -> Self {
        Self {
            breeds,
        }
    }

    /// Extracts the catalog from a full list-all response body.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::MalformedResponse`] when the body has no
    /// `message` mapping or the mapping values are not string lists.
    pub fn from_response(body: &Value) -> Result<Self, ContractError> {
        let Some(message) = body.get("message") else {
            return Err(ContractError::MalformedResponse(
                "catalog response has no message field".to_string(),
            ));
        };
        if !message.is_object() {
            return Err(ContractError::MalformedResponse(format!(
                "catalog message must be a mapping, got {message}"
            )));
        }
        serde_json::from_value(message.clone())
            .map_err(|err| ContractError::MalformedResponse(format!("catalog message: {err}")))
    }

    /// Returns the breeds that own at least one subbreed, in name order.
    #[must_use]
    pub fn breeds_with_subbreeds(&self) -> Vec<BreedWithSubbreeds> {
        self.breeds
            .iter()
            .filter(|(_, subbreeds)| !subbreeds.is_empty())
            .map(|(breed, subbreeds)| BreedWithSubbreeds {
                breed: breed.clone(),
                subbreeds: subbreeds.clone(),
            })
            .collect()
    }

    /// Returns every breed name, in name order.
    #[must_use]
    pub fn breed_names(&self) -> Vec<BreedName> {
        self.breeds.keys().cloned().collect()
    }
}

impl FromIterator<(BreedName, Vec<SubbreedName>)> for BreedCatalog {
    fn from_iter<I: IntoIterator<Item = (BreedName, Vec<SubbreedName>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
