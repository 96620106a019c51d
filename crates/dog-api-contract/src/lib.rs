// crates/dog-api-contract/src/lib.rs
// ============================================================================
// Module: Dog API Contract Library
// Description: Canonical contract definitions for the public dog image API.
// Purpose: Provide response shapes, endpoints, and schemas for black-box tests.
// Dependencies: jsonschema, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! The contract library describes the public dog image API as the test suite
//! expects it to behave: the response envelopes, the breed catalog and its
//! derived views, the endpoint paths, and the JSON schemas every response
//! family must satisfy. It performs no I/O; the system-tests crate drives the
//! live service and checks responses against this contract.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod endpoints;
pub mod identifiers;
pub mod images;
pub mod schemas;
pub mod types;
pub mod validation;

// ============================================================================
// SECTION: Errors
// ============================================================================

use thiserror::Error;

/// Errors raised while building requests or checking responses.
///
/// # Invariants
/// - [`ContractError::SchemaViolation`] always carries at least one message.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A schema document failed to compile.
    #[error("schema {schema} failed to compile: {reason}")]
    SchemaCompile {
        /// Schema name.
        schema: &'static str,
        /// Compiler diagnostic.
        reason: String,
    },
    /// A response document did not match its schema.
    #[error("response does not match schema {schema}: {}", messages.join("; "))]
    SchemaViolation {
        /// Schema name.
        schema: &'static str,
        /// Every validation failure, including the offending values.
        messages: Vec<String>,
    },
    /// A response body was not the shape a typed view requires.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// A URL could not be parsed or joined.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Base URL of the public dog image API.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api/";

/// Envelope status reported by successful responses.
pub const STATUS_SUCCESS: &str = "success";

/// Envelope status reported by error responses.
pub const STATUS_ERROR: &str = "error";

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use endpoints::Endpoint;
pub use identifiers::BreedName;
pub use identifiers::SubbreedName;
pub use schemas::ResponseSchema;
pub use types::BreedCatalog;
pub use types::BreedWithSubbreeds;
pub use types::Envelope;
pub use types::ErrorEnvelope;
pub use validation::SchemaRegistry;
