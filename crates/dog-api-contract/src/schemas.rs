// crates/dog-api-contract/src/schemas.rs
// ============================================================================
// Module: Contract Schemas
// Description: JSON schema documents for each API response family.
// Purpose: Declare once the shape every response family must satisfy.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Each response family has one JSON Schema (draft 2020-12) document. The
//! documents are purely declarative and are compiled by
//! [`crate::SchemaRegistry`].
//!
//! The random-images schema only requires bare string items, while the
//! per-breed image schema additionally pins the image host and `.jpg`
//! extension. The two stay separate schemas because the random endpoint is
//! checked more loosely than the per-breed endpoints.
//!
//! Every schema is closed: fields outside the envelope fail validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Value;
use serde_json::json;

use crate::STATUS_ERROR;
use crate::STATUS_SUCCESS;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// JSON Schema dialect used by every response schema.
pub const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Pattern every per-breed image URL must match.
pub const BREED_IMAGE_URL_PATTERN: &str = r"^https://images\.dog\.ceo/.+\.jpg$";

/// Error code carried by the not-found envelope.
pub const NOT_FOUND_CODE: u16 = 404;

// ============================================================================
// SECTION: Schema Catalog
// ============================================================================

/// Named response schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResponseSchema {
    /// `breeds/image/random/{count}`: list of bare strings.
    RandomImages,
    /// Per-breed and per-subbreed image lists: hosted `.jpg` URLs.
    BreedImages,
    /// `breeds/list/all`: mapping of breed to subbreed list.
    BreedCatalog,
    /// 404 error envelope.
    NotFound,
}

impl ResponseSchema {
    /// Every schema, in registry order.
    pub const ALL: [Self; 4] =
        [Self::RandomImages, Self::BreedImages, Self::BreedCatalog, Self::NotFound];

    /// Returns the stable schema name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RandomImages => "random_images",
            Self::BreedImages => "breed_images",
            Self::BreedCatalog => "breed_catalog",
            Self::NotFound => "not_found",
        }
    }

    /// Returns the schema `$id`.
    #[must_use]
    pub fn id(self) -> String {
        format!("dog-api://contract/schemas/{}.schema.json", self.name())
    }

    /// Returns the JSON Schema document.
    #[must_use]
    pub fn document(self) -> Value {
        match self {
            Self::RandomImages => random_images_schema(),
            Self::BreedImages => breed_images_schema(),
            Self::BreedCatalog => breed_catalog_schema(),
            Self::NotFound => not_found_schema(),
        }
    }
}

impl fmt::Display for ResponseSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SECTION: Schema Builders
// ============================================================================

/// Builds the list-of-bare-strings success schema.
fn random_images_schema() -> Value {
    envelope_schema(
        ResponseSchema::RandomImages,
        "Random images",
        json!({
            "type": "array",
            "items": { "type": "string" }
        }),
        success_status(),
    )
}

/// Builds the hosted-image-list success schema.
fn breed_images_schema() -> Value {
    envelope_schema(
        ResponseSchema::BreedImages,
        "Breed images",
        json!({
            "type": "array",
            "minItems": 1,
            "items": {
                "type": "string",
                "pattern": BREED_IMAGE_URL_PATTERN
            }
        }),
        success_status(),
    )
}

/// Builds the breed catalog schema.
fn breed_catalog_schema() -> Value {
    envelope_schema(
        ResponseSchema::BreedCatalog,
        "Breed catalog",
        json!({
            "type": "object",
            "additionalProperties": {
                "type": "array",
                "items": { "type": "string" }
            }
        }),
        json!({ "type": "string" }),
    )
}

/// Builds the 404 error envelope schema.
fn not_found_schema() -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "$id": ResponseSchema::NotFound.id(),
        "title": "Not found",
        "type": "object",
        "required": ["status", "message", "code"],
        "properties": {
            "status": { "type": "string", "enum": [STATUS_ERROR] },
            "message": { "type": "string" },
            "code": { "type": "integer", "enum": [NOT_FOUND_CODE] }
        },
        "additionalProperties": false
    })
}

/// Wraps a `message` schema in the closed `{status, message}` envelope.
fn envelope_schema(schema: ResponseSchema, title: &str, message: Value, status: Value) -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "$id": schema.id(),
        "title": title,
        "type": "object",
        "required": ["status", "message"],
        "properties": {
            "message": message,
            "status": status
        },
        "additionalProperties": false
    })
}

/// Status schema accepting only `"success"`.
fn success_status() -> Value {
    json!({ "type": "string", "enum": [STATUS_SUCCESS] })
}
