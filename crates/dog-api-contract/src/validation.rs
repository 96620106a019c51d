// crates/dog-api-contract/src/validation.rs
// ============================================================================
// Module: Schema Registry
// Description: Compiled validators for every response schema.
// Purpose: Validate response documents and report every violation.
// Dependencies: jsonschema, serde_json
// ============================================================================

//! ## Overview
//! [`SchemaRegistry`] compiles each [`ResponseSchema`] document once and
//! validates response bodies against it. Failures collect every validation
//! message so a test report shows the offending values, not just a boolean.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;

use crate::ContractError;
use crate::schemas::ResponseSchema;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Compiled validators keyed by response schema.
pub struct SchemaRegistry {
    /// Validator per schema.
    validators: BTreeMap<ResponseSchema, Validator>,
}

impl SchemaRegistry {
    /// Compiles every response schema.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::SchemaCompile`] when a schema document fails
    /// to compile.
    pub fn new() -> Result<Self, ContractError> {
        let mut validators = BTreeMap::new();
        for schema in ResponseSchema::ALL {
            validators.insert(schema, compile_schema(schema)?);
        }
        Ok(Self {
            validators,
        })
    }

    /// Validates `instance` against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::SchemaViolation`] listing every validation
    /// failure.
    pub fn validate(&self, schema: ResponseSchema, instance: &Value) -> Result<(), ContractError> {
        let Some(validator) = self.validators.get(&schema) else {
            return Err(ContractError::SchemaCompile {
                schema: schema.name(),
                reason: "schema not registered".to_string(),
            });
        };
        let messages: Vec<String> =
            validator.iter_errors(instance).map(|err| err.to_string()).collect();
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ContractError::SchemaViolation {
                schema: schema.name(),
                messages,
            })
        }
    }

    /// Returns true when `instance` satisfies `schema`.
    #[must_use]
    pub fn is_valid(&self, schema: ResponseSchema, instance: &Value) -> bool {
        self.validators.get(&schema).is_some_and(|validator| validator.is_valid(instance))
    }
}

/// Compiles a single schema document.
fn compile_schema(schema: ResponseSchema) -> Result<Validator, ContractError> {
    jsonschema::options().with_draft(Draft::Draft202012).build(&schema.document()).map_err(|err| {
        ContractError::SchemaCompile {
            schema: schema.name(),
            reason: err.to_string(),
        }
    })
}
