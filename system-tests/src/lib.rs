// system-tests/src/lib.rs
// ============================================================================
// Module: Dog API System Tests Library
// Description: Shared configuration, case tables, and sampling for system tests.
// Purpose: Provide common utilities for the dog API system-test binary.
// Dependencies: dog-api-contract, rand
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration, the fixed test-case tables, and the
//! seeded sampler used by the black-box suites in `system-tests/tests`.
//! The suites themselves only build with the `system-tests` feature because
//! they talk to the live API.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cases;
pub mod config;
pub mod sampling;
