// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: dog-api-contract, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values, and malformed numbers or
//! URLs fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use dog_api_contract::DEFAULT_BASE_URL;
use dog_api_contract::endpoints::parse_base_url;
use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional API base URL override (must end with `/`).
    BaseUrl,
    /// Optional run root override.
    RunRoot,
    /// Optional request timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional sampling seed (unsigned 64-bit integer).
    Seed,
}

impl SystemTestEnv {
    /// Every configuration key.
    pub const ALL: [Self; 4] = [Self::BaseUrl, Self::RunRoot, Self::TimeoutSeconds, Self::Seed];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "DOG_API_SYSTEM_TEST_BASE_URL",
            Self::RunRoot => "DOG_API_SYSTEM_TEST_RUN_ROOT",
            Self::TimeoutSeconds => "DOG_API_SYSTEM_TEST_TIMEOUT_SEC",
            Self::Seed => "DOG_API_SYSTEM_TEST_SEED",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemTestConfig {
    /// API base URL, always ending with `/`.
    pub base_url: Url,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
    /// Optional request timeout; `None` keeps the HTTP client defaults.
    pub timeout: Option<Duration>,
    /// Optional sampling seed; `None` draws a fresh seed per process.
    pub seed: Option<u64>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid URL, timeout, or seed).
    pub fn load() -> Result<Self, String> {
        let base_url_raw = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?;
        let base_url = parse_base_url(base_url_raw.as_deref().unwrap_or(DEFAULT_BASE_URL))
            .map_err(|err| format!("{}: {err}", SystemTestEnv::BaseUrl.as_str()))?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let seed = read_env_nonempty(SystemTestEnv::Seed.as_str())?
            .map(|value| parse_seed(SystemTestEnv::Seed.as_str(), &value))
            .transpose()?;
        Ok(Self {
            base_url,
            run_root,
            timeout,
            seed,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is non-numeric or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a sampling seed.
///
/// # Errors
///
/// Returns an error when the value is not an unsigned 64-bit integer.
fn parse_seed(name: &str, raw: &str) -> Result<u64, String> {
    raw.trim().parse().map_err(|_| format!("{name} must be an unsigned 64-bit integer"))
}
