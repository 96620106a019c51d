// crates/dog-api-contract/src/endpoints.rs
// ============================================================================
// Module: Dog API Endpoints
// Description: Endpoint catalog and URL construction.
// Purpose: Render every exercised endpoint path relative to the API base URL.
// Dependencies: url
// ============================================================================

//! ## Overview
//! Endpoints are rendered as paths relative to the API base URL, which must
//! end with `/` so that joining keeps the `api/` prefix. [`Endpoint::Raw`]
//! carries deliberately invalid paths for the negative-path tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use url::Url;

use crate::ContractError;
use crate::identifiers::BreedName;
use crate::identifiers::SubbreedName;

// ============================================================================
// SECTION: Endpoint Catalog
// ============================================================================

/// Endpoint exercised by the suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `breeds/image/random`
    RandomImage,
    /// `breeds/image/random/{count}`
    RandomImages {
        /// Number of images requested.
        count: u32,
    },
    /// `breeds/list/all`
    ListAll,
    /// `breed/{breed}/list`
    BreedSubbreeds {
        /// Breed whose subbreeds are listed.
        breed: BreedName,
    },
    /// `breed/{breed}/images/random`
    BreedRandomImage {
        /// Breed to draw an image from.
        breed: BreedName,
    },
    /// `breed/{breed}/images`
    BreedImages {
        /// Breed whose images are listed.
        breed: BreedName,
    },
    /// `breed/{breed}/{subbreed}/images`
    SubbreedImages {
        /// Parent breed.
        breed: BreedName,
        /// Subbreed whose images are listed.
        subbreed: SubbreedName,
    },
    /// Arbitrary relative path, used for invalid requests.
    Raw(String),
}

impl Endpoint {
    /// Returns the path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::RandomImage => "breeds/image/random".to_string(),
            Self::RandomImages {
                count,
            } => format!("breeds/image/random/{count}"),
            Self::ListAll => "breeds/list/all".to_string(),
            Self::BreedSubbreeds {
                breed,
            } => format!("breed/{breed}/list"),
            Self::BreedRandomImage {
                breed,
            } => format!("breed/{breed}/images/random"),
            Self::BreedImages {
                breed,
            } => format!("breed/{breed}/images"),
            Self::SubbreedImages {
                breed,
                subbreed,
            } => format!("breed/{breed}/{subbreed}/images"),
            Self::Raw(path) => path.trim_start_matches('/').to_string(),
        }
    }

    /// Resolves the endpoint against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidUrl`] when `base` does not end with `/`
    /// or the joined URL is invalid.
    pub fn url(&self, base: &Url) -> Result<Url, ContractError> {
        if !base.path().ends_with('/') {
            return Err(ContractError::InvalidUrl(format!("base url must end with '/': {base}")));
        }
        base.join(&self.path())
            .map_err(|err| ContractError::InvalidUrl(format!("{base} + {}: {err}", self.path())))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Parses and checks an API base URL.
///
/// # Errors
///
/// Returns [`ContractError::InvalidUrl`] when the value does not parse, is not
/// http(s), or does not end with `/`.
pub fn parse_base_url(raw: &str) -> Result<Url, ContractError> {
    let url = Url::parse(raw).map_err(|err| ContractError::InvalidUrl(format!("{raw}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ContractError::InvalidUrl(format!("{raw}: scheme must be http or https")));
    }
    if !url.path().ends_with('/') {
        return Err(ContractError::InvalidUrl(format!("{raw}: must end with '/'")));
    }
    Ok(url)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
