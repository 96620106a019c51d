// system-tests/src/cases.rs
// ============================================================================
// Module: Test Case Tables
// Description: Fixed inputs and report labels for the dog API suites.
// Purpose: Keep parametrized inputs in one immutable place.
// Dependencies: dog-api-contract
// ============================================================================

//! ## Overview
//! Fixed tables drive the parametrized suites. Each test case also carries a
//! [`CaseLabel`] with the category and human-readable title written into its
//! summary artifact.

use dog_api_contract::BreedName;
use dog_api_contract::Endpoint;
use dog_api_contract::SubbreedName;

// ============================================================================
// SECTION: Report Labels
// ============================================================================

/// Category shared by every dog API test case.
pub const CATEGORY: &str = "DOG API TESTS";

/// Report metadata for one test case. Has no effect on behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseLabel {
    /// Report category.
    pub category: &'static str,
    /// Human-readable title.
    pub title: &'static str,
}

impl CaseLabel {
    /// Creates a label in the shared category.
    #[must_use]
    pub const fn new(title: &'static str) -> Self {
        Self {
            category: CATEGORY,
            title,
        }
    }
}

// ============================================================================
// SECTION: Fixed Inputs
// ============================================================================

/// Image counts requested from `breeds/image/random/{count}`.
pub const RANDOM_IMAGE_COUNTS: [u32; 3] = [30, 10, 2];

/// Independent draws for the subbreed cross-check.
pub const SUBBREED_DRAWS: u32 = 5;

/// Independent draws for the random breed image check.
pub const BREED_IMAGE_DRAWS: u32 = 3;

/// Breeds and the subbreeds whose image lists are checked.
pub const SUBBREED_IMAGE_CASES: [(&str, &[&str]); 5] = [
    ("australian", &["shepherd"]),
    ("bulldog", &["boston", "english", "french"]),
    ("deerhound", &["scottish"]),
    ("elkhound", &["norwegian"]),
    ("ridgeback", &["rhodesian"]),
];

/// Breeds whose image lists are checked.
pub const BREED_IMAGE_CASES: [&str; 4] = ["affenpinscher", "bullterrier", "deerhound", "dhole"];

/// Catalog sub-paths that do not exist.
pub const INVALID_CATALOG_PATHS: [&str; 3] =
    ["breeds/list/false1", "breeds/list/false2", "breeds/list/false3"];

// ============================================================================
// SECTION: Endpoint Builders
// ============================================================================

/// Returns the subbreed image endpoints for `breed`, or `None` when the
/// breed is not in [`SUBBREED_IMAGE_CASES`].
#[must_use]
pub fn subbreed_image_endpoints(breed: &str) -> Option<Vec<Endpoint>> {
    SUBBREED_IMAGE_CASES.iter().find(|(name, _)| *name == breed).map(|(name, subbreeds)| {
        subbreeds
            .iter()
            .map(|subbreed| Endpoint::SubbreedImages {
                breed: BreedName::new(*name),
                subbreed: SubbreedName::new(*subbreed),
            })
            .collect()
    })
}

/// Returns the invalid catalog endpoint at `index`.
#[must_use]
pub fn invalid_catalog_endpoint(index: usize) -> Option<Endpoint> {
    INVALID_CATALOG_PATHS.get(index).map(|path| Endpoint::Raw((*path).to_string()))
}
