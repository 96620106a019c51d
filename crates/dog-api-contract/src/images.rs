// crates/dog-api-contract/src/images.rs
// ============================================================================
// Module: Image URL Checks
// Description: Predicates over image URLs returned by the API.
// Purpose: Share the suffix and path checks used by image tests.
// Dependencies: url
// ============================================================================

//! Image URL predicates shared by the image tests.

use url::Url;

/// Image extension every returned URL carries.
pub const JPEG_SUFFIX: &str = ".jpg";

/// Returns true when `value` ends with `.jpg`, ignoring ASCII case.
#[must_use]
pub fn is_jpeg_url(value: &str) -> bool {
    value.to_ascii_lowercase().ends_with(JPEG_SUFFIX)
}

/// Returns true when `value` ends with exactly `.jpg`.
#[must_use]
pub fn ends_with_jpeg(value: &str) -> bool {
    value.ends_with(JPEG_SUFFIX)
}

/// Returns true when `value` parses as a URL whose path contains `segment`.
#[must_use]
pub fn path_contains(value: &str, segment: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.path().contains(segment))
}
