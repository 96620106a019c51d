// system-tests/tests/helpers/fixtures.rs
// ============================================================================
// Module: Catalog Fixtures
// Description: Memoized catalog views and seeded breed draws.
// Purpose: Fetch the breed catalog once per test binary and share it read-only.
// Dependencies: dog-api-contract, system-tests, tokio
// ============================================================================

//! ## Overview
//! Each fixture issues exactly one `breeds/list/all` request per test binary,
//! no matter how many tests consume it. The first consumer performs the fetch
//! through its own client, so the request shows up in that test's transcript.
//! A failed fetch is not cached; the next consumer retries and fails on its own.

use std::sync::OnceLock;

use dog_api_contract::BreedCatalog;
use dog_api_contract::BreedName;
use dog_api_contract::BreedWithSubbreeds;
use dog_api_contract::Endpoint;
use system_tests::config::SystemTestConfig;
use system_tests::sampling::Sampler;
use tokio::sync::OnceCell;

use super::dog_client::DogApiClient;

static BREEDS_WITH_SUBBREEDS: OnceCell<Vec<BreedWithSubbreeds>> = OnceCell::const_new();
static ALL_BREEDS: OnceCell<Vec<BreedName>> = OnceCell::const_new();
static SESSION_SAMPLER: OnceLock<Sampler> = OnceLock::new();

/// Fetches the full catalog, failing on non-200 or a missing `message` mapping.
async fn fetch_catalog(client: &DogApiClient) -> Result<BreedCatalog, String> {
    let response = client.get(&Endpoint::ListAll).await?;
    response.expect_status(200)?;
    BreedCatalog::from_response(&response.body).map_err(|err| err.to_string())
}

/// Breeds owning at least one subbreed, in catalog order.
pub async fn breeds_with_subbreeds(
    client: &DogApiClient,
) -> Result<&'static [BreedWithSubbreeds], String> {
    BREEDS_WITH_SUBBREEDS
        .get_or_try_init(|| async {
            Ok::<_, String>(fetch_catalog(client).await?.breeds_with_subbreeds())
        })
        .await
        .map(Vec::as_slice)
}

/// Every breed name, in catalog order.
pub async fn all_breeds(client: &DogApiClient) -> Result<&'static [BreedName], String> {
    ALL_BREEDS
        .get_or_try_init(|| async { Ok::<_, String>(fetch_catalog(client).await?.breed_names()) })
        .await
        .map(Vec::as_slice)
}

/// Sampler shared by every draw in this process.
pub fn session_sampler(config: &SystemTestConfig) -> Sampler {
    *SESSION_SAMPLER.get_or_init(|| Sampler::from_optional_seed(config.seed))
}

/// Draws one breed with subbreeds for draw `draw`.
pub async fn random_breed_with_subbreed(
    client: &DogApiClient,
    sampler: Sampler,
    draw: u32,
) -> Result<BreedWithSubbreeds, String> {
    let breeds = breeds_with_subbreeds(client).await?;
    sampler
        .choose(draw, breeds)
        .cloned()
        .ok_or_else(|| "catalog has no breeds with subbreeds".to_string())
}

/// Draws one breed name for draw `draw`.
pub async fn random_breed(
    client: &DogApiClient,
    sampler: Sampler,
    draw: u32,
) -> Result<BreedName, String> {
    let breeds = all_breeds(client).await?;
    sampler.choose(draw, breeds).cloned().ok_or_else(|| "catalog has no breeds".to_string())
}
