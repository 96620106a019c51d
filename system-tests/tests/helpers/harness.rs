// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Case Harness
// Description: Per-test setup bundling config, client, schemas, and reporter.
// Purpose: Keep each test case down to its requests and assertions.
// Dependencies: dog-api-contract, system-tests
// ============================================================================

use std::error::Error;

use dog_api_contract::SchemaRegistry;
use system_tests::cases::CaseLabel;
use system_tests::config::SystemTestConfig;

use super::artifacts::TestReporter;
use super::dog_client::DogApiClient;

const TRANSCRIPT_ARTIFACT: &str = "http_transcript.json";

/// Everything one test case needs. Dropping an unfinished harness records the
/// case as failed together with its transcript.
pub struct CaseHarness {
    config: SystemTestConfig,
    client: DogApiClient,
    schemas: SchemaRegistry,
    reporter: TestReporter,
}

impl CaseHarness {
    /// Loads configuration and prepares the client, schemas, and reporter.
    pub fn start(test_name: &str, label: CaseLabel) -> Result<Self, Box<dyn Error>> {
        let config = SystemTestConfig::load()?;
        let reporter = TestReporter::new(test_name, label, &config)?;
        let client = DogApiClient::new(&config)?;
        let schemas = SchemaRegistry::new()?;
        Ok(Self {
            config,
            client,
            schemas,
            reporter,
        })
    }

    pub fn config(&self) -> &SystemTestConfig {
        &self.config
    }

    pub fn client(&self) -> &DogApiClient {
        &self.client
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Writes the transcript and a passing summary.
    pub fn pass(mut self, notes: Vec<String>) -> Result<(), Box<dyn Error>> {
        self.write_summary("pass", notes)?;
        Ok(())
    }

    fn write_summary(&mut self, status: &str, notes: Vec<String>) -> std::io::Result<()> {
        self.reporter.artifacts().write_json(TRANSCRIPT_ARTIFACT, &self.client.transcript())?;
        self.reporter.finish(
            status,
            notes,
            vec![
                "summary.json".to_string(),
                "summary.md".to_string(),
                TRANSCRIPT_ARTIFACT.to_string(),
            ],
        )
    }
}

impl Drop for CaseHarness {
    fn drop(&mut self) {
        if self.reporter.is_finalized() {
            return;
        }
        let status = if std::thread::panicking() { "panic" } else { "fail" };
        let _ = self.write_summary(
            status,
            vec!["test returned before recording a passing summary".to_string()],
        );
    }
}
