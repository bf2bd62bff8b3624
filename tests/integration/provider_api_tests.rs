/*!
 * Provider connection tests against unreachable endpoints
 *
 * These tests use a closed local port, so connection attempts fail
 * immediately without touching the network.
 */

use linguasheet::app_config::{Config, TranslationProvider};
use linguasheet::app_controller::Controller;
use linguasheet::providers::ollama::Ollama;
use linguasheet::translation::TranslationService;

use crate::common::{create_temp_dir, create_test_dataset};

// Port 9 (discard) is reliably closed on test machines
const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9";

fn unreachable_ollama_config() -> Config {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Ollama;
    if let Some(provider) = config
        .translation
        .get_provider_config_mut(&TranslationProvider::Ollama)
    {
        provider.endpoint = UNREACHABLE_ENDPOINT.to_string();
        provider.timeout_secs = 2;
    }
    config
}

#[tokio::test]
async fn test_ollamaTestConnection_withUnreachableEndpoint_shouldFail() {
    let client = Ollama::new(UNREACHABLE_ENDPOINT, 2);
    assert!(client.test_connection().await.is_err());
}

#[tokio::test]
async fn test_serviceTestConnection_withUnreachableEndpoint_shouldFail() {
    let config = unreachable_ollama_config();
    let service = TranslationService::from_config(&config.translation).unwrap();

    assert!(service.test_connection().await.is_err());
}

#[tokio::test]
async fn test_controllerRun_withUnreachableProvider_shouldAbortBeforeWritingOutput() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_dataset(&dir, "input.csv").unwrap();
    let output = dir.join("output.csv");

    let controller = Controller::with_config(unreachable_ollama_config()).unwrap();
    let result = controller.run(&input, &output).await;

    // The run aborts during the connection test; no partial output appears
    assert!(result.is_err());
    assert!(!output.exists());
}
