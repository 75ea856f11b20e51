#![allow(dead_code)]

use genai_gateway::config::{
    GatewayConfig, GoogleConfig, ModelConfig, UploadConfig, DEFAULT_MODEL,
};
use genai_gateway::services::MockGenerationClient;
use genai_gateway::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

/// Body limit used by test apps (1MB).
pub const TEST_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Smallest valid PNG signature plus a few header bytes.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 5,
        },
        models: ModelConfig {
            model: DEFAULT_MODEL.to_string(),
        },
        upload: UploadConfig {
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub generator: Arc<MockGenerationClient>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(generator: MockGenerationClient) -> Self {
        let generator = Arc::new(generator);

        let app = Application::build_with_client(test_config(), generator.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_with_shutdown(std::future::pending()).await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            generator,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
