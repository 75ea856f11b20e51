//! Mock provider for testing.

use super::{GenerationClient, GenerationRequest, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Returns a canned result and records every request it receives.
pub struct MockGenerationClient {
    result: Result<String, ProviderError>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerationClient {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            result: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, ProviderError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::{ContentPart, GenerationConfig};

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            "gemini-2.0-flash",
            vec![ContentPart::text("hello")],
            GenerationConfig::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn records_requests_and_returns_text() {
        let mock = MockGenerationClient::returning("HELLO");

        let output = mock.generate_content(&request()).await.unwrap();

        assert_eq!(output, "HELLO");
        assert_eq!(mock.requests(), vec![request()]);
    }

    #[tokio::test]
    async fn failing_mock_returns_error() {
        let mock = MockGenerationClient::failing(ProviderError::RateLimited(
            "Gemini API error 429: Resource exhausted".to_string(),
        ));

        let err = mock.generate_content(&request()).await.unwrap_err();

        assert_eq!(
            err,
            ProviderError::RateLimited("Gemini API error 429: Resource exhausted".to_string())
        );
        assert_eq!(mock.requests().len(), 1);
    }
}
