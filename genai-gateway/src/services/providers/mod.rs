//! Generation provider abstraction and implementations.
//!
//! Handlers talk to the upstream model through [`GenerationClient`], so the
//! Gemini backend can be swapped for the recording mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::MockGenerationClient;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    ApiError(String),

    /// Upstream quota or rate limit hit; carries the upstream message.
    #[error("{0}")]
    RateLimited(String),

    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Upstream request timed out after {0}s")]
    Timeout(u64),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// One unit of model input.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text(String),
    /// Raw bytes; providers handle wire encoding.
    InlineData { mime_type: String, data: Vec<u8> },
}

impl ContentPart {
    pub fn text(value: impl Into<String>) -> Self {
        ContentPart::Text(value.into())
    }

    pub fn inline_data(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        ContentPart::InlineData {
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// Per-route generation parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
}

impl GenerationConfig {
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature: Some(temperature),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
    }
}

/// A single generation call: model, ordered parts and config.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    model: String,
    parts: Vec<ContentPart>,
    config: GenerationConfig,
}

impl GenerationRequest {
    /// Fails when `parts` is empty or an inline part carries no bytes.
    pub fn new(
        model: impl Into<String>,
        parts: Vec<ContentPart>,
        config: GenerationConfig,
    ) -> Result<Self, ProviderError> {
        if parts.is_empty() {
            return Err(ProviderError::InvalidRequest(
                "at least one content part is required".to_string(),
            ));
        }

        let has_empty_inline = parts
            .iter()
            .any(|p| matches!(p, ContentPart::InlineData { data, .. } if data.is_empty()));
        if has_empty_inline {
            return Err(ProviderError::InvalidRequest(
                "inline data must not be empty".to_string(),
            ));
        }

        Ok(Self {
            model: model.into(),
            parts,
            config,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn parts(&self) -> &[ContentPart] {
        &self.parts
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

/// Trait for text generation backends (e.g., Gemini).
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Run one generation and return the produced text.
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, ProviderError>;
}
