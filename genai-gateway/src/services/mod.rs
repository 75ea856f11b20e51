pub mod providers;

pub use providers::{
    ContentPart, GeminiConfig, GeminiProvider, GenerationClient, GenerationConfig,
    GenerationRequest, MockGenerationClient, ProviderError,
};
