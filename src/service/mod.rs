/// Generation service module
///
/// The bridge to the external image-generation capability. Everything
/// network-facing lives here: the environment-sourced configuration, the
/// error type, and the Gemini REST call itself (gemini.rs).

pub mod gemini;

pub use gemini::generate;

use std::env;

use thiserror::Error;

/// Default image model; override with GEMINI_MODEL
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Default API endpoint base; override with GEMINI_API_ENDPOINT
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Everything that can go wrong during one generation attempt.
///
/// The UI does not distinguish these: they all collapse into one message
/// string shown in the error banner.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("No API key configured. Set GEMINI_API_KEY in the environment.")]
    MissingApiKey,
    #[error("Could not reach the generation service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Generation service error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("The model returned no image: {0}")]
    NoImage(String),
    #[error("Failed to parse the service response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Failed to decode the generated image: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Connection settings for the generation service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl ServiceConfig {
    /// Read the service configuration from the environment.
    ///
    /// The credential comes from GEMINI_API_KEY (or API_KEY); the model id
    /// and endpoint base have defaults. Called at generate time, so a
    /// missing key surfaces as a generation error on the attempt rather
    /// than at startup.
    pub fn from_env() -> Result<Self, GenerateError> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .unwrap_or_default();
        if api_key.is_empty() {
            return Err(GenerateError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            endpoint: env::var("GEMINI_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        })
    }

    /// Full URL of the generateContent method for the configured model
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let config = ServiceConfig {
            api_key: "k".to_string(),
            model: "test-model".to_string(),
            endpoint: "https://example.com/".to_string(),
        };
        assert_eq!(
            config.generate_url(),
            "https://example.com/v1beta/models/test-model:generateContent"
        );
    }
}
