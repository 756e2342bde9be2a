//! Hero image generation capability.
//!
//! The visual stage only sees the [`ImageGenerator`] trait. The default
//! implementation, [`OpenAiImageClient`], talks to an OpenAI-compatible
//! `/v1/images/generations` endpoint. Every failure is reported as an error
//! and it is up to the caller to decide how to degrade.

use async_trait::async_trait;
use brandforge_shared::{BrandForgeError, ImageConfig, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use url::Url;

/// User-Agent string for image requests.
const USER_AGENT: &str = concat!("BrandForge/", env!("CARGO_PKG_VERSION"));

/// Endpoint path relative to the configured base URL.
const GENERATIONS_PATH: &str = "v1/images/generations";

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Something that can turn a text prompt into an image reference.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate a single image and return its URL (or data URL).
    async fn generate(&self, prompt: &str, size: &str) -> Result<String>;

    /// Human-readable backend name for tracing.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    n: u8,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    b64_json: Option<String>,
}

impl GeneratedImage {
    fn into_reference(self) -> Option<String> {
        match (self.url, self.b64_json) {
            (Some(url), _) if !url.is_empty() => Some(url),
            (_, Some(b64)) if !b64.is_empty() => Some(format!("data:image/png;base64,{b64}")),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// OpenAI-compatible client
// ---------------------------------------------------------------------------

/// HTTP client for an OpenAI-compatible image generation API.
#[derive(Debug, Clone)]
pub struct OpenAiImageClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl OpenAiImageClient {
    /// Build a client from the `[image]` config section and a resolved API key.
    pub fn new(config: &ImageConfig, api_key: impl Into<String>) -> Result<Self> {
        let endpoint = generations_url(&config.base_url)?;
        let client = build_client(config)?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            model: config.model.clone(),
        })
    }

    /// The fully resolved generations endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    #[instrument(skip_all, fields(model = %self.model, size = %size))]
    async fn generate(&self, prompt: &str, size: &str) -> Result<String> {
        let body = GenerationRequest {
            model: &self.model,
            prompt,
            size,
            n: 1,
        };

        debug!(endpoint = %self.endpoint, "requesting hero image");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BrandForgeError::Network(format!("{}: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrandForgeError::ImageGeneration(format!(
                "{}: HTTP {status}",
                self.endpoint
            )));
        }

        let parsed: GenerationResponse = response.json().await.map_err(|e| {
            BrandForgeError::ImageGeneration(format!("malformed response body: {e}"))
        })?;

        let reference = parsed
            .data
            .into_iter()
            .next()
            .and_then(GeneratedImage::into_reference)
            .ok_or_else(|| {
                BrandForgeError::ImageGeneration("response contained no image".into())
            })?;

        info!("hero image generated");
        Ok(reference)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve `<base>/v1/images/generations`, keeping any path prefix on the base.
fn generations_url(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url).map_err(|e| {
        BrandForgeError::config(format!("invalid image base_url '{base_url}': {e}"))
    })?;

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(GENERATIONS_PATH)
        .map_err(|e| BrandForgeError::config(format!("invalid image endpoint: {e}")))
}

/// Build a reqwest client with appropriate settings.
fn build_client(config: &ImageConfig) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| BrandForgeError::Network(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(base_url: &str) -> ImageConfig {
        ImageConfig {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..ImageConfig::default()
        }
    }

    #[test]
    fn test_generations_url_plain_host() {
        let url = generations_url("https://api.openai.com").unwrap();
        assert_eq!(url.as_str(), "https://api.openai.com/v1/images/generations");
    }

    #[test]
    fn test_generations_url_keeps_prefix() {
        let url = generations_url("https://proxy.example.com/openai").unwrap();
        assert_eq!(
            url.as_str(),
            "https://proxy.example.com/openai/v1/images/generations"
        );
    }

    #[test]
    fn test_generations_url_rejects_garbage() {
        let err = generations_url("not a url").unwrap_err();
        assert!(err.to_string().contains("invalid image base_url"));
    }

    #[tokio::test]
    async fn test_generate_returns_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-image-1",
                "size": "1024x1024",
                "n": 1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "url": "https://cdn.example.com/hero.png" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiImageClient::new(&config_for(&server.uri()), "test-key").unwrap();
        let url = client.generate("A hero", "1024x1024").await.unwrap();
        assert_eq!(url, "https://cdn.example.com/hero.png");
    }

    #[tokio::test]
    async fn test_generate_accepts_base64_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "b64_json": "aGVsbG8=" }]
            })))
            .mount(&server)
            .await;

        let client = OpenAiImageClient::new(&config_for(&server.uri()), "k").unwrap();
        let url = client.generate("A hero", "1024x1024").await.unwrap();
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn test_generate_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = OpenAiImageClient::new(&config_for(&server.uri()), "k").unwrap();
        let err = client.generate("A hero", "1024x1024").await.unwrap_err();
        assert!(matches!(err, BrandForgeError::ImageGeneration(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_generate_empty_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let client = OpenAiImageClient::new(&config_for(&server.uri()), "k").unwrap();
        let err = client.generate("A hero", "1024x1024").await.unwrap_err();
        assert!(err.to_string().contains("no image"));
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OpenAiImageClient::new(&config_for(&server.uri()), "k").unwrap();
        let err = client.generate("A hero", "1024x1024").await.unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[tokio::test]
    async fn test_generate_unreachable_host() {
        // Port 9 (discard) on localhost is almost never listening.
        let client = OpenAiImageClient::new(&config_for("http://127.0.0.1:9"), "k").unwrap();
        let err = client.generate("A hero", "1024x1024").await.unwrap_err();
        assert!(matches!(err, BrandForgeError::Network(_)));
    }
}
