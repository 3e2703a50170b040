//! Google Gemini text generation over the `generateContent` REST endpoint,
//! with optional Google Search grounding.

use super::http_client::build_api_client;
use reqwest::Client;
use url::Url;

mod types;
use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, GeminiTool,
    GoogleSearch, Part,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Outcome of one generation call: the raw model text, plus the first
/// grounding citation when the response carried one.
#[derive(Debug)]
pub struct Generated {
    pub text: String,
    pub source_url: Option<String>,
}

pub struct GeminiClient {
    api_key: String,
    model: String,
    temperature: f64,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, temperature: f64) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            temperature,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: build_api_client(),
        }
    }

    /// Point the client at a different endpoint (tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// One `generateContent` round trip. With `use_search` the Google
    /// Search tool is attached and the first grounding citation surfaces
    /// in the result.
    pub async fn generate(&self, prompt: &str, use_search: bool) -> anyhow::Result<Generated> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            tools: use_search.then(|| {
                vec![GeminiTool {
                    google_search: GoogleSearch {},
                }]
            }),
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self.client.post(url).json(&request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({status}): {error_text}");
        }

        let result: GenerateContentResponse = response.json().await?;
        if let Some(error) = &result.error {
            anyhow::bail!("Gemini API error: {}", error.message);
        }

        let source_url = extract_grounding_source(&result);
        let text = extract_text(&result)?;

        Ok(Generated { text, source_url })
    }
}

fn extract_text(result: &GenerateContentResponse) -> anyhow::Result<String> {
    let text = result
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            let mut out = String::new();
            for part in &content.parts {
                if let Some(t) = &part.text {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(t);
                }
            }
            out
        })
        .unwrap_or_default();

    if text.is_empty() {
        anyhow::bail!("No response from Gemini");
    }

    Ok(text)
}

/// First grounding citation from the response, when present and well
/// formed. The metadata shape is unstable upstream; extraction failures
/// degrade to `None`, never an error.
fn extract_grounding_source(result: &GenerateContentResponse) -> Option<String> {
    let uri = result
        .candidates
        .as_ref()?
        .first()?
        .grounding_metadata
        .as_ref()?
        .grounding_chunks
        .first()?
        .web
        .as_ref()?
        .uri
        .clone()?;

    if Url::parse(&uri).is_err() {
        tracing::warn!(%uri, "discarding malformed grounding citation");
        return None;
    }

    Some(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(raw: &str) -> GenerateContentResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn extracts_first_grounding_uri() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "grounded post"}]},
                    "groundingMetadata": {
                        "groundingChunks": [
                            {"web": {"uri": "https://example.com/a"}},
                            {"web": {"uri": "https://example.com/b"}}
                        ]
                    }
                }]
            }"#,
        );
        assert_eq!(
            extract_grounding_source(&response).as_deref(),
            Some("https://example.com/a")
        );
    }

    #[test]
    fn absent_metadata_yields_no_source() {
        let response = parse(r#"{"candidates": [{"content": {"parts": [{"text": "x"}]}}]}"#);
        assert_eq!(extract_grounding_source(&response), None);
    }

    #[test]
    fn empty_chunks_yield_no_source() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "x"}]},
                    "groundingMetadata": {"groundingChunks": []}
                }]
            }"#,
        );
        assert_eq!(extract_grounding_source(&response), None);
    }

    #[test]
    fn chunk_without_web_source_yields_none() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "x"}]},
                    "groundingMetadata": {"groundingChunks": [{}]}
                }]
            }"#,
        );
        assert_eq!(extract_grounding_source(&response), None);
    }

    #[test]
    fn malformed_uri_is_discarded() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "x"}]},
                    "groundingMetadata": {
                        "groundingChunks": [{"web": {"uri": "not a url"}}]
                    }
                }]
            }"#,
        );
        assert_eq!(extract_grounding_source(&response), None);
    }

    #[test]
    fn text_parts_join_with_newlines() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "one"}, {"text": "two"}]}}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "one\ntwo");
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let response = parse(r"{}");
        assert!(extract_text(&response).is_err());
    }

    #[tokio::test]
    async fn generate_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"candidates": [{"content": {"parts": [{"text": "drafted"}]}}]}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let client = GeminiClient::new("key", "gemini-2.5-flash", 0.7).with_base_url(server.uri());
        let generated = client.generate("prompt", false).await.unwrap();

        assert_eq!(generated.text, "drafted");
        assert_eq!(generated.source_url, None);
    }

    #[tokio::test]
    async fn search_request_carries_tool() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{
                    "candidates": [{
                        "content": {"parts": [{"text": "grounded"}]},
                        "groundingMetadata": {
                            "groundingChunks": [{"web": {"uri": "https://example.com/src"}}]
                        }
                    }]
                }"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new("key", "gemini-2.5-flash", 0.7).with_base_url(server.uri());
        let generated = client.generate("prompt", true).await.unwrap();
        assert_eq!(generated.source_url.as_deref(), Some("https://example.com/src"));

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body["tools"][0]["google_search"].is_object());
    }

    #[tokio::test]
    async fn http_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = GeminiClient::new("key", "gemini-2.5-flash", 0.7).with_base_url(server.uri());
        let err = client.generate("prompt", false).await.unwrap_err();
        assert!(err.to_string().contains("Gemini API error"));
    }

    #[tokio::test]
    async fn api_error_envelope_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"error": {"message": "quota exhausted"}}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let client = GeminiClient::new("key", "gemini-2.5-flash", 0.7).with_base_url(server.uri());
        let err = client.generate("prompt", false).await.unwrap_err();
        assert!(err.to_string().contains("quota exhausted"));
    }
}
