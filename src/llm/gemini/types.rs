use serde::{Deserialize, Serialize};

// ── Request ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(super) struct GenerateContentRequest {
    pub(super) contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) tools: Option<Vec<GeminiTool>>,
    #[serde(rename = "generationConfig")]
    pub(super) generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(super) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) role: Option<String>,
    pub(super) parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub(super) struct Part {
    pub(super) text: String,
}

/// Tool attachment; only the Google Search grounding tool is used.
#[derive(Debug, Serialize)]
pub(super) struct GeminiTool {
    pub(super) google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
pub(super) struct GoogleSearch {}

#[derive(Debug, Serialize)]
pub(super) struct GenerationConfig {
    pub(super) temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    pub(super) max_output_tokens: u32,
}

// ── Response ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(super) struct GenerateContentResponse {
    pub(super) candidates: Option<Vec<Candidate>>,
    pub(super) error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    pub(super) content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    pub(super) grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub(super) parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponsePart {
    pub(super) text: Option<String>,
}

/// Search attribution attached to a grounded candidate. The upstream shape
/// is loosely structured; every field is optional so a partial envelope
/// still deserializes.
#[derive(Debug, Deserialize)]
pub(super) struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    pub(super) grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GroundingChunk {
    pub(super) web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WebSource {
    pub(super) uri: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiError {
    pub(super) message: String,
}
