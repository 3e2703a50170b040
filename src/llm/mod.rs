// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;

// ── Provider implementation ──────────────────────────────────────────────────
pub mod gemini;

pub use gemini::{GeminiClient, Generated};
pub use http_client::build_api_client;
