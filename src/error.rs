use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Herald.
///
/// Each run stage defines its own error variant; `main` reports whichever
/// surfaces and exits non-zero. Leaf call paths (HTTP round trips) use
/// `anyhow::Result` for ad-hoc context chains and are wrapped at the stage
/// boundary.
#[derive(Debug, Error)]
pub enum HeraldError {
    // ── Config / credentials ─────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Draft generation ─────────────────────────────────────────────────
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),

    // ── Publishing ───────────────────────────────────────────────────────
    #[error("publish: {0}")]
    Publish(#[from] PublishError),

    // ── Post history ─────────────────────────────────────────────────────
    #[error("history: {0}")]
    History(#[from] HistoryError),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {0}")]
    MissingCredentials(String),

    #[error("failed to load config: {0}")]
    Load(String),
}

// ─── Generation errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("gemini request failed: {0}")]
    Request(String),

    #[error("model returned no usable post text")]
    Empty,
}

// ─── Publish errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PublishError {
    /// The create-post call failed; the cause was already logged at the
    /// call site. History must not be updated after this.
    #[error("post was not accepted by X")]
    Rejected,
}

// ─── History errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}
