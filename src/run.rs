//! One bot run: load history, draft, duplicate-check, publish, persist.
//!
//! No retries at any stage; every failure is terminal for the run and the
//! scheduler simply tries again next time. History is only written after a
//! confirmed publish, so the log never claims a post that didn't happen.

use crate::compose::PromptBuilder;
use crate::config::{Config, Credentials, SearchConfig};
use crate::error::{HeraldError, PublishError};
use crate::generate::{ContentGenerator, Draft};
use crate::history::HistoryStore;
use crate::llm::GeminiClient;
use crate::publish::XClient;

/// How a run ended. Duplicate suppression is a clean outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Posted { post_id: String },
    Duplicate,
}

pub struct Bot {
    search: SearchConfig,
    history: HistoryStore,
    generator: ContentGenerator,
    publisher: XClient,
}

impl Bot {
    /// Wire up the production clients from config and credentials.
    pub fn new(config: &Config, credentials: &Credentials) -> Self {
        let gemini = GeminiClient::new(
            &credentials.gemini_api_key,
            &config.model,
            config.temperature,
        );
        let publisher = XClient::new(&credentials.x_access_token);
        Self::with_clients(config, gemini, publisher)
    }

    /// Inject prebuilt clients. Tests point these at local mock servers.
    pub fn with_clients(config: &Config, gemini: GeminiClient, publisher: XClient) -> Self {
        Self {
            search: config.search.clone(),
            history: HistoryStore::new(&config.history_path),
            generator: ContentGenerator::new(gemini, PromptBuilder::new(), config),
            publisher,
        }
    }

    /// Execute one run end to end.
    pub async fn run(&mut self) -> Result<RunOutcome, HeraldError> {
        let previous = self.history.load()?;
        tracing::info!(count = previous.len(), "loaded post history");

        let Draft {
            topic,
            text,
            source_url,
        } = self
            .generator
            .generate(None, &previous, self.search.enabled, self.search.include_source)
            .await?;
        tracing::info!(
            %topic,
            chars = text.chars().count(),
            source = source_url.as_deref().unwrap_or("none"),
            "drafted post"
        );

        if previous.iter().any(|prior| *prior == text) {
            tracing::warn!("draft matches an already-posted text, skipping publish");
            return Ok(RunOutcome::Duplicate);
        }

        let Some(post_id) = self.publisher.publish(&text).await else {
            return Err(PublishError::Rejected.into());
        };

        self.history.append(&topic, &text)?;
        Ok(RunOutcome::Posted { post_id })
    }
}
