//! Draft generation: topic and style selection, prompt assembly, the
//! Gemini round trip, and formatting down to the posting budget.

use crate::compose::PromptBuilder;
use crate::config::Config;
use crate::error::GenerationError;
use crate::format::format_post;
use crate::llm::GeminiClient;

/// A post ready for duplicate checking and publishing.
#[derive(Debug)]
pub struct Draft {
    pub topic: String,
    pub text: String,
    pub source_url: Option<String>,
}

pub struct ContentGenerator {
    client: GeminiClient,
    builder: PromptBuilder,
    topics: Vec<String>,
    post_budget: usize,
    url_reserve: usize,
}

impl ContentGenerator {
    pub fn new(client: GeminiClient, builder: PromptBuilder, config: &Config) -> Self {
        Self {
            client,
            builder,
            topics: config.topics.clone(),
            post_budget: config.post_budget,
            url_reserve: config.url_reserve,
        }
    }

    /// Draft one post. A forced `topic` skips random selection; otherwise
    /// one is drawn from the configured pool. With `use_search` the call is
    /// grounded in live search results, and with `include_source` the first
    /// citation is appended to the text. Transport and API failures
    /// propagate; there is no retry and no fallback content.
    pub async fn generate(
        &mut self,
        topic: Option<&str>,
        recent_texts: &[String],
        use_search: bool,
        include_source: bool,
    ) -> Result<Draft, GenerationError> {
        let topic = match topic {
            Some(forced) => forced.to_string(),
            None => self.builder.pick_topic(&self.topics).to_string(),
        };

        let mut prompt = self.builder.build(&topic, recent_texts, self.post_budget);
        if use_search {
            prompt = format!(
                "Search for the latest information and trending topics about {topic}.\n\n{prompt}"
            );
        }

        let generated = self
            .client
            .generate(&prompt, use_search)
            .await
            .map_err(|e| GenerationError::Request(format!("{e:#}")))?;

        // A source only exists on grounded calls, and only when wanted.
        let source_url = if use_search && include_source {
            generated.source_url
        } else {
            None
        };

        let text = format_post(
            &generated.text,
            source_url.as_deref(),
            self.post_budget,
            self.url_reserve,
        );
        if text.is_empty() {
            return Err(GenerationError::Empty);
        }

        Ok(Draft {
            topic,
            text,
            source_url,
        })
    }
}
