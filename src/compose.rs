//! Prompt assembly for post drafting.
//!
//! Style and topic are drawn from fixed pools through an injected RNG so
//! tests can pin the selection with a seed.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Engagement style directives; one is drawn per post for variety.
const STYLES: [&str; 10] = [
    "Share a mind-blowing recent breakthrough or development",
    "Post a controversial but thought-provoking take or prediction",
    "Highlight a fascinating real-world application or use case",
    "Share a surprising statistic or research finding",
    "Explain a complex concept in simple, relatable terms",
    "Point out an unexpected connection or implication",
    "Share a counterintuitive insight or common misconception debunked",
    "Highlight what's happening right NOW in the field",
    "Compare where we are vs where we're heading (past vs future)",
    "Share an exciting emerging trend or capability",
];

/// How many prior posts the prompt lists for anti-repetition.
const RECENT_WINDOW: usize = 5;

/// Builds drafting prompts. Owns the RNG used for style and topic picks.
pub struct PromptBuilder {
    rng: StdRng,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed seed: same seed, same style and topic sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a topic uniformly from the pool.
    pub fn pick_topic<'a>(&mut self, topics: &'a [String]) -> &'a str {
        topics
            .choose(&mut self.rng)
            .map_or("Artificial Intelligence", String::as_str)
    }

    /// Compose the drafting prompt: one post about `topic`, in a randomly
    /// drawn style, under `budget` characters, avoiding the most recent
    /// prior posts. The model is told to return the bare post text.
    pub fn build(&mut self, topic: &str, recent_texts: &[String], budget: usize) -> String {
        let style = STYLES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(STYLES[0]);

        let mut prompt = format!(
            "You are a tech influencer creating viral content about AI. \
             Generate ONE post about {topic}.\n\
             \n\
             STYLE FOR THIS POST: {style}\n\
             \n\
             GUIDELINES:\n\
             - Under {budget} characters\n\
             - Hook readers in the first line\n\
             - Use a conversational, authentic voice (not corporate)\n\
             - Include specific details, numbers, or examples when relevant\n\
             - Make it shareable: give people something interesting to discuss\n\
             - Add 1-2 relevant hashtags naturally\n\
             - Vary your approach: questions, statements, hot takes, insights\n\
             - NO cliches like \"asking for a friend\" or \"let that sink in\"\n\
             - NO generic platitudes, be specific and interesting\n\
             - Focus on LATEST developments and current trends"
        );

        if !recent_texts.is_empty() {
            let window_start = recent_texts.len().saturating_sub(RECENT_WINDOW);
            prompt.push_str("\n\nPREVIOUS POSTS TO AVOID REPEATING:");
            for text in &recent_texts[window_start..] {
                prompt.push_str("\n- ");
                prompt.push_str(text);
            }
        }

        prompt.push_str("\n\nReturn ONLY the post text. No quotes, no labels, no explanations.");
        prompt
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
