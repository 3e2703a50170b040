#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default
)]

//! Herald — a single-shot content bot. Drafts one AI/tech post with
//! Gemini (optionally grounded in live search results), checks it against
//! posting history, publishes to X, and records the confirmed post.

pub mod compose;
pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod history;
pub mod llm;
pub mod publish;
pub mod run;

pub use config::{Config, Credentials};
pub use error::HeraldError;
pub use run::{Bot, RunOutcome};
