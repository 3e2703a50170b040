use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Top-level config ──────────────────────────────────────────────

/// Process-wide configuration, loaded once at startup and passed to
/// constructors. Everything has a default; a `herald.toml` next to the
/// binary overrides selectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini model used for drafting posts.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for content generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Hard character budget for a published post.
    #[serde(default = "default_post_budget")]
    pub post_budget: usize,

    /// Characters reserved for an appended source URL. X shortens links to
    /// roughly 23 characters; 25 covers the link plus separating whitespace.
    /// An approximation of the platform's shortener, not an exact contract.
    #[serde(default = "default_url_reserve")]
    pub url_reserve: usize,

    /// Append-only CSV log of published posts.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,

    /// Topic pool; one entry is drawn per run when no topic is forced.
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,

    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            post_budget: default_post_budget(),
            url_reserve: default_url_reserve(),
            history_path: default_history_path(),
            topics: default_topics(),
            search: SearchConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// With an explicit path the file must exist and parse. With `None`,
    /// `herald.toml` in the working directory is honored when present and
    /// the built-in defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => {
                let implicit = PathBuf::from("herald.toml");
                if !implicit.exists() {
                    return Ok(Self::default());
                }
                implicit
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))
    }
}

// ── Search grounding ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Ground generation in live web search results.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Append the first grounding citation to the post.
    #[serde(default = "default_true")]
    pub include_source: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            include_source: true,
        }
    }
}

// ── Credentials ───────────────────────────────────────────────────

/// Name of the env var holding the Gemini API key.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Name of the env var holding the X OAuth 2.0 user-context access token.
pub const X_ACCESS_TOKEN: &str = "X_ACCESS_TOKEN";

/// Environment-sourced secrets, validated before any network call.
///
/// No `Debug` derive: token values must never reach logs. The manual impl
/// redacts both fields so `Credentials` can still be formatted (e.g. through
/// `Result::unwrap_err`) without leaking secrets.
#[derive(Clone)]
pub struct Credentials {
    pub gemini_api_key: String,
    pub x_access_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &"<redacted>")
            .field("x_access_token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment, reporting every
    /// missing variable in one message.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var(GEMINI_API_KEY).ok(),
            std::env::var(X_ACCESS_TOKEN).ok(),
        )
    }

    fn resolve(
        gemini_api_key: Option<String>,
        x_access_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let gemini_api_key = normalize(gemini_api_key).unwrap_or_else(|| {
            missing.push(GEMINI_API_KEY);
            String::new()
        });
        let x_access_token = normalize(x_access_token).unwrap_or_else(|| {
            missing.push(X_ACCESS_TOKEN);
            String::new()
        });

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing.join(", ")));
        }

        Ok(Self {
            gemini_api_key,
            x_access_token,
        })
    }
}

/// Empty or whitespace-only values count as unset.
fn normalize(raw: Option<String>) -> Option<String> {
    match raw {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

// ── Defaults ──────────────────────────────────────────────────────

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_post_budget() -> usize {
    280
}

fn default_url_reserve() -> usize {
    25
}

fn default_history_path() -> PathBuf {
    PathBuf::from("data/post_history.csv")
}

fn default_topics() -> Vec<String> {
    [
        "Artificial Intelligence",
        "Generative AI",
        "Machine Learning",
        "Rust Programming",
        "Data Science",
        "Deep Learning",
        "Natural Language Processing",
        "Computer Vision",
        "Neural Networks",
        "Large Language Models",
        "Data Analytics",
        "Big Data",
        "AI Ethics",
        "MLOps",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.post_budget, 280);
        assert_eq!(config.url_reserve, 25);
        assert_eq!(config.topics.len(), 14);
        assert!(config.search.enabled);
        assert!(config.search.include_source);
    }

    #[test]
    fn partial_toml_overrides_selectively() {
        let config: Config = toml::from_str(
            r#"
            model = "gemini-2.0-flash"
            post_budget = 240

            [search]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.post_budget, 240);
        assert!(!config.search.enabled);
        // Untouched fields keep their defaults.
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert!(config.search.include_source);
        assert_eq!(config.topics.len(), 14);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herald.toml");
        std::fs::write(&path, "temperature = 0.2\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!((config.temperature - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/herald.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herald.toml");
        std::fs::write(&path, "model = [not toml").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn credentials_require_both_vars() {
        let err = Credentials::resolve(None, None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(GEMINI_API_KEY));
        assert!(msg.contains(X_ACCESS_TOKEN));
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let err = Credentials::resolve(Some("  ".into()), Some("token".into())).unwrap_err();
        assert!(err.to_string().contains(GEMINI_API_KEY));
        assert!(!err.to_string().contains(X_ACCESS_TOKEN));
    }

    #[test]
    fn credentials_resolve_when_present() {
        let creds = Credentials::resolve(Some("gm-key".into()), Some("x-token".into())).unwrap();
        assert_eq!(creds.gemini_api_key, "gm-key");
        assert_eq!(creds.x_access_token, "x-token");
    }
}
