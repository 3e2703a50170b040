//! Posting to X over the v2 create-post endpoint.
//!
//! Authenticated with an OAuth 2.0 user-context access token. Rate limits
//! are not handled here; a limited run fails and the next scheduled run
//! tries again with fresh content.

use crate::llm::build_api_client;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.x.com";

#[derive(Debug, Serialize)]
struct CreatePostRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatePostResponse {
    data: Option<CreatedPost>,
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    id: String,
}

pub struct XClient {
    access_token: String,
    base_url: String,
    client: Client,
}

impl XClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
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

    /// Publish one post, returning its id. Any failure is logged here and
    /// collapses to `None` so the caller can short-circuit without
    /// unwinding.
    pub async fn publish(&self, text: &str) -> Option<String> {
        match self.create_post(text).await {
            Ok(id) => {
                tracing::info!(post_id = %id, "posted to X");
                Some(id)
            }
            Err(e) => {
                tracing::error!("X create-post failed: {e:#}");
                None
            }
        }
    }

    async fn create_post(&self, text: &str) -> anyhow::Result<String> {
        let resp = self
            .client
            .post(format!("{}/2/tweets", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&CreatePostRequest { text })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            anyhow::bail!("X create-post failed ({status}): {err}");
        }

        let body: CreatePostResponse = resp.json().await?;
        body.data
            .map(|post| post.id)
            .ok_or_else(|| anyhow::anyhow!("X response carried no post id"))
    }
}
