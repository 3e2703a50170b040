use reqwest::Client;
use std::time::Duration;

/// Shared builder for outbound API clients. No application-level retry or
/// cancellation; these timeouts are all the cancellation there is.
pub fn build_api_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|_| Client::new())
}
