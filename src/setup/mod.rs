//! Turns a [Config] into ready to use components.

mod config;

use crate::YoutubeClient;

pub use config::{Config, LoggingConfig, YoutubeConfig, API_KEY_VAR, CONFIG_PATH};

/// Constructs a [YoutubeClient] backed by a fresh [reqwest::Client].
///
/// A missing or placeholder api key is not an error here, the client
/// reports it on first use instead.
pub fn client(config: &Config) -> YoutubeClient {
    let api_key = config.youtube.api_key().ok();

    if api_key.is_none() {
        tracing::warn!("No YouTube api key configured, requests will fail.");
    }

    YoutubeClient::builder().maybe_api_key(api_key).build()
}
