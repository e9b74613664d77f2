// src/fetch.rs

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::Config;
use crate::error::FetchError;

/// Build the one client used for the run: custom agent, total timeout,
/// reqwest's default redirect policy.
pub fn build_client(cfg: &Config) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(cfg.user_agent.as_str())
        .timeout(cfg.timeout)
        .build()
        .map_err(|source| FetchError::Transport {
            url: cfg.url.clone(),
            source,
        })
}

/// GET `url` once and return the body. Any non-2xx status is an error;
/// nothing is retried.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    info!("Downloading data from {}...", parsed);

    let resp = client
        .get(parsed.clone())
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: resp.url().to_string(),
            status,
        });
    }
    if resp.url() != &parsed {
        debug!(final_url = %resp.url(), "followed redirect");
    }

    let body = resp.text().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;
    debug!(bytes = body.len(), "body received");
    Ok(body)
}
