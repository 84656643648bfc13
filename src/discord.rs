use crate::config::{Config, Embed};
use crate::error::NotifyError;
use crate::http::HttpClient;
use log::debug;
use reqwest::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WebhookRequestBody<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    username: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    avatar_url: &'a str,
    embeds: &'a [Embed],
}

pub fn build_body(config: &Config) -> Result<Vec<u8>, NotifyError> {
    let body = WebhookRequestBody {
        username: &config.username,
        avatar_url: &config.avatar_url,
        embeds: std::slice::from_ref(&config.embed),
    };

    serde_json::to_vec(&body).map_err(NotifyError::RequestBuild)
}

/// Sends the configured embed to the webhook. A single attempt is made and
/// only `204 No Content` counts as delivered.
pub fn post_webhook(config: &Config, client: &impl HttpClient) -> Result<(), NotifyError> {
    let timeout = config.timeout();
    let body = build_body(config)?;

    debug!(
        "Posting {} byte payload (timeout {}s)",
        body.len(),
        timeout.as_secs()
    );

    let response = client.post_json(&config.webhook_url, body, timeout)?;

    debug!("Webhook responded with {}", response.status);

    if response.status != StatusCode::NO_CONTENT {
        return Err(NotifyError::UnexpectedStatus {
            status: response.status.as_u16(),
            body: response.body,
        });
    }

    Ok(())
}
