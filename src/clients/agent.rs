use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::{Client, header::AUTHORIZATION};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    errors::SubmitError,
    models::event::{EnqueueResponse, EventPayload},
};

/// Client for the agent's events endpoint.
pub struct AgentClient {
    http_client: Client,
    send_url: String,
    secret: Option<String>,
}

impl AgentClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        let send_url = config.send_url();
        debug!(send_url = %send_url, "Agent client initialized");

        Ok(Self {
            http_client,
            send_url,
            secret: config.secret.clone().filter(|secret| !secret.is_empty()),
        })
    }

    /// Sends a single event and returns the raw response body. No retries.
    pub async fn send_event(&self, payload: &EventPayload) -> Result<String, SubmitError> {
        debug!(
            incident_key = %payload.incident_key,
            event_type = payload.event_type.as_str(),
            "Posting event to agent"
        );

        let mut request = self.http_client.post(&self.send_url).json(payload);
        if let Some(secret) = &self.secret {
            request = request.header(AUTHORIZATION, format!("token {}", secret));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "Agent rejected event");
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<EnqueueResponse>(&body) {
            Ok(response) => info!(key = %response.key, "Event enqueued"),
            Err(e) => debug!(error = %e, "Agent response is not an enqueue acknowledgement"),
        }

        Ok(body)
    }
}
