use std::io::Write;

use anyhow::{Error, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    clients::agent::AgentClient,
    config::Config,
    models::{
        notification::NotificationInput, translation::translate, validation::validate,
    },
};

pub async fn enqueue(
    input: NotificationInput,
    agent_client: &AgentClient,
) -> Result<String, Error> {
    let notification = validate(input)?;
    let payload = translate(&notification);

    info!(
        notification_type = %notification.notification_type,
        source_type = %notification.source_type,
        event_type = payload.event_type.as_str(),
        incident_key = %payload.incident_key,
        "Enqueueing nagios notification"
    );

    let body = agent_client.send_event(&payload).await?;

    Ok(body)
}

/// Runs the enqueue and writes the agent's response body to `out`.
pub async fn run<W: Write>(
    input: NotificationInput,
    agent_client: &AgentClient,
    out: &mut W,
) -> Result<(), Error> {
    let body = enqueue(input, agent_client).await?;
    writeln!(out, "{}", body)?;

    Ok(())
}

/// Logs go to stderr; stdout carries only the response body.
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
