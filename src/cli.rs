use clap::Parser;

use crate::models::notification::{CustomFields, NotificationInput};

/// Required flags are optional here so that validation can report every
/// missing one in a single message.
#[derive(Parser, Debug)]
#[command(name = "nagios_enqueue")]
#[command(version)]
#[command(about = "Queue a Nagios notification as a PagerDuty event", long_about = None)]
pub struct Cli {
    /// Service integration key
    #[arg(short = 'k', long)]
    pub service_key: Option<String>,

    /// Nagios notification type (PROBLEM, ACKNOWLEDGEMENT, RECOVERY)
    #[arg(short = 't', long)]
    pub notification_type: Option<String>,

    /// Nagios object the notification is about (host, service)
    #[arg(short = 'n', long)]
    pub source_type: Option<String>,

    /// Incident key used for deduplication; derived from the host or service when omitted
    #[arg(short = 'y', long)]
    pub incident_key: Option<String>,

    /// Custom field, may be repeated (e.g. -f HOSTNAME=web01 -f HOSTSTATE=DOWN)
    #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", value_parser = parse_custom_field)]
    pub fields: Vec<(String, String)>,
}

impl Cli {
    pub fn into_input(self) -> NotificationInput {
        NotificationInput {
            service_key: self.service_key.unwrap_or_default(),
            notification_type: self.notification_type.unwrap_or_default(),
            source_type: self.source_type.unwrap_or_default(),
            incident_key: self.incident_key,
            custom_fields: self.fields.into_iter().collect::<CustomFields>(),
        }
    }
}

fn parse_custom_field(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid field \"{}\", expected KEY=VALUE", s))?;

    if key.is_empty() {
        return Err(format!("invalid field \"{}\", key cannot be empty", s));
    }

    Ok((key.to_string(), value.to_string()))
}
