//! Error types for the nagios enqueue pipeline.

use thiserror::Error;

use crate::models::notification::{CustomField, SourceType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Names are kept sorted so the message does not depend on flag order.
    #[error("required flag(s) {} not set", quote_all(.0))]
    MissingFlags(Vec<String>),

    #[error("notification-type must be one of PROBLEM, ACKNOWLEDGEMENT or RECOVERY")]
    InvalidNotificationType,

    #[error("source-type must be one of host or service")]
    InvalidSourceType,

    #[error("the {field} field must be set for source-type \"{source_type}\" using the -f flag")]
    MissingConditionalField {
        field: CustomField,
        source_type: SourceType,
    },
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("request to events endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("events endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ")
}
