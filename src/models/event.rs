use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::notification::NotificationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Trigger,
    Acknowledge,
    Resolve,
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Trigger => "trigger",
            EventType::Acknowledge => "acknowledge",
            EventType::Resolve => "resolve",
        }
    }
}

impl From<NotificationType> for EventType {
    fn from(notification_type: NotificationType) -> Self {
        match notification_type {
            NotificationType::Problem => EventType::Trigger,
            NotificationType::Acknowledgement => EventType::Acknowledge,
            NotificationType::Recovery => EventType::Resolve,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    pub service_key: String,
    pub event_type: EventType,
    pub incident_key: String,
    pub description: String,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnqueueResponse {
    pub key: String,
}
