use crate::models::{
    event::{EventPayload, EventType},
    notification::{CustomField, CustomFields, Notification, SourceType},
};

pub const NAGIOS_OBJECT_DETAIL: &str = "pd_nagios_object";

pub fn translate(notification: &Notification) -> EventPayload {
    let fields = &notification.custom_fields;

    let incident_key = match &notification.incident_key {
        Some(key) => key.clone(),
        None => build_incident_key(notification.source_type, fields),
    };

    let mut details = fields.as_map().clone();
    details.insert(
        NAGIOS_OBJECT_DETAIL.to_string(),
        notification.source_type.as_str().to_string(),
    );

    EventPayload {
        service_key: notification.service_key.clone(),
        event_type: EventType::from(notification.notification_type),
        incident_key,
        description: build_description(notification.source_type, fields),
        details,
    }
}

/// A trigger and its later acknowledge/resolve must land on the same key, so
/// only the identity of the host or service goes into it, never its state.
pub fn build_incident_key(source_type: SourceType, fields: &CustomFields) -> String {
    let host_name = fields.value_or_empty(CustomField::HostName);

    match source_type {
        SourceType::Host => format!("event_source=host;host_name={}", host_name),
        SourceType::Service => format!(
            "event_source=service;host_name={};service_desc={}",
            host_name,
            fields.value_or_empty(CustomField::ServiceDesc)
        ),
    }
}

pub fn build_description(source_type: SourceType, fields: &CustomFields) -> String {
    let host_name = fields.value_or_empty(CustomField::HostName);

    match source_type {
        SourceType::Host => format!(
            "{} is {}",
            host_name,
            fields.value_or_empty(CustomField::HostState)
        ),
        SourceType::Service => format!(
            "{} on {} is {}",
            fields.value_or_empty(CustomField::ServiceDesc),
            host_name,
            fields.value_or_empty(CustomField::ServiceState)
        ),
    }
}
