use crate::{
    errors::ValidationError,
    models::notification::{Notification, NotificationInput, NotificationType, SourceType},
};

pub const SERVICE_KEY_FLAG: &str = "service-key";
pub const NOTIFICATION_TYPE_FLAG: &str = "notification-type";
pub const SOURCE_TYPE_FLAG: &str = "source-type";

/// Checks run in a fixed order and stop at the first failure: required flags,
/// then the enumerated values, then the per-source custom fields.
pub fn validate(input: NotificationInput) -> Result<Notification, ValidationError> {
    let missing = missing_required_flags(&input);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFlags(missing));
    }

    let notification_type = NotificationType::from_string(&input.notification_type)
        .ok_or(ValidationError::InvalidNotificationType)?;

    let source_type =
        SourceType::from_string(&input.source_type).ok_or(ValidationError::InvalidSourceType)?;

    if notification_type.requires_source_fields() {
        let missing_field = source_type
            .required_fields()
            .iter()
            .find(|field| input.custom_fields.get(**field).is_none());

        if let Some(field) = missing_field {
            return Err(ValidationError::MissingConditionalField {
                field: *field,
                source_type,
            });
        }
    }

    Ok(Notification {
        service_key: input.service_key,
        notification_type,
        source_type,
        incident_key: input.incident_key.filter(|key| !key.is_empty()),
        custom_fields: input.custom_fields,
    })
}

fn missing_required_flags(input: &NotificationInput) -> Vec<String> {
    let mut missing: Vec<String> = [
        (SERVICE_KEY_FLAG, &input.service_key),
        (NOTIFICATION_TYPE_FLAG, &input.notification_type),
        (SOURCE_TYPE_FLAG, &input.source_type),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(flag, _)| flag.to_string())
    .collect();

    missing.sort();
    missing
}
