use nagios_enqueue::{
    errors::ValidationError,
    models::{
        notification::{CustomField, CustomFields, NotificationInput, NotificationType, SourceType},
        validation::validate,
    },
};

fn input(
    service_key: &str,
    notification_type: &str,
    source_type: &str,
    fields: &[(&str, &str)],
) -> NotificationInput {
    NotificationInput {
        service_key: service_key.to_string(),
        notification_type: notification_type.to_string(),
        source_type: source_type.to_string(),
        incident_key: None,
        custom_fields: fields.iter().copied().collect::<CustomFields>(),
    }
}

/// Test: All missing required flags are reported together, sorted
#[test]
fn test_missing_required_flags_reported_together() {
    let err = validate(NotificationInput::default()).unwrap_err();

    assert_eq!(
        err,
        ValidationError::MissingFlags(vec![
            "notification-type".to_string(),
            "service-key".to_string(),
            "source-type".to_string(),
        ])
    );
    assert_eq!(
        err.to_string(),
        "required flag(s) \"notification-type\", \"service-key\", \"source-type\" not set"
    );
}

/// Test: Only the flags that are actually missing are listed
#[test]
fn test_missing_required_flags_subset() {
    let err = validate(input("", "PROBLEM", "", &[])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "required flag(s) \"service-key\", \"source-type\" not set"
    );

    let err = validate(input("abc", "", "host", &[])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingFlags(vec!["notification-type".to_string()])
    );
}

/// Test: Missing flags win over invalid values in other flags
#[test]
fn test_missing_flags_checked_before_enumerations() {
    let err = validate(input("", "trigger", "invalidSourceType", &[])).unwrap_err();

    assert_eq!(
        err,
        ValidationError::MissingFlags(vec!["service-key".to_string()])
    );
}

/// Test: Notification types outside the supported set are rejected
#[test]
fn test_invalid_notification_type() {
    for notification_type in ["trigger", "problem", "DOWNTIMESTART", "FLAPPINGSTART", " PROBLEM"] {
        let err = validate(input("abc", notification_type, "host", &[])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNotificationType,
            "{notification_type} should be rejected"
        );
    }
}

/// Test: An invalid notification type is reported before an invalid source type
#[test]
fn test_invalid_notification_type_checked_before_source_type() {
    let err = validate(input("abc", "trigger", "invalidSourceType", &[])).unwrap_err();

    assert_eq!(err, ValidationError::InvalidNotificationType);
}

/// Test: Source types other than host and service are rejected
#[test]
fn test_invalid_source_type() {
    for source_type in ["invalidSourceType", "HOST", "Service", "hostgroup"] {
        let err = validate(input("abc", "PROBLEM", source_type, &[])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSourceType,
            "{source_type} should be rejected"
        );
    }
}

/// Test: PROBLEM notifications need no custom fields for either source type
#[test]
fn test_problem_requires_no_custom_fields() {
    for source_type in ["host", "service"] {
        let notification = validate(input("abc", "PROBLEM", source_type, &[]))
            .expect("PROBLEM should validate without custom fields");

        assert_eq!(notification.notification_type, NotificationType::Problem);
        assert!(notification.custom_fields.is_empty());
    }
}

/// Test: Service follow-ups require HOSTNAME, SERVICEDESC and SERVICESTATE in that order
#[test]
fn test_service_custom_fields_checked_in_order() {
    let cases: [(&[(&str, &str)], CustomField); 3] = [
        (&[], CustomField::HostName),
        (&[("HOSTNAME", "computer.network")], CustomField::ServiceDesc),
        (
            &[("HOSTNAME", "computer.network"), ("SERVICEDESC", "a service")],
            CustomField::ServiceState,
        ),
    ];

    for (fields, expected_field) in cases {
        let err = validate(input("abc", "RECOVERY", "service", fields)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingConditionalField {
                field: expected_field,
                source_type: SourceType::Service,
            }
        );
    }

    let err = validate(input("abc", "RECOVERY", "service", &[])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the HOSTNAME field must be set for source-type \"service\" using the -f flag"
    );
}

/// Test: Later fields do not mask an earlier missing one
#[test]
fn test_first_missing_service_field_wins() {
    let err = validate(input(
        "abc",
        "ACKNOWLEDGEMENT",
        "service",
        &[("SERVICEDESC", "a service"), ("SERVICESTATE", "CRITICAL")],
    ))
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "the HOSTNAME field must be set for source-type \"service\" using the -f flag"
    );
}

/// Test: Host follow-ups require HOSTNAME then HOSTSTATE
#[test]
fn test_host_custom_fields_checked_in_order() {
    let err = validate(input("abc", "RECOVERY", "host", &[])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the HOSTNAME field must be set for source-type \"host\" using the -f flag"
    );

    let err = validate(input(
        "abc",
        "RECOVERY",
        "host",
        &[("HOSTNAME", "computer.network")],
    ))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "the HOSTSTATE field must be set for source-type \"host\" using the -f flag"
    );
}

/// Test: An empty value counts as missing
#[test]
fn test_empty_custom_field_counts_as_missing() {
    let err = validate(input(
        "abc",
        "ACKNOWLEDGEMENT",
        "host",
        &[("HOSTNAME", "computer.network"), ("HOSTSTATE", "")],
    ))
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::MissingConditionalField {
            field: CustomField::HostState,
            source_type: SourceType::Host,
        }
    );
}

/// Test: Complete follow-up notifications validate and keep extra fields
#[test]
fn test_valid_follow_up_keeps_fields() {
    let notification = validate(input(
        "abc",
        "ACKNOWLEDGEMENT",
        "service",
        &[
            ("HOSTNAME", "computer.network"),
            ("SERVICEDESC", "serviceA"),
            ("SERVICESTATE", "CRITICAL"),
            ("SERVICEOUTPUT", "connection refused"),
        ],
    ))
    .expect("complete service acknowledgement should validate");

    assert_eq!(notification.service_key, "abc");
    assert_eq!(notification.notification_type, NotificationType::Acknowledgement);
    assert_eq!(notification.source_type, SourceType::Service);
    assert_eq!(notification.custom_fields.len(), 4);
}

/// Test: An empty incident key is treated as absent
#[test]
fn test_empty_incident_key_is_dropped() {
    let mut raw = input("abc", "PROBLEM", "host", &[]);
    raw.incident_key = Some(String::new());

    let notification = validate(raw).unwrap();

    assert_eq!(notification.incident_key, None);
}
