use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Problem,
    Acknowledgement,
    Recovery,
}

impl NotificationType {
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "PROBLEM" => Some(NotificationType::Problem),
            "ACKNOWLEDGEMENT" => Some(NotificationType::Acknowledgement),
            "RECOVERY" => Some(NotificationType::Recovery),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NotificationType::Problem => "PROBLEM",
            NotificationType::Acknowledgement => "ACKNOWLEDGEMENT",
            NotificationType::Recovery => "RECOVERY",
        }
    }

    /// Follow-up notifications must identify the host or service they refer to.
    pub fn requires_source_fields(&self) -> bool {
        !matches!(self, NotificationType::Problem)
    }
}

impl Display for NotificationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Host,
    Service,
}

impl SourceType {
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "host" => Some(SourceType::Host),
            "service" => Some(SourceType::Service),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Host => "host",
            SourceType::Service => "service",
        }
    }

    /// Checked in this order; the first missing one is reported.
    pub fn required_fields(&self) -> &'static [CustomField] {
        match self {
            SourceType::Host => &[CustomField::HostName, CustomField::HostState],
            SourceType::Service => &[
                CustomField::HostName,
                CustomField::ServiceDesc,
                CustomField::ServiceState,
            ],
        }
    }
}

impl Display for SourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

/// Nagios macros the tool knows how to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomField {
    HostName,
    HostState,
    ServiceDesc,
    ServiceState,
}

impl CustomField {
    pub fn as_str(&self) -> &str {
        match self {
            CustomField::HostName => "HOSTNAME",
            CustomField::HostState => "HOSTSTATE",
            CustomField::ServiceDesc => "SERVICEDESC",
            CustomField::ServiceState => "SERVICESTATE",
        }
    }
}

impl Display for CustomField {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-form `KEY=VALUE` pairs passed with `-f`. Known keys are looked up
/// through [`CustomField`]; everything else is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFields(BTreeMap<String, String>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value only when it is set and non-empty.
    pub fn get(&self, field: CustomField) -> Option<&str> {
        self.0
            .get(field.as_str())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn value_or_empty(&self, field: CustomField) -> &str {
        self.get(field).unwrap_or_default()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CustomFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Raw notification as received on the command line.
#[derive(Debug, Clone, Default)]
pub struct NotificationInput {
    pub service_key: String,
    pub notification_type: String,
    pub source_type: String,
    pub incident_key: Option<String>,
    pub custom_fields: CustomFields,
}

/// A notification that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub service_key: String,
    pub notification_type: NotificationType,
    pub source_type: SourceType,
    pub incident_key: Option<String>,
    pub custom_fields: CustomFields,
}
