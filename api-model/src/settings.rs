use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Instance-wide settings: where results are stored and where events go.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub event_notifications: Option<EventNotifications>,
    pub object_storage: Option<ObjectStorage>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventNotifications {
    pub instance_crn: Option<String>,
    pub updated_on: Option<DateTime<Utc>>,
    pub source_id: Option<String>,
    pub source_description: Option<String>,
    pub source_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectStorage {
    pub instance_crn: Option<String>,
    pub bucket: Option<String>,
    pub bucket_location: Option<String>,
    pub bucket_endpoint: Option<String>,
    pub updated_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestEvent {
    pub success: bool,
}
