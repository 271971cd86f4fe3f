use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::pagination::impl_page;
use crate::{display_as_wire_name, PageMeta, Parameter, ScopeProperty};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentStatus {
    Enabled,
    Disabled,
    #[serde(other)]
    Unknown,
}

/// How often an attachment is scanned.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Schedule {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "every_7_days")]
    Every7Days,
    #[serde(rename = "every_30_days")]
    Every30Days,
    #[serde(rename = "unknown", other)]
    Unknown,
}

display_as_wire_name!(AttachmentStatus, Schedule);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileAttachment {
    pub id: Option<String>,
    pub profile_id: Option<String>,
    pub account_id: Option<String>,
    pub instance_id: Option<String>,
    pub scope: Option<Vec<MultiCloudScope>>,
    pub created_on: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_on: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub status: Option<AttachmentStatus>,
    pub schedule: Option<Schedule>,
    pub notifications: Option<AttachmentNotifications>,
    pub attachment_parameters: Option<Vec<Parameter>>,
    pub last_scan: Option<LastScan>,
    pub next_scan_time: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A scope an attachment targets. Either a reference to an existing scope
/// by `id`, or an inline definition through `environment` and `properties`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MultiCloudScope {
    pub id: Option<String>,
    pub environment: Option<String>,
    pub properties: Option<Vec<ScopeProperty>>,
}

impl MultiCloudScope {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AttachmentNotifications {
    pub enabled: bool,
    pub controls: FailedControls,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FailedControls {
    pub threshold_limit: Option<i64>,
    pub failed_control_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LastScan {
    pub id: Option<String>,
    pub status: Option<String>,
    pub time: Option<DateTime<Utc>>,
}

/// One attachment to create under a profile.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileAttachmentBase {
    pub name: String,
    pub description: Option<String>,
    pub scope: Vec<MultiCloudScope>,
    pub status: AttachmentStatus,
    pub schedule: Schedule,
    pub notifications: Option<AttachmentNotifications>,
    pub attachment_parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttachmentPrototype {
    pub attachments: Vec<ProfileAttachmentBase>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileAttachmentResponse {
    pub profile_id: Option<String>,
    #[serde(default)]
    pub attachments: Vec<ProfileAttachment>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AttachmentCollection {
    #[serde(flatten)]
    pub meta: PageMeta,
    #[serde(default)]
    pub attachments: Vec<ProfileAttachment>,
}

impl_page!(AttachmentCollection, attachments, ProfileAttachment);

/// Lists the attachments of one profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAttachmentsOptions {
    pub profile_id: String,
    pub start: Option<String>,
    pub limit: Option<i64>,
}

/// Lists attachments across every profile of the instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAllAttachmentsOptions {
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub attachment_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use super::*;

    #[test]
    fn schedule_wire_names() -> Result<()> {
        assert_eq!(serde_json::to_value(Schedule::Every7Days)?, "every_7_days");
        assert_eq!(
            serde_json::from_value::<Schedule>(json!("every_30_days"))?,
            Schedule::Every30Days
        );
        assert_eq!(Schedule::Daily.to_string(), "daily");
        assert_eq!(
            serde_json::from_value::<Schedule>(json!("every_90_days"))?,
            Schedule::Unknown
        );
        assert_eq!(
            serde_json::from_value::<AttachmentStatus>(json!("paused"))?,
            AttachmentStatus::Unknown
        );
        Ok(())
    }

    #[test]
    fn prototype_body() -> Result<()> {
        let body = AttachmentPrototype {
            attachments: vec![ProfileAttachmentBase {
                name: "account-attachment".to_owned(),
                description: None,
                scope: vec![MultiCloudScope::by_id("ca0941aa-b7e2-43a3")],
                status: AttachmentStatus::Enabled,
                schedule: Schedule::Every30Days,
                notifications: Some(AttachmentNotifications {
                    enabled: false,
                    controls: FailedControls {
                        threshold_limit: Some(15),
                        failed_control_ids: Some(vec![]),
                    },
                }),
                attachment_parameters: vec![],
            }],
        };

        assert_eq!(
            serde_json::to_value(&body)?,
            json!({
                "attachments": [{
                    "name": "account-attachment",
                    "scope": [{ "id": "ca0941aa-b7e2-43a3" }],
                    "status": "enabled",
                    "schedule": "every_30_days",
                    "notifications": {
                        "enabled": false,
                        "controls": {
                            "threshold_limit": 15,
                            "failed_control_ids": []
                        }
                    },
                    "attachment_parameters": []
                }]
            })
        );
        Ok(())
    }
}
