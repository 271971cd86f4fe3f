use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Requests an on-demand scan of an attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanPrototype {
    pub attachment_id: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scan {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub attachment_id: Option<String>,
    pub report_id: Option<String>,
    pub status: Option<String>,
    pub last_scan_time: Option<DateTime<Utc>>,
    pub next_scan_time: Option<DateTime<Utc>>,
    pub scan_type: Option<String>,
    pub occurence: Option<i64>,
}
