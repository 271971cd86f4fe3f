use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// An integration (e.g. Workload Protection) that can feed results into the
/// instance.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderType {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub s2s_enabled: Option<bool>,
    pub instance_limit: Option<i64>,
    pub mode: Option<String>,
    pub data_type: Option<String>,
    pub icon: Option<String>,
    pub label: Option<LabelType>,
    pub attributes: Option<BTreeMap<String, serde_json::Value>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabelType {
    pub text: Option<String>,
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderTypeCollection {
    #[serde(default)]
    pub provider_types: Vec<ProviderType>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderTypeInstance {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub instance_type: Option<String>,
    pub name: Option<String>,
    pub attributes: Option<BTreeMap<String, serde_json::Value>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderTypeInstanceCollection {
    #[serde(default)]
    pub provider_type_instances: Vec<ProviderTypeInstance>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderTypeInstancePrototype {
    pub name: String,
    pub attributes: BTreeMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProviderTypeInstancePatch {
    pub name: Option<String>,
    pub attributes: Option<BTreeMap<String, serde_json::Value>>,
}
