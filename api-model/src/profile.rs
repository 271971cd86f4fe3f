use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::pagination::impl_page;
use crate::{
    display_as_wire_name,
    ControlDoc,
    ControlSpecification,
    PageMeta,
    ParameterType,
};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    Predefined,
    Custom,
    #[cfg_attr(feature = "clap", value(skip))]
    #[serde(other)]
    Unknown,
}

display_as_wire_name!(ProfileType);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Option<String>,
    pub profile_name: Option<String>,
    pub profile_description: Option<String>,
    pub profile_type: Option<ProfileType>,
    pub profile_version: Option<String>,
    pub version_group_label: Option<String>,
    pub instance_id: Option<String>,
    pub latest: Option<bool>,
    pub hierarchy_enabled: Option<bool>,
    pub created_by: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_on: Option<DateTime<Utc>>,
    pub controls_count: Option<i64>,
    pub control_parents_count: Option<i64>,
    pub attachments_count: Option<i64>,
    pub controls: Option<Vec<ProfileControl>>,
    pub default_parameters: Option<Vec<DefaultParameter>>,
}

/// A control as it appears inside a profile, with the library it was taken
/// from.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileControl {
    pub control_library_id: Option<String>,
    pub control_id: Option<String>,
    pub control_library_version: Option<String>,
    pub control_name: Option<String>,
    pub control_description: Option<String>,
    pub control_category: Option<String>,
    pub control_parent: Option<String>,
    pub control_requirement: Option<bool>,
    pub control_docs: Option<ControlDoc>,
    pub control_specifications_count: Option<i64>,
    pub control_specifications: Option<Vec<ControlSpecification>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileControlPrototype {
    pub control_library_id: String,
    pub control_id: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DefaultParameter {
    pub assessment_type: Option<String>,
    pub assessment_id: Option<String>,
    pub parameter_name: Option<String>,
    pub parameter_default_value: Option<serde_json::Value>,
    pub parameter_display_name: Option<String>,
    pub parameter_type: Option<ParameterType>,
}

/// Body of create and replace requests for custom profiles.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfilePrototype {
    pub profile_name: String,
    pub profile_description: String,
    pub profile_version: Option<String>,
    pub latest: Option<bool>,
    pub version_group_label: Option<String>,
    pub controls: Vec<ProfileControlPrototype>,
    pub default_parameters: Vec<DefaultParameter>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileCollection {
    #[serde(flatten)]
    pub meta: PageMeta,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl_page!(ProfileCollection, profiles, Profile);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProfilesOptions {
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub profile_type: Option<ProfileType>,
}
