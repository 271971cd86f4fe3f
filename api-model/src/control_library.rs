use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::pagination::impl_page;
use crate::{display_as_wire_name, PageMeta};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ControlLibraryType {
    Predefined,
    Custom,
    #[cfg_attr(feature = "clap", value(skip))]
    #[serde(other)]
    Unknown,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ControlStatus {
    Enabled,
    Disabled,
    #[serde(other)]
    Unknown,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    String,
    Numeric,
    General,
    Boolean,
    StringList,
    IpList,
    Timestamp,
    #[serde(other)]
    Unknown,
}

display_as_wire_name!(ControlLibraryType, ControlStatus, ParameterType);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlLibrary {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub control_library_name: Option<String>,
    pub control_library_description: Option<String>,
    pub control_library_type: Option<ControlLibraryType>,
    pub version_group_label: Option<String>,
    pub control_library_version: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_on: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub latest: Option<bool>,
    pub hierarchy_enabled: Option<bool>,
    pub controls_count: Option<i64>,
    pub control_parents_count: Option<i64>,
    // Only returned when fetching a single library.
    pub controls: Option<Vec<Control>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Control {
    pub control_name: Option<String>,
    pub control_id: Option<String>,
    pub control_description: Option<String>,
    pub control_category: Option<String>,
    pub control_parent: Option<String>,
    pub control_tags: Option<Vec<String>>,
    pub control_specifications: Option<Vec<ControlSpecification>>,
    pub control_docs: Option<ControlDoc>,
    pub control_requirement: Option<bool>,
    pub status: Option<ControlStatus>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlSpecification {
    #[serde(rename = "control_specification_id")]
    pub id: Option<String>,
    pub responsibility: Option<String>,
    pub component_id: Option<String>,
    pub component_name: Option<String>,
    pub environment: Option<String>,
    #[serde(rename = "control_specification_description")]
    pub description: Option<String>,
    pub assessments_count: Option<i64>,
    pub assessments: Option<Vec<Assessment>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub assessment_id: Option<String>,
    pub assessment_method: Option<String>,
    pub assessment_type: Option<String>,
    pub assessment_description: Option<String>,
    pub parameter_count: Option<i64>,
    pub parameters: Option<Vec<Parameter>>,
}

/// A parameter of an assessment. The value is free-form JSON; its shape is
/// described by `parameter_type`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    pub assessment_type: Option<String>,
    pub assessment_id: Option<String>,
    pub parameter_name: Option<String>,
    pub parameter_display_name: Option<String>,
    pub parameter_type: Option<ParameterType>,
    pub parameter_value: Option<serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlDoc {
    pub control_docs_id: Option<String>,
    pub control_docs_type: Option<String>,
}

/// Body of create and replace requests for custom control libraries.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlLibraryPrototype {
    pub control_library_name: String,
    pub control_library_description: String,
    pub control_library_type: ControlLibraryType,
    pub version_group_label: Option<String>,
    pub control_library_version: Option<String>,
    pub latest: Option<bool>,
    pub controls: Vec<Control>,
}

/// Acknowledgement returned when a custom control library is deleted.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlLibraryDelete {
    pub deleted: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlLibraryCollection {
    #[serde(flatten)]
    pub meta: PageMeta,
    #[serde(default)]
    pub control_libraries: Vec<ControlLibrary>,
}

impl_page!(ControlLibraryCollection, control_libraries, ControlLibrary);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListControlLibrariesOptions {
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub control_library_type: Option<ControlLibraryType>,
}
