use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::pagination::impl_page;
use crate::{display_as_wire_name, PageMeta, ParameterType};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    UserDefined,
    SystemDefined,
    #[cfg_attr(feature = "clap", value(skip))]
    #[serde(other)]
    Unknown,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    StringEquals,
    StringNotEquals,
    StringMatch,
    StringNotMatch,
    StringContains,
    StringNotContains,
    NumEquals,
    NumNotEquals,
    NumLessThan,
    NumLessThanEquals,
    NumGreaterThan,
    NumGreaterThanEquals,
    IsEmpty,
    IsNotEmpty,
    IsTrue,
    IsFalse,
    StringsInList,
    StringsAllowed,
    StringsRequired,
    IpsInRange,
    IpsEquals,
    IpsNotEquals,
    DaysLessThan,
    #[serde(other)]
    Unknown,
}

display_as_wire_name!(RuleType, Operator);

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: Option<RuleType>,
    pub version: Option<String>,
    pub import: Option<Import>,
    pub target: Option<Target>,
    pub required_config: Option<RequiredConfig>,
    pub labels: Option<Vec<String>>,
    pub created_on: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_on: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Parameters a rule imports from the attachment or profile it is
/// evaluated under.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Import {
    pub parameters: Option<Vec<RuleParameter>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuleParameter {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub parameter_type: Option<ParameterType>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Target {
    pub service_name: Option<String>,
    pub service_display_name: Option<String>,
    pub resource_kind: Option<String>,
    pub additional_target_attributes: Option<Vec<AdditionalTargetAttribute>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdditionalTargetAttribute {
    pub name: Option<String>,
    pub operator: Option<Operator>,
    pub value: Option<String>,
}

/// A condition tree. Leaves compare one property; `and` / `or` nodes combine
/// nested conditions. Nodes of any other shape are kept verbatim in
/// [`Condition::Other`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Condition {
    And(ConditionAnd),
    Or(ConditionOr),
    Base(ConditionBase),
    // Must stay last, any JSON value matches it.
    Other(serde_json::Value),
}

/// The top-level condition a resource must satisfy for a rule to pass.
pub type RequiredConfig = Condition;

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionBase {
    pub description: Option<String>,
    pub property: String,
    pub operator: Operator,
    pub value: Option<serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionAnd {
    pub description: Option<String>,
    pub and: Vec<Condition>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionOr {
    pub description: Option<String>,
    pub or: Vec<Condition>,
}

impl Condition {
    pub fn description(&self) -> Option<&str> {
        match self {
            | Condition::And(c) => c.description.as_deref(),
            | Condition::Or(c) => c.description.as_deref(),
            | Condition::Base(c) => c.description.as_deref(),
            | Condition::Other(v) => {
                v.get("description").and_then(serde_json::Value::as_str)
            }
        }
    }

    /// Number of leaf comparisons in this tree. An unrecognized node counts
    /// as a single leaf.
    pub fn leaf_count(&self) -> usize {
        match self {
            | Condition::And(c) => c.and.iter().map(Self::leaf_count).sum(),
            | Condition::Or(c) => c.or.iter().map(Self::leaf_count).sum(),
            | Condition::Base(_) | Condition::Other(_) => 1,
        }
    }
}

/// Body of create and replace requests for user-defined rules.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RulePrototype {
    pub description: String,
    pub version: Option<String>,
    pub import: Option<Import>,
    pub target: Target,
    pub required_config: RequiredConfig,
    pub labels: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuleCollection {
    #[serde(flatten)]
    pub meta: PageMeta,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl_page!(RuleCollection, rules, Rule);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRulesOptions {
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub rule_type: Option<RuleType>,
    pub search: Option<String>,
    pub service_name: Option<String>,
    pub sort: Option<String>,
}
