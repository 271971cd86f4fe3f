use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::pagination::impl_page;
use crate::{
    display_as_wire_name,
    Assessment,
    MultiCloudScope,
    Operator,
    PageMeta,
};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Scheduled,
    Ondemand,
    #[cfg_attr(feature = "clap", value(skip))]
    #[serde(other)]
    Unknown,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NotCompliant,
    UnableToPerform,
    UserEvaluationRequired,
    #[cfg_attr(feature = "clap", value(skip))]
    #[serde(other)]
    Unknown,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Pass,
    Failure,
    Error,
    Skipped,
    #[cfg_attr(feature = "clap", value(skip))]
    #[serde(other)]
    Unknown,
}

display_as_wire_name!(ReportType, ComplianceStatus, EvaluationStatus);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

/// The attachment a report was produced for, as embedded in the report.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportAttachment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub scope: Option<Vec<MultiCloudScope>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: Option<String>,
    pub group_id: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub scan_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub report_type: Option<ReportType>,
    pub cos_object: Option<String>,
    pub instance_id: Option<String>,
    pub account: Option<Account>,
    pub profile: Option<ProfileInfo>,
    pub attachment: Option<ReportAttachment>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportCollection {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub home_account_id: Option<String>,
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl_page!(ReportCollection, reports, Report);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComplianceScore {
    pub passed: Option<i64>,
    pub total_count: Option<i64>,
    pub percent: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComplianceStats {
    pub status: Option<ComplianceStatus>,
    pub total_count: Option<i64>,
    pub compliant_count: Option<i64>,
    pub not_compliant_count: Option<i64>,
    pub unable_to_perform_count: Option<i64>,
    pub user_evaluation_required_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EvalStats {
    pub status: Option<ComplianceStatus>,
    pub total_count: Option<i64>,
    pub pass_count: Option<i64>,
    pub failure_count: Option<i64>,
    pub error_count: Option<i64>,
    pub completed_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceSummary {
    pub status: Option<ComplianceStatus>,
    pub total_count: Option<i64>,
    pub compliant_count: Option<i64>,
    pub not_compliant_count: Option<i64>,
    pub unable_to_perform_count: Option<i64>,
    pub user_evaluation_required_count: Option<i64>,
    pub top_failed: Option<Vec<ResourceSummaryItem>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceSummaryItem {
    pub name: Option<String>,
    pub id: Option<String>,
    pub service: Option<String>,
    pub account: Option<String>,
    pub pass_count: Option<i64>,
    pub failure_count: Option<i64>,
    pub error_count: Option<i64>,
    pub total_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub report_id: Option<String>,
    pub instance_id: Option<String>,
    pub account: Option<Account>,
    pub score: Option<ComplianceScore>,
    pub controls: Option<ComplianceStats>,
    pub evaluations: Option<EvalStats>,
    pub resources: Option<ResourceSummary>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlSpecificationWithStats {
    #[serde(rename = "control_specification_id")]
    pub id: Option<String>,
    pub component_id: Option<String>,
    #[serde(rename = "control_specification_description")]
    pub description: Option<String>,
    pub environment: Option<String>,
    pub responsibility: Option<String>,
    pub status: Option<ComplianceStatus>,
    pub total_count: Option<i64>,
    pub compliant_count: Option<i64>,
    pub not_compliant_count: Option<i64>,
    pub unable_to_perform_count: Option<i64>,
    pub user_evaluation_required_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlWithStats {
    pub id: Option<String>,
    pub control_library_id: Option<String>,
    pub control_library_version: Option<String>,
    pub control_name: Option<String>,
    pub control_description: Option<String>,
    pub control_category: Option<String>,
    pub status: Option<ComplianceStatus>,
    pub total_count: Option<i64>,
    pub compliant_count: Option<i64>,
    pub not_compliant_count: Option<i64>,
    pub unable_to_perform_count: Option<i64>,
    pub user_evaluation_required_count: Option<i64>,
    pub control_specifications: Option<Vec<ControlSpecificationWithStats>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportControls {
    pub report_id: Option<String>,
    pub home_account_id: Option<String>,
    #[serde(default)]
    pub controls: Vec<ControlWithStats>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuleInfo {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub rule_type: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub account_id: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_on: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub labels: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TargetInfo {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub resource_crn: Option<String>,
    pub resource_name: Option<String>,
    pub service_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EvaluatedProperty {
    pub property: Option<String>,
    pub property_description: Option<String>,
    pub operator: Option<Operator>,
    pub expected_value: Option<serde_json::Value>,
    pub found_value: Option<serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EvaluationDetails {
    pub properties: Option<Vec<EvaluatedProperty>>,
}

/// The outcome of one assessment against one target resource.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub home_account_id: Option<String>,
    pub report_id: Option<String>,
    pub control_id: Option<String>,
    pub component_id: Option<String>,
    pub component_name: Option<String>,
    pub assessment: Option<Assessment>,
    pub evaluate_time: Option<DateTime<Utc>>,
    pub target: Option<TargetInfo>,
    pub status: Option<EvaluationStatus>,
    pub reason: Option<String>,
    pub details: Option<EvaluationDetails>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EvaluationPage {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub home_account_id: Option<String>,
    pub report_id: Option<String>,
    #[serde(default)]
    pub evaluations: Vec<Evaluation>,
}

impl_page!(EvaluationPage, evaluations, Evaluation);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub report_id: Option<String>,
    pub id: Option<String>,
    pub resource_name: Option<String>,
    pub component_id: Option<String>,
    pub component_name: Option<String>,
    pub environment: Option<String>,
    pub account: Option<Account>,
    pub status: Option<ComplianceStatus>,
    pub total_count: Option<i64>,
    pub pass_count: Option<i64>,
    pub failure_count: Option<i64>,
    pub error_count: Option<i64>,
    pub completed_count: Option<i64>,
    pub service_name: Option<String>,
    pub instance_crn: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourcePage {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub home_account_id: Option<String>,
    pub report_id: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl_page!(ResourcePage, resources, Resource);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Tags {
    pub user: Option<Vec<String>>,
    pub access: Option<Vec<String>>,
    pub service: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportTags {
    pub report_id: Option<String>,
    pub tags: Option<Tags>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportViolationDataPoint {
    pub report_id: Option<String>,
    pub report_group_id: Option<String>,
    pub scan_time: Option<DateTime<Utc>>,
    pub controls: Option<ComplianceStats>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportViolationsDrift {
    pub home_account_id: Option<String>,
    pub report_id: Option<String>,
    #[serde(default)]
    pub data_points: Vec<ReportViolationDataPoint>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportLatest {
    pub home_account_id: Option<String>,
    pub controls: Option<ComplianceStats>,
    pub evaluations: Option<EvalStats>,
    pub score: Option<ComplianceScore>,
    #[serde(default)]
    pub reports: Vec<Report>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListReportsOptions {
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub attachment_id: Option<String>,
    pub group_id: Option<String>,
    pub profile_id: Option<String>,
    pub scope_id: Option<String>,
    pub report_type: Option<ReportType>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetReportControlsOptions {
    pub report_id: String,
    pub control_id: Option<String>,
    pub control_name: Option<String>,
    pub control_description: Option<String>,
    pub control_category: Option<String>,
    pub status: Option<ComplianceStatus>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListReportEvaluationsOptions {
    pub report_id: String,
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub assessment_id: Option<String>,
    pub assessment_method: Option<String>,
    pub component_id: Option<String>,
    pub target_id: Option<String>,
    pub target_env: Option<String>,
    pub target_name: Option<String>,
    pub status: Option<EvaluationStatus>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListReportResourcesOptions {
    pub report_id: String,
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub id: Option<String>,
    pub resource_name: Option<String>,
    pub account_id: Option<String>,
    pub component_id: Option<String>,
    pub status: Option<ComplianceStatus>,
    pub sort: Option<String>,
}
