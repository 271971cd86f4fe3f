use http::Method;
use scc_api_model::{
    EvaluationPage,
    GetReportControlsOptions,
    ListReportEvaluationsOptions,
    ListReportResourcesOptions,
    ListReportsOptions,
    Report,
    ReportCollection,
    ReportControls,
    ReportLatest,
    ReportSummary,
    ReportTags,
    ReportViolationsDrift,
    ResourcePage,
    RuleInfo,
};

use crate::client::{append_query, required, RequestRunner};
use crate::pager::{list_request, Pager};
use crate::{Response, Result};

pub type ReportsPager<'a, R> = Pager<'a, R, ListReportsOptions>;
pub type ReportEvaluationsPager<'a, R> =
    Pager<'a, R, ListReportEvaluationsOptions>;
pub type ReportResourcesPager<'a, R> = Pager<'a, R, ListReportResourcesOptions>;

/// Retrieve one page of scan reports.
pub async fn list(
    client: &impl RequestRunner,
    options: &ListReportsOptions,
) -> Result<Response<ReportCollection>> {
    let mut path = client.make_instance_url(&["reports"])?;
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "start", options.start.as_deref());
    append_query(&mut path, "attachment_id", options.attachment_id.as_deref());
    append_query(&mut path, "group_id", options.group_id.as_deref());
    append_query(&mut path, "profile_id", options.profile_id.as_deref());
    append_query(&mut path, "scope_id", options.scope_id.as_deref());
    append_query(&mut path, "type", options.report_type);
    append_query(&mut path, "sort", options.sort.as_deref());

    client.run(Method::GET, path).await
}

list_request!(ListReportsOptions, ReportCollection, list);

/// Page through every report matching `options`.
pub fn pager<R: RequestRunner>(
    client: &R,
    options: ListReportsOptions,
) -> Result<ReportsPager<'_, R>> {
    Pager::new(client, options)
}

/// Retrieve the most recent report of every attachment along with the
/// aggregated compliance posture.
pub async fn latest(
    client: &impl RequestRunner,
    sort: Option<&str>,
) -> Result<Response<ReportLatest>> {
    let mut path = client.make_instance_url(&["reports", "latest"])?;
    append_query(&mut path, "sort", sort);

    client.run(Method::GET, path).await
}

pub async fn get<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<Report>>
where
    T: AsRef<str>,
{
    let id = required("report_id", id.as_ref())?;
    let path = client.make_instance_url(&["reports", id])?;
    client.run(Method::GET, path).await
}

pub async fn summary<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<ReportSummary>>
where
    T: AsRef<str>,
{
    let id = required("report_id", id.as_ref())?;
    let path = client.make_instance_url(&["reports", id, "summary"])?;
    client.run(Method::GET, path).await
}

/// Retrieve the controls of a report with their compliance statistics.
pub async fn controls(
    client: &impl RequestRunner,
    options: &GetReportControlsOptions,
) -> Result<Response<ReportControls>> {
    let id = required("report_id", &options.report_id)?;
    let mut path = client.make_instance_url(&["reports", id, "controls"])?;
    append_query(&mut path, "control_id", options.control_id.as_deref());
    append_query(&mut path, "control_name", options.control_name.as_deref());
    append_query(
        &mut path,
        "control_description",
        options.control_description.as_deref(),
    );
    append_query(
        &mut path,
        "control_category",
        options.control_category.as_deref(),
    );
    append_query(&mut path, "status", options.status);
    append_query(&mut path, "sort", options.sort.as_deref());

    client.run(Method::GET, path).await
}

/// Retrieve a rule as it was evaluated for a report.
pub async fn rule<T, U>(
    client: &impl RequestRunner,
    id: T,
    rule_id: U,
) -> Result<Response<RuleInfo>>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let id = required("report_id", id.as_ref())?;
    let rule_id = required("rule_id", rule_id.as_ref())?;
    let path = client.make_instance_url(&["reports", id, "rules", rule_id])?;
    client.run(Method::GET, path).await
}

/// Retrieve one page of the evaluations of a report.
pub async fn list_evaluations(
    client: &impl RequestRunner,
    options: &ListReportEvaluationsOptions,
) -> Result<Response<EvaluationPage>> {
    let id = required("report_id", &options.report_id)?;
    let mut path = client.make_instance_url(&["reports", id, "evaluations"])?;
    append_query(
        &mut path,
        "assessment_id",
        options.assessment_id.as_deref(),
    );
    append_query(
        &mut path,
        "assessment_method",
        options.assessment_method.as_deref(),
    );
    append_query(&mut path, "component_id", options.component_id.as_deref());
    append_query(&mut path, "target_id", options.target_id.as_deref());
    append_query(&mut path, "target_env", options.target_env.as_deref());
    append_query(&mut path, "target_name", options.target_name.as_deref());
    append_query(&mut path, "status", options.status);
    append_query(&mut path, "start", options.start.as_deref());
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "sort", options.sort.as_deref());

    client.run(Method::GET, path).await
}

list_request!(ListReportEvaluationsOptions, EvaluationPage, list_evaluations);

/// Page through every evaluation of a report.
pub fn evaluations_pager<R: RequestRunner>(
    client: &R,
    options: ListReportEvaluationsOptions,
) -> Result<ReportEvaluationsPager<'_, R>> {
    Pager::new(client, options)
}

/// Retrieve one page of the resources a report evaluated.
pub async fn list_resources(
    client: &impl RequestRunner,
    options: &ListReportResourcesOptions,
) -> Result<Response<ResourcePage>> {
    let id = required("report_id", &options.report_id)?;
    let mut path = client.make_instance_url(&["reports", id, "resources"])?;
    append_query(&mut path, "id", options.id.as_deref());
    append_query(&mut path, "resource_name", options.resource_name.as_deref());
    append_query(&mut path, "account_id", options.account_id.as_deref());
    append_query(&mut path, "component_id", options.component_id.as_deref());
    append_query(&mut path, "status", options.status);
    append_query(&mut path, "sort", options.sort.as_deref());
    append_query(&mut path, "start", options.start.as_deref());
    append_query(&mut path, "limit", options.limit);

    client.run(Method::GET, path).await
}

list_request!(ListReportResourcesOptions, ResourcePage, list_resources);

/// Page through every resource of a report.
pub fn resources_pager<R: RequestRunner>(
    client: &R,
    options: ListReportResourcesOptions,
) -> Result<ReportResourcesPager<'_, R>> {
    Pager::new(client, options)
}

pub async fn tags<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<ReportTags>>
where
    T: AsRef<str>,
{
    let id = required("report_id", id.as_ref())?;
    let path = client.make_instance_url(&["reports", id, "tags"])?;
    client.run(Method::GET, path).await
}

/// Retrieve the compliance trend of the attachment a report belongs to.
/// `scan_time_duration` bounds the history in days.
pub async fn violations_drift<T>(
    client: &impl RequestRunner,
    id: T,
    scan_time_duration: Option<i64>,
) -> Result<Response<ReportViolationsDrift>>
where
    T: AsRef<str>,
{
    let id = required("report_id", id.as_ref())?;
    let mut path =
        client.make_instance_url(&["reports", id, "violations_drift"])?;
    append_query(&mut path, "scan_time_duration", scan_time_duration);

    client.run(Method::GET, path).await
}
