use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use colored::Colorize;
use prettytable::{row, Table};
use scc_client::{
    ComplianceStatus,
    EvaluationStatus,
    ListReportEvaluationsOptions,
    ListReportResourcesOptions,
    ListReportsOptions,
    ReportType,
};

use crate::args::CommonOptions;
use crate::pages::PageArgs;
use crate::ui::{emit_json, FancyToString};
use crate::{emitln, RunCommand};

#[derive(Clone, Debug, Parser)]
pub struct List {
    /// Only list scheduled or on-demand reports
    #[clap(long = "type")]
    report_type: Option<ReportType>,
    /// Only list reports of this profile
    #[clap(long)]
    profile_id: Option<String>,
    /// Only list reports of this attachment
    #[clap(long)]
    attachment_id: Option<String>,
    /// Only list reports of this scope
    #[clap(long)]
    scope_id: Option<String>,
    /// Field to sort by, e.g. `profile_name`
    #[clap(long)]
    sort: Option<String>,
    #[clap(flatten)]
    page: PageArgs,
}

#[async_trait]
impl RunCommand for List {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        let client = common_options.new_client()?;
        let options = ListReportsOptions {
            limit: self.page.limit(),
            report_type: self.report_type,
            profile_id: self.profile_id.clone(),
            attachment_id: self.attachment_id.clone(),
            scope_id: self.scope_id.clone(),
            sort: self.sort.clone(),
            ..Default::default()
        };
        let listing = self
            .page
            .fetch(&client, options, common_options, out, err)
            .await?;

        if !listing.is_empty() {
            let mut table = Table::new();
            table.set_titles(row![
                "Id",
                "Type",
                "Profile",
                "Attachment",
                "Scan Time",
            ]);
            for report in &listing.items {
                table.add_row(row![
                    report.id.clone().unwrap_or_default(),
                    report
                        .report_type
                        .map(|t| t.to_string())
                        .unwrap_or_default(),
                    report
                        .profile
                        .as_ref()
                        .and_then(|p| p.name.clone())
                        .unwrap_or_default(),
                    report
                        .attachment
                        .as_ref()
                        .and_then(|a| a.name.clone())
                        .unwrap_or_default(),
                    report.scan_time.fancy(),
                ]);
            }
            emitln!(out, "{}", table);
        }
        listing.emit_footer(err, "Reports").await?;

        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
pub struct Summary {
    /// Report id
    id: String,
    /// Print the raw summary as JSON
    #[clap(long)]
    json: bool,
}

#[async_trait]
impl RunCommand for Summary {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        let client = common_options.new_client()?;
        let response = scc_client::reports::summary(&client, &self.id).await?;
        common_options.show_meta(&response, out, err).await?;

        let summary = response.into_inner()?;
        if self.json {
            return emit_json(out, &summary).await;
        }

        if let Some(ref score) = summary.score {
            emitln!(
                out,
                "Score: {}% ({} of {} passed)",
                score.percent.unwrap_or_default().to_string().bold(),
                score.passed.unwrap_or_default(),
                score.total_count.unwrap_or_default()
            );
        }

        let mut table = Table::new();
        table.set_titles(row!["", "Status", "Total", "Compliant", "Failing"]);
        if let Some(ref controls) = summary.controls {
            table.add_row(row![
                "Controls",
                controls.status.fancy(),
                controls.total_count.unwrap_or_default(),
                controls.compliant_count.unwrap_or_default(),
                controls.not_compliant_count.unwrap_or_default(),
            ]);
        }
        if let Some(ref evaluations) = summary.evaluations {
            table.add_row(row![
                "Evaluations",
                evaluations.status.fancy(),
                evaluations.total_count.unwrap_or_default(),
                evaluations.pass_count.unwrap_or_default(),
                evaluations.failure_count.unwrap_or_default(),
            ]);
        }
        if let Some(ref resources) = summary.resources {
            table.add_row(row![
                "Resources",
                resources.status.fancy(),
                resources.total_count.unwrap_or_default(),
                resources.compliant_count.unwrap_or_default(),
                resources.not_compliant_count.unwrap_or_default(),
            ]);
        }
        emitln!(out, "{}", table);

        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
pub struct Evaluations {
    /// Report id
    id: String,
    /// Only list evaluations with this outcome
    #[clap(long)]
    status: Option<EvaluationStatus>,
    #[clap(flatten)]
    page: PageArgs,
}

#[async_trait]
impl RunCommand for Evaluations {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        let client = common_options.new_client()?;
        let options = ListReportEvaluationsOptions {
            report_id: self.id.clone(),
            limit: self.page.limit(),
            status: self.status,
            ..Default::default()
        };
        let listing = self
            .page
            .fetch(&client, options, common_options, out, err)
            .await?;

        if !listing.is_empty() {
            let mut table = Table::new();
            table.set_titles(row![
                "Control",
                "Assessment",
                "Resource",
                "Status",
                "Reason",
            ]);
            for evaluation in &listing.items {
                table.add_row(row![
                    evaluation.control_id.clone().unwrap_or_default(),
                    evaluation
                        .assessment
                        .as_ref()
                        .and_then(|a| a.assessment_id.clone())
                        .unwrap_or_default(),
                    evaluation
                        .target
                        .as_ref()
                        .and_then(|t| t.resource_name.clone())
                        .unwrap_or_default(),
                    evaluation.status.fancy(),
                    evaluation.reason.clone().unwrap_or_default(),
                ]);
            }
            emitln!(out, "{}", table);
        }
        listing.emit_footer(err, "Evaluations").await?;

        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
pub struct Resources {
    /// Report id
    id: String,
    /// Only list resources with this compliance status
    #[clap(long)]
    status: Option<ComplianceStatus>,
    #[clap(flatten)]
    page: PageArgs,
}

#[async_trait]
impl RunCommand for Resources {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        let client = common_options.new_client()?;
        let options = ListReportResourcesOptions {
            report_id: self.id.clone(),
            limit: self.page.limit(),
            status: self.status,
            ..Default::default()
        };
        let listing = self
            .page
            .fetch(&client, options, common_options, out, err)
            .await?;

        if !listing.is_empty() {
            let mut table = Table::new();
            table.set_titles(row![
                "Name",
                "Service",
                "Status",
                "Passed",
                "Failed",
                "Errors",
            ]);
            for resource in &listing.items {
                table.add_row(row![
                    resource.resource_name.clone().unwrap_or_default(),
                    resource.service_name.clone().unwrap_or_default(),
                    resource.status.fancy(),
                    resource.pass_count.unwrap_or_default(),
                    resource.failure_count.unwrap_or_default(),
                    resource.error_count.unwrap_or_default(),
                ]);
            }
            emitln!(out, "{}", table);
        }
        listing.emit_footer(err, "Resources").await?;

        Ok(())
    }
}
