use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use colored::Colorize;
use prettytable::{row, Table};
use scc_client::{ListRulesOptions, RulePrototype, RuleType};
use tokio::io::AsyncReadExt;

use crate::args::CommonOptions;
use crate::pages::PageArgs;
use crate::ui::{emit_json, FancyToString};
use crate::{confirm_or_abort, emitln, RunCommand};

#[derive(Clone, Debug, Parser)]
pub struct List {
    /// Only list user-defined or system-defined rules
    #[clap(long = "type")]
    rule_type: Option<RuleType>,
    /// Free-text search over rule descriptions
    #[clap(long)]
    search: Option<String>,
    /// Only list rules targeting this service, e.g. `cloud-object-storage`
    #[clap(long)]
    service_name: Option<String>,
    /// Field to sort by, e.g. `updated_on`
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
        let options = ListRulesOptions {
            limit: self.page.limit(),
            rule_type: self.rule_type,
            search: self.search.clone(),
            service_name: self.service_name.clone(),
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
                "Service",
                "Description",
                "Version",
                "Updated On",
            ]);
            for rule in &listing.items {
                let service = rule
                    .target
                    .as_ref()
                    .and_then(|t| t.service_name.clone())
                    .unwrap_or_default();
                table.add_row(row![
                    rule.id.clone().unwrap_or_default(),
                    rule.rule_type.map(|t| t.to_string()).unwrap_or_default(),
                    service,
                    rule.description.clone().unwrap_or_default(),
                    rule.version.clone().unwrap_or_default(),
                    rule.updated_on.fancy(),
                ]);
            }
            emitln!(out, "{}", table);
        }
        listing.emit_footer(err, "Rules").await?;

        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
pub struct View {
    /// Rule id
    id: String,
}

#[async_trait]
impl RunCommand for View {
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
        let response = scc_client::rules::get(&client, &self.id).await?;
        common_options.show_meta(&response, out, err).await?;

        if let Some(etag) = response.etag() {
            emitln!(err, "ETag: {}", etag.bold());
        }
        let rule = response.into_inner()?;
        emit_json(out, &rule).await
    }
}

#[derive(Clone, Debug, Parser)]
pub struct Create {
    /// Path to a JSON rule definition, or `-` to read it from stdin
    file: PathBuf,
}

impl Create {
    async fn read_definition(&self) -> Result<RulePrototype> {
        let raw = if self.file.as_os_str() == "-" {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        } else {
            tokio::fs::read_to_string(&self.file).await.with_context(|| {
                format!("Failed to read '{}'", self.file.display())
            })?
        };
        serde_json::from_str(&raw).context("Invalid rule definition")
    }
}

#[async_trait]
impl RunCommand for Create {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        let prototype = self.read_definition().await?;
        let client = common_options.new_client()?;
        let response =
            scc_client::rules::create(&client, &prototype).await?;
        common_options.show_meta(&response, out, err).await?;

        let rule = response.into_inner()?;
        emit_json(out, &rule).await
    }
}

#[derive(Clone, Debug, Parser)]
pub struct Delete {
    /// Rule id
    id: String,
}

#[async_trait]
impl RunCommand for Delete {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        confirm_or_abort!(
            common_options,
            "Are you sure you want to permanently delete the rule '{}'?",
            self.id
        );

        let client = common_options.new_client()?;
        let response = scc_client::rules::delete(&client, &self.id).await?;
        common_options.show_meta(&response, out, err).await?;

        response.into_inner()?;
        emitln!(out, "Rule '{}' has been deleted!", self.id);
        Ok(())
    }
}
