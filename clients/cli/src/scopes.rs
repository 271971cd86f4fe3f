use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use prettytable::{row, Table};
use scc_client::ListScopesOptions;

use crate::args::CommonOptions;
use crate::pages::PageArgs;
use crate::ui::FancyToString;
use crate::{confirm_or_abort, emitln, RunCommand};

#[derive(Clone, Debug, Parser)]
pub struct List {
    /// Only list scopes with this name
    #[clap(long)]
    name: Option<String>,
    /// Only list scopes of this environment, e.g. `ibm-cloud`
    #[clap(long)]
    environment: Option<String>,
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
        let options = ListScopesOptions {
            limit: self.page.limit(),
            name: self.name.clone(),
            environment: self.environment.clone(),
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
                "Name",
                "Environment",
                "Attachments",
                "Updated On",
            ]);
            for scope in &listing.items {
                table.add_row(row![
                    scope.id.clone().unwrap_or_default(),
                    scope.name.clone().unwrap_or_default(),
                    scope.environment.clone().unwrap_or_default(),
                    scope.attachment_count.unwrap_or_default(),
                    scope.updated_on.fancy(),
                ]);
            }
            emitln!(out, "{}", table);
        }
        listing.emit_footer(err, "Scopes").await?;

        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
pub struct Delete {
    /// Scope id
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
            "Are you sure you want to delete the scope '{}'?",
            self.id
        );

        let client = common_options.new_client()?;
        let response = scc_client::scopes::delete(&client, &self.id).await?;
        common_options.show_meta(&response, out, err).await?;

        response.into_inner()?;
        emitln!(out, "Scope '{}' has been deleted!", self.id);
        Ok(())
    }
}
