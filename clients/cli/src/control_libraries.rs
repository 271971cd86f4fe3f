use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use prettytable::{row, Table};
use scc_client::{ControlLibraryType, ListControlLibrariesOptions};

use crate::args::CommonOptions;
use crate::pages::PageArgs;
use crate::ui::{emit_json, FancyToString};
use crate::{emitln, RunCommand};

#[derive(Clone, Debug, Parser)]
pub struct List {
    /// Only list predefined or custom libraries
    #[clap(long = "type")]
    library_type: Option<ControlLibraryType>,
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
        let options = ListControlLibrariesOptions {
            limit: self.page.limit(),
            control_library_type: self.library_type,
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
                "Type",
                "Version",
                "Controls",
                "Updated On",
            ]);
            for library in &listing.items {
                table.add_row(row![
                    library.id.clone().unwrap_or_default(),
                    library.control_library_name.clone().unwrap_or_default(),
                    library
                        .control_library_type
                        .map(|t| t.to_string())
                        .unwrap_or_default(),
                    library
                        .control_library_version
                        .clone()
                        .unwrap_or_default(),
                    library.controls_count.unwrap_or_default(),
                    library.updated_on.fancy(),
                ]);
            }
            emitln!(out, "{}", table);
        }
        listing.emit_footer(err, "Control Libraries").await?;

        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
pub struct View {
    /// Control library id
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
        let response =
            scc_client::control_libraries::get(&client, &self.id).await?;
        common_options.show_meta(&response, out, err).await?;

        let library = response.into_inner()?;
        emit_json(out, &library).await
    }
}
