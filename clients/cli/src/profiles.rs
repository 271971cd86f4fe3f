use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use prettytable::{row, Table};
use scc_client::{ListProfilesOptions, ProfileType};

use crate::args::CommonOptions;
use crate::pages::PageArgs;
use crate::ui::{emit_json, FancyToString};
use crate::{emitln, RunCommand};

#[derive(Clone, Debug, Parser)]
pub struct List {
    /// Only list predefined or custom profiles
    #[clap(long = "type")]
    profile_type: Option<ProfileType>,
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
        let options = ListProfilesOptions {
            limit: self.page.limit(),
            profile_type: self.profile_type,
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
                "Attachments",
                "Updated On",
            ]);
            for profile in &listing.items {
                table.add_row(row![
                    profile.id.clone().unwrap_or_default(),
                    profile.profile_name.clone().unwrap_or_default(),
                    profile
                        .profile_type
                        .map(|t| t.to_string())
                        .unwrap_or_default(),
                    profile.profile_version.clone().unwrap_or_default(),
                    profile.controls_count.unwrap_or_default(),
                    profile.attachments_count.unwrap_or_default(),
                    profile.updated_on.fancy(),
                ]);
            }
            emitln!(out, "{}", table);
        }
        listing.emit_footer(err, "Profiles").await?;

        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
pub struct View {
    /// Profile id
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
        let response = scc_client::profiles::get(&client, &self.id).await?;
        common_options.show_meta(&response, out, err).await?;

        let profile = response.into_inner()?;
        emit_json(out, &profile).await
    }
}
