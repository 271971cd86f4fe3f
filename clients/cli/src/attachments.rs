use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use prettytable::{row, Table};
use scc_client::{ListAllAttachmentsOptions, ListAttachmentsOptions};

use crate::args::CommonOptions;
use crate::pages::PageArgs;
use crate::ui::FancyToString;
use crate::{emitln, RunCommand};

#[derive(Clone, Debug, Parser)]
pub struct List {
    /// Only list the attachments of this profile
    #[clap(long)]
    profile_id: Option<String>,
    /// Only list attachments with this name
    #[clap(long, conflicts_with = "profile_id")]
    name: Option<String>,
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
        let listing = match self.profile_id {
            | Some(ref profile_id) => {
                let options = ListAttachmentsOptions {
                    profile_id: profile_id.clone(),
                    limit: self.page.limit(),
                    ..Default::default()
                };
                self.page
                    .fetch(&client, options, common_options, out, err)
                    .await?
            }
            | None => {
                let options = ListAllAttachmentsOptions {
                    limit: self.page.limit(),
                    attachment_name: self.name.clone(),
                    ..Default::default()
                };
                self.page
                    .fetch(&client, options, common_options, out, err)
                    .await?
            }
        };

        if !listing.is_empty() {
            let mut table = Table::new();
            table.set_titles(row![
                "Id",
                "Name",
                "Profile",
                "Status",
                "Schedule",
                "Last Scan",
                "Next Scan",
            ]);
            for attachment in &listing.items {
                let last_scan = attachment
                    .last_scan
                    .as_ref()
                    .map(|scan| {
                        format!(
                            "{} {}",
                            scan.status.clone().unwrap_or_default(),
                            scan.time.fancy()
                        )
                    })
                    .unwrap_or_default();
                table.add_row(row![
                    attachment.id.clone().unwrap_or_default(),
                    attachment.name.clone().unwrap_or_default(),
                    attachment.profile_id.clone().unwrap_or_default(),
                    attachment.status.fancy(),
                    attachment
                        .schedule
                        .map(|s| s.to_string())
                        .unwrap_or_default(),
                    last_scan,
                    attachment.next_scan_time.fancy(),
                ]);
            }
            emitln!(out, "{}", table);
        }
        listing.emit_footer(err, "Attachments").await?;

        Ok(())
    }
}
