use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use colored::Colorize;

use crate::args::CommonOptions;
use crate::{emitln, RunCommand};

#[derive(Clone, Debug, Parser)]
pub struct Create {
    /// Id of the attachment to scan
    attachment_id: String,
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
        let client = common_options.new_client()?;
        let response =
            scc_client::scans::create(&client, &self.attachment_id).await?;
        common_options.show_meta(&response, out, err).await?;

        let scan = response.into_inner()?;
        emitln!(
            out,
            "Scan {} started ({})",
            scan.id.unwrap_or_default().bold(),
            scan.status.unwrap_or_default()
        );
        if let Some(report_id) = scan.report_id {
            emitln!(
                err,
                "Follow up with {} {}",
                "scc reports summary".bold(),
                report_id
            );
        }
        Ok(())
    }
}
