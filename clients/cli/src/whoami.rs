use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use colored::Colorize;

use crate::args::CommonOptions;
use crate::{emitln, RunCommand};

#[derive(Parser, Debug, Clone)]
pub struct WhoAmI {
    #[arg(long)]
    /// Reveal the configured bearer token
    show_token: bool,
}

#[async_trait]
impl RunCommand for WhoAmI {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        emitln!(
            out,
            "Service: {}",
            common_options.base_url()?.to_string().green()
        );
        match common_options.instance_id() {
            | Ok(instance_id) => {
                emitln!(out, "Instance: {}", instance_id.green());
            }
            | Err(_) => {
                emitln!(err, "{}", "WARNING: NO INSTANCE ID IS SET".red());
            }
        }
        match common_options.token() {
            | Ok(token) if self.show_token => {
                emitln!(out, "Bearer Token: {}", token.yellow());
            }
            | Ok(_) => {}
            | Err(_) => {
                emitln!(err, "{}", "WARNING: NO BEARER TOKEN IS SET".red());
            }
        }

        Ok(())
    }
}
