use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use colored::Colorize;

use crate::args::CommonOptions;
use crate::ui::emit_json;
use crate::{emitln, RunCommand};

#[derive(Clone, Debug, Parser)]
pub struct View {}

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
        let response = scc_client::settings::get(&client).await?;
        common_options.show_meta(&response, out, err).await?;

        let settings = response.into_inner()?;
        emit_json(out, &settings).await
    }
}

#[derive(Clone, Debug, Parser)]
pub struct TestEvent {}

#[async_trait]
impl RunCommand for TestEvent {
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
        let response = scc_client::settings::post_test_event(&client).await?;
        common_options.show_meta(&response, out, err).await?;

        if response.into_inner()?.success {
            emitln!(out, "{}", "Test event delivered".green());
        } else {
            emitln!(out, "{}", "Test event was not delivered".red());
        }
        Ok(())
    }
}
