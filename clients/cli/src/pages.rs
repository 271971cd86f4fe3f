//! Shared `--limit`, `--start` and `--all` handling for list commands.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use scc_client::{ListRequest, Page, Pager};

use crate::args::CommonOptions;
use crate::client::WrappedClient;
use crate::emitln;

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Maximum number of items per page
    #[arg(long)]
    limit: Option<i64>,
    /// Cursor to start listing from, as printed below a previous page
    #[arg(long, conflicts_with = "all")]
    start: Option<String>,
    /// Follow the cursor and list every page
    #[arg(long)]
    all: bool,
}

/// Items of one page, or of every page with `--all`.
pub struct Listing<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total_count: Option<i64>,
}

impl PageArgs {
    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub async fn fetch<L, A, B>(
        &self,
        client: &WrappedClient,
        mut options: L,
        common_options: &CommonOptions,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
    ) -> Result<Listing<<L::Page as Page>::Item>>
    where
        L: ListRequest,
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    {
        if self.all {
            if common_options.meta_requested() {
                emitln!(
                    err,
                    "{}",
                    "Response meta is not shown when listing with --all"
                        .yellow()
                );
            }
            let mut pager = Pager::new(client, options)?;
            let items = pager.all().await?;
            return Ok(Listing {
                items,
                next: None,
                total_count: pager.total_count(),
            });
        }

        // The pager only starts from the beginning, so a page picked with
        // `--start` is fetched directly.
        options.set_start(self.start.clone());
        let response = options.list(client).await?;
        common_options.show_meta(&response, out, err).await?;

        let page = response.into_inner()?;
        let next = page.next_start().map(ToOwned::to_owned);
        let total_count = page.meta().total_count;
        Ok(Listing {
            items: page.into_items(),
            next,
            total_count,
        })
    }
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub async fn emit_footer<B>(
        &self,
        err: &mut tokio::io::BufWriter<B>,
        noun: &str,
    ) -> Result<()>
    where
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
        T: Sync,
    {
        let len = self.items.len();
        match self.total_count {
            | Some(total) => emitln!(err, "{} of {} {} shown", len, total, noun),
            | None => emitln!(err, "{} {} shown", len, noun),
        }
        if let Some(ref next) = self.next {
            emitln!(
                err,
                "View next page by {}{}",
                "--start=".bold(),
                next.as_str().bold()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use scc_client::ListRulesOptions;
    use serde_json::json;
    use tokio::io::AsyncWriteExt;
    use wiremock::matchers::{
        method,
        path,
        query_param,
        query_param_is_missing,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Parser)]
    struct ListArgs {
        #[clap(flatten)]
        common: CommonOptions,
        #[clap(flatten)]
        page: PageArgs,
    }

    #[tokio::test]
    async fn all_reports_total_count_and_skipped_meta() -> Result<()> {
        let server = MockServer::start().await;
        let rules_path = "/instances/inst-1/v3/rules";
        Mock::given(method("GET"))
            .and(path(rules_path))
            .and(query_param("start", "tok-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 3,
                "rules": [{ "id": "r-3" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(rules_path))
            .and(query_param_is_missing("start"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 3,
                "next": { "start": "tok-2" },
                "rules": [{ "id": "r-1" }, { "id": "r-2" }]
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let args = ListArgs::try_parse_from([
            "scc",
            "--base-url",
            uri.as_str(),
            "--token",
            "token",
            "--instance-id",
            "inst-1",
            "--show-meta",
            "--all",
        ])?;
        let client = args.common.new_client()?;
        let mut out = tokio::io::BufWriter::new(Vec::new());
        let mut err = tokio::io::BufWriter::new(Vec::new());

        let listing = args
            .page
            .fetch(
                &client,
                ListRulesOptions::default(),
                &args.common,
                &mut out,
                &mut err,
            )
            .await?;
        err.flush().await?;

        assert_eq!(listing.items.len(), 3);
        assert_eq!(listing.total_count, Some(3));
        assert!(listing.next.is_none());
        let err = String::from_utf8(err.into_inner())?;
        assert!(err.contains("not shown when listing with --all"));
        Ok(())
    }
}
