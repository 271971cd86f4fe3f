use std::env::VarError;

use anyhow::{bail, Context, Result};
use clap::Parser;
use scc_client::{
    Client,
    ClientBuilder,
    Response,
    BASE_URL_ENV,
    DEFAULT_BASE_URL,
};
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::client::WrappedClient;
use crate::{
    attachments,
    control_libraries,
    emitln,
    profiles,
    reports,
    rules,
    scans,
    scopes,
    settings,
    whoami,
    RunCommand,
};

pub(crate) const SCC_BEARER_TOKEN_VAR: &str = "SCC_BEARER_TOKEN";
pub(crate) const SCC_INSTANCE_ID_VAR: &str = "SCC_INSTANCE_ID";

#[derive(Parser, Debug, Clone)]
/// Command-line utility to inspect a Security and Compliance Center instance
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonOptions,
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Parser, Debug, Clone)]
pub struct CommonOptions {
    #[arg(long, global = true, value_name = "URL", env(BASE_URL_ENV))]
    /// Regional endpoint of the service, e.g.
    /// https://eu-de.compliance.cloud.ibm.com
    base_url: Option<Url>,
    #[arg(
        long,
        global = true,
        value_name = "TOKEN",
        env(SCC_BEARER_TOKEN_VAR),
        hide_env_values = true
    )]
    /// The IAM access token. We attempt to read from `.env` if environment
    /// variable is not set
    token: Option<String>,
    #[arg(
        long,
        global = true,
        value_name = "INSTANCE_ID",
        env(SCC_INSTANCE_ID_VAR)
    )]
    /// The service instance to act on. We attempt to read from `.env` if
    /// environment variable is not set
    instance_id: Option<String>,
    #[arg(long, global = true, value_name = "ID")]
    /// Sent as `X-Correlation-Id` to trace the requests of this invocation
    correlation_id: Option<String>,
    #[arg(long, global = true)]
    /// Displays a table with meta information about the response
    show_meta: bool,
    /// Ignore the confirmation prompt and always answer "yes"
    #[arg(long, short, global = true)]
    pub yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub enum CliCommand {
    /// Commands for control libraries
    #[command(visible_alias = "cl")]
    ControlLibraries {
        #[command(subcommand)]
        command: ControlLibrariesCommand,
    },
    /// Commands for profiles
    Profiles {
        #[command(subcommand)]
        command: ProfilesCommand,
    },
    /// Commands for rules
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },
    /// Commands for profile attachments
    Attachments {
        #[command(subcommand)]
        command: AttachmentsCommand,
    },
    /// Commands for scopes
    Scopes {
        #[command(subcommand)]
        command: ScopesCommand,
    },
    /// Commands for scan reports
    Reports {
        #[command(subcommand)]
        command: ReportsCommand,
    },
    /// Commands for scans
    Scans {
        #[command(subcommand)]
        command: ScansCommand,
    },
    /// Commands for instance settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    #[command(name = "whoami")]
    /// Prints information about the current context/environment
    WhoAmI(whoami::WhoAmI),
}

#[derive(Parser, Debug, Clone)]
pub enum ControlLibrariesCommand {
    /// List control libraries
    #[command(visible_alias = "ls")]
    List(control_libraries::List),
    /// View details about a given control library
    #[command(visible_alias = "v")]
    View(control_libraries::View),
}

#[derive(Parser, Debug, Clone)]
pub enum ProfilesCommand {
    /// List profiles
    #[command(visible_alias = "ls")]
    List(profiles::List),
    /// View details about a given profile
    #[command(visible_alias = "v")]
    View(profiles::View),
}

#[derive(Parser, Debug, Clone)]
pub enum RulesCommand {
    /// List rules
    #[command(visible_alias = "ls")]
    List(rules::List),
    /// View details about a given rule
    #[command(visible_alias = "v")]
    View(rules::View),
    /// Create a user-defined rule from a JSON definition
    Create(rules::Create),
    /// Delete a user-defined rule
    Delete(rules::Delete),
}

#[derive(Parser, Debug, Clone)]
pub enum AttachmentsCommand {
    /// List attachments, of one profile or of the whole instance
    #[command(visible_alias = "ls")]
    List(attachments::List),
}

#[derive(Parser, Debug, Clone)]
pub enum ScopesCommand {
    /// List scopes
    #[command(visible_alias = "ls")]
    List(scopes::List),
    /// Delete a scope
    Delete(scopes::Delete),
}

#[derive(Parser, Debug, Clone)]
pub enum ReportsCommand {
    /// List scan reports
    #[command(visible_alias = "ls")]
    List(reports::List),
    /// View the compliance summary of a report
    Summary(reports::Summary),
    /// List the evaluations of a report
    Evaluations(reports::Evaluations),
    /// List the resources a report evaluated
    Resources(reports::Resources),
}

#[derive(Parser, Debug, Clone)]
pub enum ScansCommand {
    /// Start an on-demand scan of an attachment
    Create(scans::Create),
}

#[derive(Parser, Debug, Clone)]
pub enum SettingsCommand {
    /// View the instance settings
    #[command(visible_alias = "v")]
    View(settings::View),
    /// Send a test event to the configured Event Notifications instance
    TestEvent(settings::TestEvent),
}

/// Reads `var` from the environment, which by now includes `.env`. Clap has
/// already looked at the process environment, so landing here with a value
/// means it came from the `.env` file.
fn from_dotenv(var: &str) -> Result<Option<String>> {
    match std::env::var(var) {
        | Ok(t) => Ok(Some(t)),
        | Err(VarError::NotPresent) => Ok(None),
        | e => {
            e.with_context(|| {
                format!("Failed to load value of `{}` from .env file", var)
            })
            .map(Some)
        }
    }
}

impl CommonOptions {
    pub fn token(&self) -> Result<String> {
        if let Some(ref token) = self.token {
            return Ok(token.to_string());
        }

        if let Some(token) = from_dotenv(SCC_BEARER_TOKEN_VAR)? {
            return Ok(token);
        }

        bail!("No bearer token was specified!")
    }

    pub fn instance_id(&self) -> Result<String> {
        if let Some(ref instance_id) = self.instance_id {
            return Ok(instance_id.to_string());
        }

        if let Some(instance_id) = from_dotenv(SCC_INSTANCE_ID_VAR)? {
            return Ok(instance_id);
        }

        bail!("No service instance id was specified!")
    }

    pub fn base_url(&self) -> Result<Url> {
        if let Some(ref base_url) = self.base_url {
            return Ok(base_url.clone());
        }
        match from_dotenv(BASE_URL_ENV)? {
            | Some(base_url) => {
                Url::parse(&base_url).context("Error while parsing base url")
            }
            | None => Ok(DEFAULT_BASE_URL.clone()),
        }
    }

    /// Whether `--show-meta` was passed.
    pub fn meta_requested(&self) -> bool {
        self.show_meta
    }

    pub fn new_client(&self) -> Result<WrappedClient> {
        let mut builder = ClientBuilder::new()
            .base_url(self.base_url()?)
            .context("Error while parsing base url")?
            .bearer_token(self.token()?)
            .instance_id(self.instance_id()?);
        if let Some(ref correlation_id) = self.correlation_id {
            builder = builder.correlation_id(correlation_id.clone());
        }
        let inner: Client = builder.build()?;
        Ok(WrappedClient { inner })
    }

    pub async fn show_meta<
        T,
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        response: &Response<T>,
        _out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
    ) -> Result<()> {
        use colored::Colorize;
        // Print extra information.
        if self.show_meta {
            emitln!(err);
            emitln!(
                err,
                "{}",
                "-------------------------------------------------".green()
            );
            emitln!(err, "URL: {}", response.url());
            emitln!(err, "Status Code: {}", response.status_code());
            emitln!(
                err,
                "Request Id: {}",
                response.request_id().clone().unwrap_or_default().green()
            );
            emitln!(
                err,
                "Correlation Id: {}",
                response.correlation_id().clone().unwrap_or_default().green()
            );
            emitln!(
                err,
                "{}",
                "-------------------------------------------------".green()
            );
            emitln!(err);
        }
        err.flush().await?;
        Ok(())
    }
}

macro_rules! dispatch {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $ty {
            pub async fn run<
                A: tokio::io::AsyncWrite + Send + Sync + Unpin,
                B: tokio::io::AsyncWrite + Send + Sync + Unpin,
            >(
                &self,
                out: &mut tokio::io::BufWriter<A>,
                err: &mut tokio::io::BufWriter<B>,
                common_options: &CommonOptions,
            ) -> Result<()> {
                match self {
                    $(
                        | $ty::$variant(c) => {
                            c.run(out, err, common_options).await
                        }
                    )+
                }
            }
        }
    };
}

dispatch!(ControlLibrariesCommand { List, View });
dispatch!(ProfilesCommand { List, View });
dispatch!(RulesCommand { List, View, Create, Delete });
dispatch!(AttachmentsCommand { List });
dispatch!(ScopesCommand { List, Delete });
dispatch!(ReportsCommand { List, Summary, Evaluations, Resources });
dispatch!(ScansCommand { Create });
dispatch!(SettingsCommand { View, TestEvent });

impl CliCommand {
    pub async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        match self {
            | CliCommand::ControlLibraries { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Profiles { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Rules { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Attachments { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Scopes { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Reports { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Scans { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Settings { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::WhoAmI(c) => c.run(out, err, common_options).await,
        }
    }
}
