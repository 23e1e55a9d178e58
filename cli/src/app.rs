use crate::cmd::Context;
use crate::config::Store;
use crate::Error;
use std::path::PathBuf;

#[derive(clap::Parser)]
#[clap(about, author, version)]
pub struct Command {
    /// Path to the credential file. Default to ~/.config/valboks-cli/config.json
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log each remote operation on stderr
    #[clap(short, long, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(clap::Subcommand)]
pub enum SubCommand {
    /// Authenticate with Dropbox and save the access token
    Auth(crate::cmd::auth::Command),
    /// List the content of a remote folder
    #[clap(visible_alias = "ls")]
    List(crate::cmd::list::Command),
    /// Upload a local file
    #[clap(visible_alias = "put")]
    Upload(crate::cmd::upload::Command),
    /// Delete a remote file or folder
    #[clap(visible_alias = "rm")]
    Delete(crate::cmd::delete::Command),
    /// Display the metadata of a remote file or folder
    Info(crate::cmd::info::Command),
    /// Download a remote file
    #[clap(visible_alias = "get")]
    Download(crate::cmd::download::Command),
    /// Create a remote folder
    Mkdir(crate::cmd::mkdir::Command),
}

impl Command {
    pub fn config(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Store::default_path)
    }

    pub fn set_log_level(&self) {
        let filter = if self.verbose {
            tracing_subscriber::EnvFilter::new("valboks=debug,valboks_cli=info")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
        };
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("unable to initialize logger: {err}");
        }
    }

    pub async fn execute(self, ctx: &mut Context<'_>) -> Result<(), Error> {
        match self.subcmd {
            SubCommand::Auth(inner) => inner.execute(ctx).await,
            SubCommand::List(inner) => inner.execute(ctx).await,
            SubCommand::Upload(inner) => inner.execute(ctx).await,
            SubCommand::Delete(inner) => inner.execute(ctx).await,
            SubCommand::Info(inner) => inner.execute(ctx).await,
            SubCommand::Download(inner) => inner.execute(ctx).await,
            SubCommand::Mkdir(inner) => inner.execute(ctx).await,
        }
    }
}
