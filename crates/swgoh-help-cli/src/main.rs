/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Endpoint response printed as JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swgoh_help_cli::commands::run;
use swgoh_help_cli::{CliConfig, Command, RequestOptions};

#[derive(Parser, Debug)]
#[command(name = "swgoh-help", version, about = "SWGOH.help API command-line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Validate the configuration and exit
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(flatten)]
    options: RequestOptions,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(config_path = %args.config_path.display(), "starting swgoh-help");
    let config = CliConfig::from_file(&args.config_path).context("load config")?;
    info!(
        base_url = %config.client_config().base_url(),
        username = %config.username,
        "configuration loaded"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .ok_or_else(|| anyhow!("a subcommand is required unless --dry-run is set"))?;
    let name = command.name();

    let client = config.build_client()?;
    let value = run(&client, command, args.options)
        .await
        .with_context(|| format!("{name} request failed"))?;

    let rendered = serde_json::to_string_pretty(&value).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
