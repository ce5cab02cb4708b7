use clap::Parser;
use fincalc::args::{Args, Command};
use fincalc::{commands, init_path, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config_path = args.common().config();

    let _: () = match args.command() {
        Command::Init(init_args) => {
            let path = init_path(config_path)?;
            commands::init(&path, init_args.force()).await?.print()
        }

        Command::Interactive => {
            let config = Config::resolve(config_path).await?;
            commands::interactive(config).await?.print()
        }

        Command::Summary(summary_args) => {
            let config = Config::resolve(config_path).await?;
            commands::summary(config, summary_args).await?.print()
        }

        Command::Validate(validate_args) => commands::validate(&validate_args).print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
