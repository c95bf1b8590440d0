pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod probe;
pub mod snapshot;
pub mod summary;

use clap::Parser;
use cli::{Cli, Commands, cmd_init, cmd_probe};
pub use config::Config;
pub use error::ProbeError;
pub use probe::{Probe, ProbeOutcome};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config.general.log_level);

    match cli.command {
        None => cmd_probe(&config, &[], None).await,
        Some(Commands::Probe { query, output_dir }) => {
            cmd_probe(&config, &query, output_dir.as_deref()).await
        }
        Some(Commands::Init) => cmd_init(),
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
