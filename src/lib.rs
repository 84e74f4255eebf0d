pub mod cli;
pub mod clients;
pub mod config;
pub mod models;
pub mod services;

use anyhow::Context;
pub use cli::Cli;
use cli::{Commands, SessionSettings, cmd_init, cmd_interactive};
use clients::kinopoisk::KinopoiskClient;
pub use config::Config;
use services::LookupService;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    if let Some(Commands::Init) = cli.command {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(Config::default_config_path);
        return cmd_init(&path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.apply_env();

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(output) = cli.output {
        config.output.base_name = output;
    }

    init_tracing(&config.general.log_level);
    config.validate()?;

    let client =
        KinopoiskClient::new(&config.kinopoisk).context("Failed to build Kinopoisk client")?;
    let lookup = LookupService::new(client);
    let settings = SessionSettings {
        format: config.output.format,
        base_name: config.output.base_name,
    };

    info!(
        "Saving results as {} to {}.*",
        settings.format, settings.base_name
    );

    cmd_interactive(
        &lookup,
        &settings,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
    )
    .await
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
