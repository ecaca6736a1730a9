use super::args::{Cli, Commands};
use super::handlers;
use crate::logging;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use plenilunio_runtime::Config;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let mut config = Config::load(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);
    config.validate()?;

    let format = cli.format;
    let enable_color =
        !cli.no_color && format == OutputFormat::Text && std::io::stdout().is_terminal();
    let command = cli.command.unwrap_or(Commands::Run);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        match command {
            Commands::Run => handlers::run::handle(&config, format, enable_color).await,
            Commands::Show { id, offline } => {
                handlers::show::handle(&config, &id, offline, format, enable_color).await
            }
            Commands::List => handlers::list::handle(&config, format).await,
        }
    });

    // The stdin reader may still be parked in a blocking read.
    runtime.shutdown_background();
    result
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(catalog) = &cli.catalog {
        config.catalog = catalog.clone();
    }
    if let Some(url) = &cli.api_base_url {
        config.api_base_url = url.clone();
    }
    if let Some(delay) = cli.intro_delay_ms {
        config.intro_delay_ms = delay;
    }
}
