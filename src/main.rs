use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use podcatalog::{
    core::state::AppState,
    infrastructure::{catalog_source::load_catalog, cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // CLI flags take precedence over the config file
    let config = Config::new()?.with_overrides(args.data, args.genre, args.sort);

    let catalog = load_catalog(config.catalog.data_file.as_deref())?;
    let state = AppState::new(Arc::new(catalog), config)?;

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(state, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
