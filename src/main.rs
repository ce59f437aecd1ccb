use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use yts_scraper::app::AppContext;
use yts_scraper::cli::{commands, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.as_deref(), cli.debug)?;

    // RUST_LOG wins over the configured default
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(ctx.log_filter()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    commands::run(&ctx, cli.command).await?;
    Ok(())
}
