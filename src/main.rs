use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use cityguide::assets::DirAssetProvider;
use cityguide::catalog::Catalog;
use cityguide::config::Config;
use cityguide::link::SystemLinkOpener;
use cityguide::logging::init_tracing;
use cityguide::nav::Route;
use cityguide::ui::{self, App};

/// Terminal travel guide.
#[derive(Debug, Parser)]
#[command(name = "cityguide", version, about)]
struct Cli {
    /// Config file (default: ~/.config/cityguide/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog TOML file, overriding the configured one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Route to open at startup, e.g. /cities or /city/paris.
    #[arg(long)]
    start: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    if let Some(start) = cli.start {
        config.ui.start_route = start;
    }
    config.validate().context("validating command line overrides")?;

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load_from(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    info!(cities = catalog.len(), "catalog ready");

    let mut app = App::new(
        Arc::new(catalog),
        Box::new(SystemLinkOpener),
        Box::new(DirAssetProvider::new(config.assets.dir.clone())),
    );
    let start = Route::parse(&config.ui.start_route)?;
    if start != Route::Home {
        app.navigate_path(&start.to_path());
    }

    ui::run(app, Duration::from_millis(config.ui.tick_rate_ms))?;
    Ok(())
}
