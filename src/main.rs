mod app;
mod chart;
mod config;
mod loss;
mod util;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::chart::DisplayMode;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// CSV file with ID, COUNTRY, DEATHS, DAMAGE_MILLIONS_DOLLARS, CAUSE_CODE and YEAR columns.
    #[arg(long, default_value = "data/loss_datasets/loss_tsunamis_100.csv")]
    data: PathBuf,

    /// JSON chart config (geometry, forces, year columns).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for initial bubble positions and layout jitter.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial display: "all" or "year".
    #[arg(long, default_value = "all")]
    mode: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(data = %args.data.display(), seed, "starting loss-bubbles");

    let launch = app::LaunchOptions {
        data_path: args.data,
        config_path: args.config,
        seed,
        initial_mode: DisplayMode::from_button_id(&args.mode),
    };
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1100.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "loss-bubbles",
        options,
        Box::new(move |cc| Ok(Box::new(app::BubbleApp::new(cc, launch)))),
    )
}
