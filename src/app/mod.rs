use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::Result;
use eframe::egui::{self, Context, Vec2};
use tracing::{error, info};

use crate::chart::{BubbleChart, DisplayMode};
use crate::config::ChartConfig;
use crate::loss::{RawRecord, load_records};

mod canvas;
mod render_utils;
mod ui;

use ui::FloatingTooltip;

pub struct LaunchOptions {
    pub data_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub seed: u64,
    pub initial_mode: DisplayMode,
}

pub struct BubbleApp {
    seed: u64,
    initial_mode: DisplayMode,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<LoadedData, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct LoadedData {
    config: ChartConfig,
    records: Vec<RawRecord>,
}

struct ViewModel {
    chart: BubbleChart,
    pan: Vec2,
    zoom: f32,
    tooltip: FloatingTooltip,
}

impl BubbleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, options: LaunchOptions) -> Self {
        let rx = Self::spawn_load(options.data_path, options.config_path);
        Self {
            seed: options.seed,
            initial_mode: options.initial_mode,
            state: AppState::Loading { rx },
        }
    }

    fn spawn_load(
        data_path: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Receiver<Result<LoadedData, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_data(&data_path, config_path.as_deref()).map_err(|error| {
                let message = format!("{error:#}");
                error!(error = %message, "failed to load loss data");
                message
            });
            let _ = tx.send(result);
        });

        rx
    }
}

fn load_data(data_path: &Path, config_path: Option<&Path>) -> Result<LoadedData> {
    let config = match config_path {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    let records = load_records(data_path)?;
    Ok(LoadedData { config, records })
}

impl ViewModel {
    fn new(loaded: LoadedData, seed: u64, mode: DisplayMode) -> Self {
        let LoadedData {
            mut config,
            records,
        } = loaded;
        config.fill_year_columns(records.iter().map(|record| record.year.as_str()));

        let mut chart = BubbleChart::new(config, seed).with_mode(mode);
        chart.set_data(&records);

        Self {
            chart,
            pan: Vec2::ZERO,
            zoom: 1.0,
            tooltip: FloatingTooltip::default(),
        }
    }
}

impl eframe::App for BubbleApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(Ok(loaded)) => {
                        info!(records = loaded.records.len(), seed = self.seed, "chart ready");
                        transition = Some(AppState::Ready(Box::new(ViewModel::new(
                            loaded,
                            self.seed,
                            self.initial_mode,
                        ))));
                    }
                    Ok(Err(error)) => transition = Some(AppState::Error(error)),
                    Err(TryRecvError::Empty) => ctx.request_repaint(),
                    Err(TryRecvError::Disconnected) => {
                        transition =
                            Some(AppState::Error("Background load worker disconnected".to_owned()));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading disaster loss records...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load disaster loss records");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
