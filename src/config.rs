use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Chart geometry, force constants and the year column tables.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    pub spawn_width: f32,
    pub spawn_height: f32,
    pub force_strength: f32,
    pub velocity_decay: f32,
    pub theta: f32,
    pub enter_duration_secs: f32,
    pub title_y: f32,
    pub year_centers: BTreeMap<String, f32>,
    pub year_titles: BTreeMap<String, f32>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 940.0,
            height: 600.0,
            spawn_width: 900.0,
            spawn_height: 800.0,
            force_strength: 0.02,
            velocity_decay: 0.2,
            theta: 0.9,
            enter_duration_secs: 2.0,
            title_y: 40.0,
            year_centers: BTreeMap::new(),
            year_titles: BTreeMap::new(),
        }
    }
}

impl ChartConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read chart config {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("failed to parse chart config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid chart config JSON")
    }

    /// Fills empty year tables with evenly spaced columns over `years`.
    ///
    /// Configured tables are left alone; titles default to the column centers.
    pub fn fill_year_columns<'a>(&mut self, years: impl IntoIterator<Item = &'a str>) {
        if self.year_centers.is_empty() {
            let mut distinct = years.into_iter().map(str::to_owned).collect::<Vec<_>>();
            distinct.sort();
            distinct.dedup();

            let column_width = self.width / (distinct.len() as f32 + 1.0);
            for (index, year) in distinct.into_iter().enumerate() {
                self.year_centers
                    .insert(year, column_width * (index as f32 + 1.0));
            }
        }

        if self.year_titles.is_empty() {
            self.year_titles = self.year_centers.clone();
        }
    }
}
