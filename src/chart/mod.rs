mod interaction;
mod mode;
mod node;
mod palette;
mod scale;
mod simulation;

use eframe::egui::{Color32, Vec2, vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::ChartConfig;
use crate::loss::RawRecord;

pub use interaction::Tooltip;
pub use mode::DisplayMode;
pub use node::{Group, VisualNode};
pub use palette::{fill_color, rest_stroke};
use palette::{HIGHLIGHT_STROKE, STROKE_WIDTH};
pub use simulation::Anchor;
use simulation::Simulation;

/// Draw attributes of one bubble for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite<'a> {
    pub id: &'a str,
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct YearTitle {
    pub label: String,
    pub position: Vec2,
}

/// A bubble chart instance: nodes, layout engine and display mode.
///
/// Coordinates are chart pixels with the origin at the top-left corner of a
/// `config.width` x `config.height` canvas.
pub struct BubbleChart {
    config: ChartConfig,
    center: Vec2,
    nodes: Vec<VisualNode>,
    simulation: Simulation,
    mode: DisplayMode,
    highlighted: Option<usize>,
    enter_elapsed_secs: f32,
    rng: StdRng,
}

impl BubbleChart {
    pub fn new(config: ChartConfig, seed: u64) -> Self {
        let center = vec2(config.width / 2.0, config.height / 2.0);
        let mut rng = StdRng::seed_from_u64(seed);
        let simulation = Simulation::new(&config, center, rng.r#gen());

        Self {
            config,
            center,
            nodes: Vec::new(),
            simulation,
            mode: DisplayMode::default(),
            highlighted: None,
            enter_elapsed_secs: 0.0,
            rng,
        }
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.config.width, self.config.height)
    }

    pub fn nodes(&self) -> &[VisualNode] {
        &self.nodes
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn x_anchor(&self) -> &Anchor {
        self.simulation.x_anchor()
    }

    pub fn y_anchor(&self) -> &Anchor {
        self.simulation.y_anchor()
    }

    pub fn heat(&self) -> f32 {
        self.simulation.alpha()
    }

    pub fn is_settled(&self) -> bool {
        !self.simulation.is_running()
    }

    /// Replaces the nodes with ones built from `records` and restarts layout
    /// in the current mode.
    pub fn set_data(&mut self, records: &[RawRecord]) {
        let spawn = vec2(self.config.spawn_width, self.config.spawn_height);
        self.nodes = node::create_nodes(records, spawn, &mut self.rng);
        self.highlighted = None;
        self.enter_elapsed_secs = 0.0;

        info!(nodes = self.nodes.len(), "bubble chart data set");
        self.toggle_display(self.mode);
    }

    pub fn select_grouped(&mut self) {
        self.toggle_display(DisplayMode::Grouped);
    }

    pub fn select_by_year(&mut self) {
        self.toggle_display(DisplayMode::ByYear);
    }

    /// Switches the x anchor for `mode` and reheats the layout.
    ///
    /// Selecting the active mode again still reheats.
    pub fn toggle_display(&mut self, mode: DisplayMode) {
        self.mode = mode;
        let anchor = match mode {
            DisplayMode::Grouped => Anchor::Shared(self.center.x),
            DisplayMode::ByYear => Anchor::PerNode(
                self.nodes
                    .iter()
                    .map(|node| self.year_center(&node.year))
                    .collect(),
            ),
        };

        self.simulation.set_x_anchor(anchor);
        self.simulation.restart();
        info!(mode = mode.button_id(), "display mode selected");
    }

    /// Column x for `year`; years missing from the table use the shared center.
    pub fn year_center(&self, year: &str) -> f32 {
        self.config
            .year_centers
            .get(year)
            .copied()
            .unwrap_or(self.center.x)
    }

    pub fn year_titles(&self) -> Vec<YearTitle> {
        if !self.mode.shows_year_titles() {
            return Vec::new();
        }

        self.config
            .year_titles
            .iter()
            .map(|(year, x)| YearTitle {
                label: year.clone(),
                position: vec2(*x, self.config.title_y),
            })
            .collect()
    }

    /// One layout tick; a no-op once settled. Returns whether layout is still running.
    pub fn tick(&mut self) -> bool {
        self.simulation.step(&mut self.nodes)
    }

    /// Advances one frame. Returns whether anything is still animating.
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        self.enter_elapsed_secs += delta_secs.max(0.0);
        let moving = self.tick();
        moving || self.enter_progress() < 1.0
    }

    fn enter_progress(&self) -> f32 {
        if self.config.enter_duration_secs <= 0.0 {
            return 1.0;
        }
        (self.enter_elapsed_secs / self.config.enter_duration_secs).clamp(0.0, 1.0)
    }

    pub fn display_radius(&self, node: &VisualNode) -> f32 {
        node.radius * ease_cubic_in_out(self.enter_progress())
    }

    fn stroke(&self, index: usize, group: Group) -> Color32 {
        if self.highlighted == Some(index) {
            HIGHLIGHT_STROKE
        } else {
            rest_stroke(group)
        }
    }

    /// Sprites in draw order (damage descending).
    pub fn sprites(&self) -> impl Iterator<Item = Sprite<'_>> + '_ {
        self.nodes.iter().enumerate().map(|(index, node)| Sprite {
            id: node.id.as_str(),
            center: node.position,
            radius: self.display_radius(node),
            fill: fill_color(node.group),
            stroke: self.stroke(index, node.group),
            stroke_width: STROKE_WIDTH,
        })
    }
}

fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::node::record;
    use super::*;

    fn chart_with_years() -> BubbleChart {
        let mut config = ChartConfig::default();
        config.year_centers.insert("2000".to_owned(), 160.0);
        config.year_centers.insert("2001".to_owned(), 780.0);
        config.year_titles.insert("2000".to_owned(), 160.0);
        config.year_titles.insert("2001".to_owned(), 780.0);

        let mut chart = BubbleChart::new(config, 21);
        chart.set_data(&[
            record("1", 100.0, 50.0, Some(1), "2000"),
            record("2", 0.0, 200.0, Some(6), "2001"),
            record("3", 30.0, 80.0, Some(3), "1999"),
        ]);
        chart
    }

    #[test]
    fn set_data_starts_grouped_and_running() {
        let chart = chart_with_years();
        assert_eq!(chart.nodes().len(), 3);
        assert_eq!(chart.mode(), DisplayMode::Grouped);
        assert_eq!(chart.x_anchor(), &Anchor::Shared(470.0));
        assert_eq!(chart.heat(), 1.0);
        assert!(!chart.is_settled());
    }

    #[test]
    fn by_year_targets_each_node_at_its_column() {
        let mut chart = chart_with_years();
        chart.select_by_year();

        let Anchor::PerNode(targets) = chart.x_anchor() else {
            panic!("expected per-node anchor");
        };
        let expected = chart
            .nodes()
            .iter()
            .map(|node| match node.year.as_str() {
                "2000" => 160.0,
                "2001" => 780.0,
                _ => 470.0,
            })
            .collect::<Vec<_>>();
        assert_eq!(targets, &expected);
        assert_eq!(chart.y_anchor(), &Anchor::Shared(300.0));
    }

    #[test]
    fn grouped_restores_shared_center() {
        let mut chart = chart_with_years();
        chart.select_by_year();
        chart.select_grouped();
        assert_eq!(chart.x_anchor(), &Anchor::Shared(470.0));
        assert_eq!(chart.y_anchor(), &Anchor::Shared(300.0));
    }

    #[test]
    fn every_toggle_resets_heat() {
        let mut chart = chart_with_years();
        for _ in 0..120 {
            chart.advance(1.0 / 60.0);
        }
        assert!(chart.heat() < 0.2);

        chart.select_by_year();
        assert_eq!(chart.heat(), 1.0);

        for _ in 0..400 {
            chart.advance(1.0 / 60.0);
        }
        assert!(chart.is_settled());

        chart.select_by_year();
        assert_eq!(chart.heat(), 1.0);
        assert!(!chart.is_settled());
    }

    #[test]
    fn year_titles_follow_mode() {
        let mut chart = chart_with_years();
        assert!(chart.year_titles().is_empty());

        chart.select_by_year();
        let titles = chart.year_titles();
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].label, "2000");
        assert_eq!(titles[0].position, vec2(160.0, 40.0));

        chart.select_grouped();
        assert!(chart.year_titles().is_empty());
    }

    #[test]
    fn bubbles_grow_in_over_the_enter_transition() {
        let mut chart = chart_with_years();
        assert!(chart.sprites().all(|sprite| sprite.radius == 0.0));

        chart.advance(1.0);
        let halfway = chart.sprites().map(|sprite| sprite.radius).collect::<Vec<_>>();
        let targets = chart.nodes().iter().map(|node| node.radius).collect::<Vec<_>>();
        assert!((halfway[1] - targets[1] * 0.5).abs() < 1e-3);

        chart.advance(1.5);
        for (sprite, node) in chart.sprites().zip(chart.nodes()) {
            assert_eq!(sprite.radius, node.radius);
        }
    }

    #[test]
    fn sprites_keep_damage_order_and_group_colors() {
        let chart = chart_with_years();
        let ids = chart.sprites().map(|sprite| sprite.id).collect::<Vec<_>>();
        assert_eq!(ids, ["2", "3", "1"]);

        for (sprite, node) in chart.sprites().zip(chart.nodes()) {
            assert_eq!(sprite.fill, fill_color(node.group));
            assert_eq!(sprite.stroke, rest_stroke(node.group));
            assert_eq!(sprite.stroke_width, 2.0);
        }
    }

    #[test]
    fn settled_layouts_order_columns_by_year() {
        let mut chart = chart_with_years();
        chart.select_by_year();
        while chart.advance(1.0 / 60.0) {}

        let x_of = |id: &str| {
            chart
                .nodes()
                .iter()
                .find(|node| node.id == id)
                .map(|node| node.position.x)
                .unwrap_or_default()
        };
        assert!(x_of("1") < x_of("2"));
    }

    #[test]
    fn tick_stops_moving_nodes_once_settled() {
        let mut chart = chart_with_years();
        while chart.tick() {}
        assert!(chart.is_settled());

        let before = chart.nodes().iter().map(|node| node.position).collect::<Vec<_>>();
        assert!(!chart.tick());
        let after = chart.nodes().iter().map(|node| node.position).collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
    }
}
