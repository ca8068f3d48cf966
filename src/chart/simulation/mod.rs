mod forces;
mod quadtree;

use eframe::egui::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::node::VisualNode;
use crate::config::ChartConfig;
use forces::{Axis, ChargeParams, accumulate_charge_for_node};
pub use forces::{Anchor, PositionForce};
use quadtree::QuadNode;

pub const ALPHA_MAX: f32 = 1.0;
const ALPHA_MIN: f32 = 0.001;
const ALPHA_TARGET: f32 = 0.0;
const SETTLE_TICKS: f32 = 300.0;
const DISTANCE_MIN: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Settled,
}

#[derive(Default)]
struct PhysicsScratch {
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    charges: Vec<f32>,
}

/// Damped position relaxation with decaying heat.
///
/// Each tick pulls nodes toward the x and y anchors, pushes them apart with a
/// charge of `-radius^2 * strength`, then integrates `v *= 1 - velocity_decay;
/// p += v`. Heat (`alpha`) decays geometrically toward zero and the engine
/// settles once it drops below `ALPHA_MIN`.
pub struct Simulation {
    alpha: f32,
    alpha_decay: f32,
    velocity_retention: f32,
    charge_strength: f32,
    theta_sq: f32,
    force_x: PositionForce,
    force_y: PositionForce,
    state: SimulationState,
    ticks: u64,
    rng: StdRng,
    scratch: PhysicsScratch,
}

impl Simulation {
    pub fn new(config: &ChartConfig, center: Vec2, seed: u64) -> Self {
        Self {
            alpha: ALPHA_MAX,
            alpha_decay: 1.0 - ALPHA_MIN.powf(1.0 / SETTLE_TICKS),
            velocity_retention: (1.0 - config.velocity_decay).clamp(0.0, 1.0),
            charge_strength: config.force_strength,
            theta_sq: config.theta * config.theta,
            force_x: PositionForce {
                axis: Axis::X,
                strength: config.force_strength,
                anchor: Anchor::Shared(center.x),
            },
            force_y: PositionForce {
                axis: Axis::Y,
                strength: config.force_strength,
                anchor: Anchor::Shared(center.y),
            },
            state: SimulationState::Settled,
            ticks: 0,
            rng: StdRng::seed_from_u64(seed),
            scratch: PhysicsScratch::default(),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn x_anchor(&self) -> &Anchor {
        self.force_x.anchor()
    }

    pub fn y_anchor(&self) -> &Anchor {
        self.force_y.anchor()
    }

    pub fn set_x_anchor(&mut self, anchor: Anchor) {
        self.force_x.anchor = anchor;
    }

    /// Resets heat to its maximum and resumes stepping.
    pub fn restart(&mut self) {
        self.alpha = ALPHA_MAX;
        self.ticks = 0;
        self.state = SimulationState::Running;
    }

    /// One step of the frame loop. Returns whether the engine is still running.
    pub fn step(&mut self, nodes: &mut [VisualNode]) -> bool {
        if self.state == SimulationState::Settled {
            return false;
        }

        self.tick(nodes);
        if self.alpha < ALPHA_MIN {
            self.state = SimulationState::Settled;
            debug!(ticks = self.ticks, "layout settled");
        }

        self.is_running()
    }

    /// Integrates one tick regardless of state.
    pub fn tick(&mut self, nodes: &mut [VisualNode]) {
        self.alpha += (ALPHA_TARGET - self.alpha) * self.alpha_decay;
        self.ticks += 1;
        let alpha = self.alpha;

        let scratch = &mut self.scratch;
        scratch.positions.clear();
        scratch.velocities.clear();
        scratch.charges.clear();
        for node in nodes.iter() {
            scratch.positions.push(node.position);
            scratch.velocities.push(node.velocity);
            scratch
                .charges
                .push(-(node.radius * node.radius) * self.charge_strength);
        }

        self.force_x
            .apply(&scratch.positions, &mut scratch.velocities, alpha);
        self.force_y
            .apply(&scratch.positions, &mut scratch.velocities, alpha);

        if let Some(quadtree) = QuadNode::build(&scratch.positions, &scratch.charges) {
            let params = ChargeParams {
                alpha,
                theta_sq: self.theta_sq,
                distance_min_sq: DISTANCE_MIN * DISTANCE_MIN,
            };
            for (index, velocity) in scratch.velocities.iter_mut().enumerate() {
                accumulate_charge_for_node(
                    &quadtree,
                    index,
                    &scratch.positions,
                    &scratch.charges,
                    params,
                    &mut self.rng,
                    velocity,
                );
            }
        }

        for (node, velocity) in nodes.iter_mut().zip(&scratch.velocities) {
            node.velocity = *velocity * self.velocity_retention;
            node.position += node.velocity;
        }
    }
}
