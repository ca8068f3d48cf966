use eframe::egui::Vec2;
use rand::Rng;
use rand::rngs::StdRng;

use super::quadtree::QuadNode;

/// Target coordinate of a positioning force.
#[derive(Clone, Debug, PartialEq)]
pub enum Anchor {
    /// Every node is pulled toward the same coordinate.
    Shared(f32),
    /// Node `i` is pulled toward `targets[i]`.
    PerNode(Vec<f32>),
}

impl Anchor {
    pub fn target(&self, index: usize) -> Option<f32> {
        match self {
            Self::Shared(target) => Some(*target),
            Self::PerNode(targets) => targets.get(index).copied(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Axis {
    X,
    Y,
}

/// Spring-like pull along one axis: `v += (target - p) * strength * alpha`.
#[derive(Clone, Debug)]
pub struct PositionForce {
    pub(super) axis: Axis,
    pub(super) strength: f32,
    pub(super) anchor: Anchor,
}

impl PositionForce {
    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    pub(super) fn apply(&self, positions: &[Vec2], velocities: &mut [Vec2], alpha: f32) {
        let scale = self.strength * alpha;
        for (index, (position, velocity)) in positions.iter().zip(velocities.iter_mut()).enumerate()
        {
            let Some(target) = self.anchor.target(index) else {
                continue;
            };

            match self.axis {
                Axis::X => velocity.x += (target - position.x) * scale,
                Axis::Y => velocity.y += (target - position.y) * scale,
            }
        }
    }
}

#[derive(Clone, Copy)]
pub(super) struct ChargeParams {
    pub(super) alpha: f32,
    pub(super) theta_sq: f32,
    pub(super) distance_min_sq: f32,
}

fn jiggle(rng: &mut StdRng) -> f32 {
    (rng.r#gen::<f32>() - 0.5) * 1e-6
}

fn charge_impulse(mut delta: Vec2, charge: f32, params: ChargeParams, rng: &mut StdRng) -> Vec2 {
    let mut distance_sq = delta.length_sq();
    if delta.x == 0.0 {
        delta.x = jiggle(rng);
        distance_sq += delta.x * delta.x;
    }
    if delta.y == 0.0 {
        delta.y = jiggle(rng);
        distance_sq += delta.y * delta.y;
    }
    if distance_sq < params.distance_min_sq {
        distance_sq = (params.distance_min_sq * distance_sq).sqrt();
    }

    delta * (charge * params.alpha / distance_sq)
}

/// Adds the many-body impulse acting on `index` to `velocity`.
///
/// A cell is treated as a single charge when the point lies outside it and
/// `side^2 / theta^2 < distance^2`; otherwise its points or children are
/// visited individually. Negative charges push apart.
pub(super) fn accumulate_charge_for_node(
    node: &QuadNode,
    index: usize,
    positions: &[Vec2],
    charges: &[f32],
    params: ChargeParams,
    rng: &mut StdRng,
    velocity: &mut Vec2,
) {
    if node.charge == 0.0 {
        return;
    }

    let point = positions[index];
    let delta = node.center_of_charge - point;
    let side = node.bounds.side_length();
    let can_approximate =
        !node.bounds.contains(point) && (side * side / params.theta_sq) < delta.length_sq();

    if can_approximate {
        *velocity += charge_impulse(delta, node.charge, params, rng);
        return;
    }

    if node.is_leaf() {
        for &other_index in &node.indices {
            if other_index == index {
                continue;
            }
            *velocity += charge_impulse(
                positions[other_index] - point,
                charges[other_index],
                params,
                rng,
            );
        }
        return;
    }

    for child in node.children.iter().flatten() {
        accumulate_charge_for_node(child, index, positions, charges, params, rng, velocity);
    }
}
