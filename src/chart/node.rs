use eframe::egui::{Vec2, vec2};
use rand::Rng;

use crate::loss::RawRecord;

use super::scale::RadiusScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Earthquake,
    Volcano,
    Other,
}

impl Group {
    pub const ALL: [Self; 3] = [Self::Earthquake, Self::Volcano, Self::Other];

    pub fn from_cause_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => Self::Earthquake,
            Some(6) => Self::Volcano,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Earthquake => "earthquake",
            Self::Volcano => "volcano",
            Self::Other => "other",
        }
    }
}

/// One bubble: derived attributes plus mutable simulation state.
#[derive(Clone, Debug)]
pub struct VisualNode {
    pub id: String,
    pub name: String,
    pub radius: f32,
    pub death: f64,
    pub value: f64,
    pub group: Group,
    pub year: String,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Builds one node per record, sorted by damage descending.
///
/// All radii come from a single scale over the dataset's maximum death count.
/// Initial positions are drawn from `rng` inside `[0, spawn.x) x [0, spawn.y)`.
pub fn create_nodes<R>(records: &[RawRecord], spawn: Vec2, rng: &mut R) -> Vec<VisualNode>
where
    R: Rng + ?Sized,
{
    let max_deaths = records
        .iter()
        .map(|record| record.deaths)
        .fold(0.0_f64, f64::max);
    let scale = RadiusScale::new(max_deaths);

    let mut nodes = records
        .iter()
        .map(|record| VisualNode {
            id: record.id.clone(),
            name: record.country.clone(),
            radius: scale.radius(record.deaths),
            death: record.deaths,
            value: record.damage_millions,
            group: Group::from_cause_code(record.cause_code),
            year: record.year.clone(),
            position: vec2(
                rng.r#gen::<f32>() * spawn.x,
                rng.r#gen::<f32>() * spawn.y,
            ),
            velocity: Vec2::ZERO,
        })
        .collect::<Vec<_>>();

    nodes.sort_by(|a, b| b.value.total_cmp(&a.value));
    nodes
}

#[cfg(test)]
pub(super) fn record(
    id: &str,
    deaths: f64,
    damage: f64,
    cause_code: Option<i64>,
    year: &str,
) -> RawRecord {
    RawRecord {
        id: id.to_owned(),
        country: format!("country-{id}"),
        deaths,
        damage_millions: damage,
        cause_code,
        year: year.to_owned(),
    }
}
