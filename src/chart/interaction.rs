use eframe::egui::{Pos2, Vec2};
use tracing::info;

use crate::util::{format_number, format_thousands};

use super::BubbleChart;

/// Read-only view of a node for the tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetail {
    pub name: String,
    pub death: f64,
    pub value: f64,
    pub year: String,
}

impl NodeDetail {
    pub fn tooltip_content(&self) -> String {
        format!(
            "Country name: {}\nLife Loss (persons): {}\nEconomy Loss ($M): ${}\nYear: {}",
            self.name,
            format_number(self.death),
            format_thousands(self.value),
            self.year
        )
    }
}

pub trait Tooltip {
    fn show(&mut self, content: &str, pointer: Pos2);
    fn hide(&mut self);
}

impl BubbleChart {
    pub fn detail(&self, index: usize) -> Option<NodeDetail> {
        self.nodes.get(index).map(|node| NodeDetail {
            name: node.name.clone(),
            death: node.death,
            value: node.value,
            year: node.year.clone(),
        })
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Topmost node whose displayed circle contains `point` (chart space).
    ///
    /// Later nodes are drawn over earlier ones, so the scan runs in reverse.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.nodes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, node)| (node.position - point).length() <= self.display_radius(node))
            .map(|(index, _)| index)
    }

    pub fn pointer_enter(&mut self, index: usize, pointer: Pos2, tooltip: &mut impl Tooltip) {
        let Some(detail) = self.detail(index) else {
            return;
        };

        self.highlighted = Some(index);
        tooltip.show(&detail.tooltip_content(), pointer);
    }

    pub fn pointer_leave(&mut self, tooltip: &mut impl Tooltip) {
        if self.highlighted.take().is_some() {
            tooltip.hide();
        }
    }

    /// Routes a hover sample to enter/leave transitions.
    ///
    /// Staying on the same node moves the tooltip to the new pointer position.
    pub fn update_hover(
        &mut self,
        hovered: Option<usize>,
        pointer: Pos2,
        tooltip: &mut impl Tooltip,
    ) {
        if hovered != self.highlighted {
            self.pointer_leave(tooltip);
        }

        if let Some(index) = hovered {
            self.pointer_enter(index, pointer, tooltip);
        }
    }

    pub fn click(&self, index: usize) {
        if let Some(node) = self.nodes.get(index) {
            info!(
                id = %node.id,
                country = %node.name,
                deaths = node.death,
                damage_millions = node.value,
                group = node.group.label(),
                year = %node.year,
                x = node.position.x,
                y = node.position.y,
                "bubble clicked"
            );
        }
    }
}
