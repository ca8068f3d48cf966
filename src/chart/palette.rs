use eframe::egui::Color32;

use super::node::Group;

pub const HIGHLIGHT_STROKE: Color32 = Color32::BLACK;
pub const STROKE_WIDTH: f32 = 2.0;

const DARKER_FACTOR: f32 = 0.7;

pub fn fill_color(group: Group) -> Color32 {
    match group {
        Group::Earthquake => Color32::from_rgb(0xEF, 0x45, 0x81),
        Group::Volcano => Color32::from_rgb(0xF1, 0xF1, 0xF2),
        Group::Other => Color32::from_rgb(0xF2, 0x7C, 0x21),
    }
}

pub fn darker(color: Color32) -> Color32 {
    let scale = |channel: u8| (channel as f32 * DARKER_FACTOR).round() as u8;
    Color32::from_rgba_unmultiplied(
        scale(color.r()),
        scale(color.g()),
        scale(color.b()),
        color.a(),
    )
}

pub fn rest_stroke(group: Group) -> Color32 {
    darker(fill_color(group))
}
