use eframe::egui::{Sense, Stroke, Ui, vec2};

use crate::chart::{DisplayMode, Group, fill_color, rest_stroke};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_mode_buttons(&mut self, ui: &mut Ui) {
        for mode in DisplayMode::ALL {
            let mut active = self.chart.mode();
            let clicked = ui
                .selectable_value(&mut active, mode, mode.label())
                .on_hover_text(match mode {
                    DisplayMode::Grouped => "Gather every bubble in one cluster.",
                    DisplayMode::ByYear => "Split bubbles into one column per year.",
                })
                .clicked();

            if clicked {
                match mode {
                    DisplayMode::Grouped => self.chart.select_grouped(),
                    DisplayMode::ByYear => self.chart.select_by_year(),
                }
            }
        }
    }

    pub(in crate::app) fn draw_legend(&self, ui: &mut Ui) {
        for group in Group::ALL {
            let (rect, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
            ui.painter().circle(
                rect.center(),
                6.0,
                fill_color(group),
                Stroke::new(1.5, rest_stroke(group)),
            );
            ui.label(group.label());
        }
    }
}
