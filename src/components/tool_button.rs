use crate::tools::{ToolSettings, ToolbarButton};

const BUTTON_SIZE: egui::Vec2 = egui::vec2(72.0, 24.0);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(33, 150, 243);

/// Toolbar button that stays highlighted while its tool is in use
pub struct ToolButton {
    pub button: ToolbarButton,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(button: ToolbarButton, settings: &ToolSettings) -> Self {
        Self {
            button,
            selected: button.is_selected(settings),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246)
            } else if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(50)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.button.label(),
                egui::FontId::proportional(14.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(rect, 4.0, egui::Stroke::new(2.0, ACCENT));
            }
        }

        response
    }
}
