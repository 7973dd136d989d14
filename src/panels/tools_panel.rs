use crate::PaintApp;
use crate::command::Command;
use crate::components::ToolButton;
use crate::tools::{StrokeWidth, ToolbarButton};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let mut commands = Vec::new();
    let mut open_color_dialog = false;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Width", |ui| {
                let selection = app.context().settings().width;
                for width in StrokeWidth::all() {
                    if ui.radio(selection.is_checked(width), width.value().to_string()).clicked() {
                        commands.push(Command::SelectWidth(width));
                        ui.close_menu();
                    }
                }
            });
        });

        ui.horizontal(|ui| {
            let settings = *app.context().settings();

            for button in [ToolbarButton::Rectangle, ToolbarButton::Ellipse] {
                if ToolButton::new(button, &settings).show(ui).clicked() {
                    commands.push(Command::Toolbar(button));
                }
            }
            if ui.button("Clean").clicked() {
                commands.push(Command::ClearCanvas);
            }
            if ToolButton::new(ToolbarButton::Pen, &settings).show(ui).clicked() {
                commands.push(Command::Toolbar(ToolbarButton::Pen));
            }
            if ui.button("Color").clicked() {
                open_color_dialog = true;
            }
            for button in [ToolbarButton::Eraser, ToolbarButton::Fill] {
                if ToolButton::new(button, &settings).show(ui).clicked() {
                    commands.push(Command::Toolbar(button));
                }
            }

            ui.separator();
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, settings.brush_color.to_color32());
            ui.label(format!("Width {}", settings.width.active().value()));
        });
    });

    for command in commands {
        log::info!("Command from UI: {}", command.name());
        app.execute_command(command);
    }
    if open_color_dialog {
        app.open_color_dialog();
    }
}
