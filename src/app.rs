use egui::{Color32, LayerId, Rect, ViewportCommand};

use crate::color::Color;
use crate::command::Command;
use crate::config::PaintConfig;
use crate::input::{DpiScale, InputEvent, InputHandler, route_event};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::EditorContext;
use crate::surface::EguiSurfaceFactory;

/// The paint window: a toolbar on top and the canvas below it
pub struct PaintApp {
    context: EditorContext,
    renderer: Renderer<EguiSurfaceFactory>,
    input: InputHandler,
    /// Last color confirmed in the color dialog; the dialog opens with it
    chooser_color: Color,
    /// Color being edited while the color dialog is open
    color_dialog: Option<Color32>,
    show_exit_confirm: bool,
    allow_close: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> Self {
        let ctx = &cc.egui_ctx;
        let context = EditorContext::from_config(&config, DpiScale::uniform(ctx.pixels_per_point()));
        let factory = EguiSurfaceFactory::new(ctx.clone(), LayerId::background(), context.dpi());

        Self {
            context,
            renderer: Renderer::new(factory, Rect::NOTHING),
            input: InputHandler::new(Rect::NOTHING),
            chooser_color: config.chooser_color,
            color_dialog: None,
            show_exit_confirm: false,
            allow_close: false,
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    /// Execute a toolbar or menu command
    pub fn execute_command(&mut self, command: Command) {
        // Toolbar commands never consult the chooser; the dialog goes through
        // `finish_color_dialog`
        let mut no_choice = || None::<Color>;
        command.execute(&mut self.context, &mut no_choice);
    }

    pub fn open_color_dialog(&mut self) {
        if self.color_dialog.is_none() {
            self.color_dialog = Some(self.chooser_color.to_color32());
        }
    }

    fn is_modal_open(&self) -> bool {
        self.color_dialog.is_some() || self.show_exit_confirm
    }

    /// Feed this frame's pointer input to the editor and paint the canvas.
    ///
    /// `canvas_hovered` comes from the canvas widget's response, so presses on
    /// menus or windows above the canvas are not treated as drawing.
    pub fn handle_canvas(&mut self, ctx: &egui::Context, canvas_rect: Rect, canvas_hovered: bool) {
        let mut events: Vec<InputEvent> = self.input.set_canvas_rect(canvas_rect).into_iter().collect();
        if !self.is_modal_open() {
            events.extend(self.input.process_input(ctx, canvas_hovered));
        }
        events.push(InputEvent::Repaint);

        for event in &events {
            if route_event(event, &mut self.context, &mut self.renderer) {
                ctx.request_repaint();
            }
        }
    }

    fn finish_color_dialog(&mut self, choice: Option<Color>) {
        self.color_dialog = None;
        if let Some(color) = choice {
            self.chooser_color = color;
        }
        let mut chooser = move || choice;
        Command::ChooseColor.execute(&mut self.context, &mut chooser);
    }

    fn show_color_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut color) = self.color_dialog else {
            return;
        };

        let mut choice = None;
        egui::Window::new("Color")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(ui, &mut color, egui::color_picker::Alpha::Opaque);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        choice = Some(Some(Color::from_color32(color)));
                    }
                    if ui.button("Cancel").clicked() {
                        choice = Some(None);
                    }
                });
            });

        match choice {
            Some(choice) => self.finish_color_dialog(choice),
            None => self.color_dialog = Some(color),
        }
    }

    fn confirm_exit(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.allow_close {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            self.show_exit_confirm = true;
        }
        if !self.show_exit_confirm {
            return;
        }

        egui::Window::new("Exit")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to exit?");
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        log::info!("Exit confirmed");
                        self.allow_close = true;
                        ctx.send_viewport_cmd(ViewportCommand::Close);
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_exit_confirm = false;
                    }
                });
            });
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.show_color_dialog(ctx);
        self.confirm_exit(ctx);
    }
}
