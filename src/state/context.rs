//! The editor context: the drawing, the tool settings and the pointer state,
//! driven by input from the window.
//!
//! Pointer positions arrive in device pixels and are converted to
//! device-independent units with the [`DpiScale`] fixed at creation. Every
//! handler returns true when the canvas needs to be repainted.

use egui::{PointerButton, Pos2};

use super::EditorState;
use crate::color::Color;
use crate::command::ColorChooser;
use crate::config::PaintConfig;
use crate::document::Document;
use crate::error::StateTransitionError;
use crate::input::DpiScale;
use crate::tools::{self, FillOutcome, Mode, Shape, StrokeWidth, ToolSettings, ToolbarButton};

#[derive(Debug)]
pub struct EditorContext {
    document: Document,
    settings: ToolSettings,
    state: EditorState,
    dpi: DpiScale,
}

impl EditorContext {
    pub fn new(settings: ToolSettings, dpi: DpiScale) -> Self {
        Self {
            document: Document::new(),
            settings,
            state: EditorState::Idle,
            dpi,
        }
    }

    /// Build a context from configuration.
    ///
    /// `detected_dpi` is used unless the configuration overrides it.
    pub fn from_config(config: &PaintConfig, detected_dpi: DpiScale) -> Self {
        let dpi = config.dpi_scale.map_or(detected_dpi, DpiScale::uniform);
        log::info!("Editor DPI scale {:?}", dpi);
        Self::new(config.tool_settings(), dpi)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn dpi(&self) -> DpiScale {
        self.dpi
    }

    /// Attempts to transition to a new state, validating the transition
    pub fn transition_to(&mut self, new_state: EditorState) -> Result<(), StateTransitionError> {
        if !self.state.can_transition_to(&new_state) {
            return Err(StateTransitionError::InvalidTransition {
                from: self.state.name(),
                to: new_state.name(),
            });
        }
        self.state = new_state;
        Ok(())
    }

    /// Ends any drag in progress
    pub fn return_to_idle(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Primary button pressed on the canvas.
    ///
    /// A press while a drag is still active means its release was missed: the
    /// old drag ends and the new press is handled as usual.
    pub fn pointer_down(&mut self, pixels: Pos2) -> bool {
        let pos = self.dpi.pixels_to_dips(pixels);
        let tool = self.settings.active_tool();

        let Some(element) = tool.on_pointer_down(pos, &self.settings, &mut self.document) else {
            self.return_to_idle();
            return true;
        };
        log::debug!("{} started element {} at {:?}", tool.name(), element, pos);

        let drag = EditorState::Dragging { element, anchor: pos };
        if let Err(err) = self.transition_to(drag) {
            log::warn!("{}, the release was missed", err);
            self.return_to_idle();
            self.state = drag;
        }
        true
    }

    /// Pointer moved. Only a drag with the primary button held changes anything.
    pub fn pointer_move(&mut self, pixels: Pos2, held_buttons: &[PointerButton]) -> bool {
        if !held_buttons.contains(&PointerButton::Primary) {
            return false;
        }
        let EditorState::Dragging { element, anchor } = self.state else {
            return false;
        };

        let pos = self.dpi.pixels_to_dips(pixels);
        let tool = self.settings.active_tool();
        match self.document.get_mut(element) {
            Some(target) => tool.on_pointer_move(target, anchor, pos),
            None => false,
        }
    }

    /// Primary button released: the dragged element is final
    pub fn pointer_up(&mut self) {
        if let Some(element) = self.state.active_element() {
            log::debug!("Finished element {}", element);
        }
        self.return_to_idle();
    }

    pub fn select_mode(&mut self, mode: Mode) {
        log::info!("Mode set to {:?}", mode);
        self.settings.mode = mode;
    }

    pub fn select_shape(&mut self, shape: Shape) {
        log::info!("Shape set to {:?}", shape);
        self.settings.shape = shape;
    }

    /// Apply the mode and shape a toolbar button stands for
    pub fn apply_toolbar(&mut self, button: ToolbarButton) {
        let (mode, shape) = button.selection();
        self.select_mode(mode);
        if let Some(shape) = shape {
            self.select_shape(shape);
        }
    }

    /// Check `width` in the width menu; only elements created later use it
    pub fn select_width(&mut self, width: StrokeWidth) {
        let previous = self.settings.width.select(width);
        log::info!("Stroke width {} -> {}", previous.value(), width.value());
    }

    pub fn set_brush_color(&mut self, color: Color) {
        self.settings.brush_color = color;
    }

    /// Ask `chooser` for a new brush color.
    ///
    /// The confirmed color has its red and blue channels swapped before it
    /// becomes the brush color. Returns false when the chooser was cancelled.
    pub fn choose_color(&mut self, chooser: &mut dyn ColorChooser) -> bool {
        match chooser.choose_color() {
            Some(chosen) => {
                let brush = chosen.swap_red_blue();
                log::info!("Brush color set to {:?}", brush);
                self.settings.brush_color = brush;
                true
            }
            None => {
                log::debug!("Color choice cancelled");
                false
            }
        }
    }

    /// Recolor the shapes under `pos` (device-independent units) with the
    /// brush color, or the background if there are none
    pub fn fill_area(&mut self, pos: Pos2) -> FillOutcome {
        tools::fill_area(&mut self.document, pos, self.settings.brush_color)
    }

    /// Remove every element and reset the background; tool settings stay
    pub fn clear_canvas(&mut self) {
        self.return_to_idle();
        self.document.clear();
    }
}
