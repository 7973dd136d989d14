use egui::{Context, PointerButton, Pos2, Rect};

mod dpi;
mod router;

pub use dpi::DpiScale;
pub use router::route_event;

/// Input delivered to the editor by the window.
///
/// Pointer positions are in device pixels relative to the top left corner of
/// the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed on the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved (with or without buttons pressed)
    PointerMove {
        position: Pos2,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Primary button was released
    PointerUp,
    /// The canvas area changed
    Resize { area: Rect },
    /// The canvas has to be redrawn
    Repaint,
}

/// Handles converting raw egui input into [`InputEvent`]s.
///
/// Once the primary button goes down inside the canvas the pointer is
/// captured: moves and the release keep being reported even when the pointer
/// leaves the canvas, until the button is released.
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    captured: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            captured: false,
        }
    }

    /// Update the canvas rectangle, returning a resize event if it changed
    pub fn set_canvas_rect(&mut self, rect: Rect) -> Option<InputEvent> {
        if rect == self.canvas_rect {
            return None;
        }
        self.canvas_rect = rect;
        Some(InputEvent::Resize { area: rect })
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Canvas-relative device pixel position of a screen position in points
    pub(crate) fn to_device(&self, pos: Pos2, pixels_per_point: f32) -> Pos2 {
        ((pos - self.canvas_rect.min) * pixels_per_point).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// `canvas_hovered` is whether the canvas widget itself is under the
    /// pointer; a press on a menu or window floating over the canvas must not
    /// start a drag.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let pixels_per_point = ctx.pixels_per_point();

        ctx.input(|input| {
            if input.pointer.primary_pressed() {
                if let Some(pos) = input.pointer.interact_pos() {
                    if canvas_hovered && self.canvas_rect.contains(pos) {
                        self.captured = true;
                        events.push(InputEvent::PointerDown {
                            position: self.to_device(pos, pixels_per_point),
                        });
                    }
                }
            }

            if let Some(pos) = input.pointer.latest_pos() {
                if Some(pos) != self.last_pointer_pos && (self.captured || self.canvas_rect.contains(pos)) {
                    let held_buttons = [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle]
                        .into_iter()
                        .filter(|button| input.pointer.button_down(*button))
                        .collect();
                    events.push(InputEvent::PointerMove {
                        position: self.to_device(pos, pixels_per_point),
                        held_buttons,
                    });
                }
                self.last_pointer_pos = Some(pos);
            }

            if input.pointer.primary_released() && self.captured {
                self.captured = false;
                events.push(InputEvent::PointerUp);
            }
        });

        events
    }
}
