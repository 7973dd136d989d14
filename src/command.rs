use crate::color::Color;
use crate::state::EditorContext;
use crate::tools::{Mode, Shape, StrokeWidth, ToolbarButton};

/// The color picker dialog, or anything standing in for it
pub trait ColorChooser {
    /// Ask for a color. `None` means the choice was cancelled.
    fn choose_color(&mut self) -> Option<Color>;
}

impl<F> ColorChooser for F
where
    F: FnMut() -> Option<Color>,
{
    fn choose_color(&mut self) -> Option<Color> {
        self()
    }
}

/// Discrete commands issued from the toolbar and menus
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SelectShape(Shape),
    SelectMode(Mode),
    /// A toolbar button, which may select both a mode and a shape
    Toolbar(ToolbarButton),
    SelectWidth(StrokeWidth),
    ChooseColor,
    ClearCanvas,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectShape(_) => "Select Shape",
            Command::SelectMode(_) => "Select Mode",
            Command::Toolbar(_) => "Toolbar",
            Command::SelectWidth(_) => "Select Width",
            Command::ChooseColor => "Choose Color",
            Command::ClearCanvas => "Clear Canvas",
        }
    }

    /// Execute the command against the editor.
    ///
    /// `chooser` is only consulted by [`Command::ChooseColor`]. Returns true
    /// when the canvas needs to be repainted.
    pub fn execute(&self, context: &mut EditorContext, chooser: &mut dyn ColorChooser) -> bool {
        log::debug!("Executing {}", self.name());
        match *self {
            Command::SelectShape(shape) => context.select_shape(shape),
            Command::SelectMode(mode) => context.select_mode(mode),
            Command::Toolbar(button) => context.apply_toolbar(button),
            Command::SelectWidth(width) => context.select_width(width),
            Command::ChooseColor => {
                context.choose_color(chooser);
            }
            Command::ClearCanvas => {
                context.clear_canvas();
                return true;
            }
        }
        false
    }
}
