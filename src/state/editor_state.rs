//! Pointer state of the editor.
//!
//! A press on the canvas creates an element and starts a drag on it; the
//! release ends the drag. Only the element being dragged is ever mutated by
//! pointer movement.
//!
//! ```text
//! ┌──────────┐  pointer down   ┌────────────┐
//! │          ├─────────────────►            │
//! │   Idle   │                 │  Dragging  │
//! │          ◄─────────────────┤            │
//! └──────────┘  pointer up     └────────────┘
//!               clear canvas
//! ```

use egui::Pos2;

use crate::id_generator::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// No drag in progress
    #[default]
    Idle,
    /// The primary button went down on the canvas and created `element`
    Dragging {
        element: ElementId,
        /// Press position in device-independent units
        anchor: Pos2,
    },
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            (EditorState::Idle, _) => true,
            (EditorState::Dragging { .. }, EditorState::Idle) => true,
            // A drag has to end before the next one starts
            (EditorState::Dragging { .. }, EditorState::Dragging { .. }) => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Dragging { .. } => "Dragging",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::Dragging { .. })
    }

    /// The element being dragged, if any
    pub fn active_element(&self) -> Option<ElementId> {
        match self {
            EditorState::Dragging { element, .. } => Some(*element),
            EditorState::Idle => None,
        }
    }
}
