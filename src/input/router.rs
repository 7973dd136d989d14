use super::InputEvent;
use crate::renderer::Renderer;
use crate::state::EditorContext;
use crate::surface::SurfaceFactory;

/// Routes an input event to the editor or the renderer.
///
/// Returns true when the canvas needs to be repainted afterwards.
pub fn route_event<F: SurfaceFactory>(
    event: &InputEvent,
    context: &mut EditorContext,
    renderer: &mut Renderer<F>,
) -> bool {
    match event {
        InputEvent::PointerDown { position } => context.pointer_down(*position),
        InputEvent::PointerMove {
            position,
            held_buttons,
        } => context.pointer_move(*position, held_buttons),
        InputEvent::PointerUp => {
            context.pointer_up();
            false
        }
        InputEvent::Resize { area } => renderer.resize(*area),
        // A failed frame asks for another paint, which retries the surface
        InputEvent::Repaint => renderer.paint(context.document()).is_err(),
    }
}
