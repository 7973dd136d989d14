/// Identifier of an element in a [`crate::Document`]
pub type ElementId = usize;

/// Hands out element ids in creation order, starting at 0.
///
/// Ids are never reused, even after the document is cleared.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    next: ElementId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_id(&mut self) -> ElementId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to `generate_id` will return
    pub fn peek(&self) -> ElementId {
        self.next
    }
}
