use crate::color::Color;
use crate::element::{ElementKind, ElementType};
use crate::id_generator::{ElementId, IdGenerator};

/// The drawing: every element in creation order plus the background color.
///
/// Elements are only ever appended; ids come from a counter that keeps
/// counting across [`Document::clear`], so the sequence is always sorted by id.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<(ElementId, ElementType)>,
    ids: IdGenerator,
    background: Color,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            ids: IdGenerator::new(),
            background: Color::WHITE,
        }
    }

    /// Append an element and return the id assigned to it
    pub fn insert(&mut self, element: ElementType) -> ElementId {
        let id = self.ids.generate_id();
        log::debug!("Inserted {} with id {}", element.kind().name(), id);
        self.elements.push((id, element));
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementType> {
        self.position(id).map(|index| &self.elements[index].1)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementType> {
        match self.position(id) {
            Some(index) => Some(&mut self.elements[index].1),
            None => None,
        }
    }

    /// The most recently inserted element of `kind`, if any
    pub fn latest_of_kind(&mut self, kind: ElementKind) -> Option<(ElementId, &mut ElementType)> {
        self.elements
            .iter_mut()
            .rev()
            .find(|(_, element)| element.kind() == kind)
            .map(|(id, element)| (*id, element))
    }

    /// All elements of one kind in ascending id order
    pub fn elements_of_kind_mut(
        &mut self,
        kind: ElementKind,
    ) -> impl Iterator<Item = (ElementId, &mut ElementType)> {
        self.elements
            .iter_mut()
            .filter(move |(_, element)| element.kind() == kind)
            .map(|(id, element)| (*id, element))
    }

    /// Every element in ascending id order.
    ///
    /// Each call starts a fresh pass, so one is taken per paint.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (ElementId, &ElementType)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    /// Remove every element and reset the background to white.
    ///
    /// The id counter is left alone.
    pub fn clear(&mut self) {
        log::info!("Clearing {} elements", self.elements.len());
        self.elements.clear();
        self.background = Color::WHITE;
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// The id the next inserted element will receive
    pub fn next_id(&self) -> ElementId {
        self.ids.peek()
    }

    fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.binary_search_by_key(&id, |(id, _)| *id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use egui::Pos2;

    fn pos(x: f32, y: f32) -> Pos2 {
        Pos2::new(x, y)
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut doc = Document::new();
        assert_eq!(doc.insert(factory::create_ellipse(pos(0.0, 0.0), Color::RED, 1.0)), 0);
        assert_eq!(doc.insert(factory::create_pen(pos(0.0, 0.0), Color::RED, 1.0)), 1);
        assert_eq!(doc.insert(factory::create_eraser(pos(0.0, 0.0), 1.0)), 2);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.next_id(), 3);
    }

    #[test]
    fn test_latest_of_kind() {
        let mut doc = Document::new();
        doc.insert(factory::create_rectangle(pos(0.0, 0.0), Color::RED, 1.0));
        doc.insert(factory::create_ellipse(pos(0.0, 0.0), Color::RED, 1.0));
        doc.insert(factory::create_rectangle(pos(5.0, 5.0), Color::RED, 1.0));
        doc.insert(factory::create_pen(pos(0.0, 0.0), Color::RED, 1.0));

        let (id, latest) = doc.latest_of_kind(ElementKind::Rectangle).unwrap();
        assert_eq!(id, 2);
        assert_eq!(latest.as_rectangle().unwrap().edges(), [5.0, 5.0, 7.0, 7.0]);

        assert!(doc.latest_of_kind(ElementKind::Eraser).is_none());
    }

    #[test]
    fn test_get_mut_after_clear() {
        let mut doc = Document::new();
        let id = doc.insert(factory::create_ellipse(pos(0.0, 0.0), Color::RED, 1.0));
        doc.clear();
        assert!(doc.get_mut(id).is_none());
        assert!(doc.is_empty());
    }
}
