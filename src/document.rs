use kurbo::Point;

use crate::element::Element;

/// The in-memory canvas model: an ordered element sequence plus the
/// document-level attributes that survive every undo/redo.
///
/// Element order is paint order; later elements draw on top. The document
/// performs no I/O and cannot fail; loading and saving live at the session
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
    width: f64,
    height: f64,
}

impl Document {
    /// A blank document with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub fn from_parts(width: f64, height: f64, elements: Vec<Element>) -> Self {
        Self {
            elements,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element on top of the paint order.
    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove the element with the given id, returning it if present.
    pub fn remove(&mut self, id: usize) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    pub fn element(&self, id: usize) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub(crate) fn element_mut(&mut self, id: usize) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Topmost element under the pointer, if any. Scans back to front so the
    /// most recently painted element wins.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(p))
            .map(|e| e.id())
    }

    /// Replace the whole document with a history snapshot, dimensions
    /// included.
    pub fn restore(&mut self, snapshot: &Document) {
        *self = snapshot.clone();
    }

    /// Structural equality ignoring runtime element ids.
    pub fn same_content(&self, other: &Document) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.same_shape(b))
    }
}
