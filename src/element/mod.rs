use kurbo::{Point, Rect};

mod common;
pub(crate) mod path;
pub(crate) mod shape;

pub use common::{HIT_PADDING, Style, next_element_id};
pub use path::FreehandPath;
pub use shape::{CircleShape, LineShape, RectShape};

/// Closed sum of every drawable element kind in a canvas document.
///
/// Elements are created by a tool during a pointer-drag gesture and are
/// immutable once the gesture commits, except for removal. The drag-time
/// mutators (`push_point`, `drag_*`) are only called by the toolbar while a
/// gesture is in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Path(FreehandPath),
    Line(LineShape),
    Rect(RectShape),
    Circle(CircleShape),
}

impl Element {
    /// Runtime id, unique within the process. Not persisted.
    pub fn id(&self) -> usize {
        match self {
            Element::Path(e) => e.id,
            Element::Line(e) => e.id,
            Element::Rect(e) => e.id,
            Element::Circle(e) => e.id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Element::Path(_) => "path",
            Element::Line(_) => "line",
            Element::Rect(_) => "rect",
            Element::Circle(_) => "circle",
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Element::Path(e) => e.style(),
            Element::Line(e) => e.style(),
            Element::Rect(e) => e.style(),
            Element::Circle(e) => e.style(),
        }
    }

    /// Bounding rectangle of the element's geometry, without hit padding.
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Path(e) => e.bounds(),
            Element::Line(e) => e.bounds(),
            Element::Rect(e) => e.bounds(),
            Element::Circle(e) => e.bounds(),
        }
    }

    /// Test whether a pointer position lands on this element.
    pub fn hit_test(&self, p: Point) -> bool {
        match self {
            Element::Path(e) => e.hit_test(p),
            Element::Line(e) => e.hit_test(p),
            Element::Rect(e) => e.hit_test(p),
            Element::Circle(e) => e.hit_test(p),
        }
    }

    /// Structural equality ignoring runtime ids. This is the equality the
    /// persistence round-trip guarantees.
    pub fn same_shape(&self, other: &Element) -> bool {
        match (self, other) {
            (Element::Path(a), Element::Path(b)) => {
                a.points() == b.points() && a.style() == b.style()
            }
            (Element::Line(a), Element::Line(b)) => {
                a.start == b.start && a.end == b.end && a.style() == b.style()
            }
            (Element::Rect(a), Element::Rect(b)) => {
                a.rect == b.rect && a.style() == b.style()
            }
            (Element::Circle(a), Element::Circle(b)) => {
                a.center == b.center && a.radius == b.radius && a.style() == b.style()
            }
            _ => false,
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    /// Start a freehand path at the pointer-down position.
    pub fn begin_path(start: Point, style: Style) -> Element {
        Element::Path(FreehandPath::new(next_element_id(), start, style))
    }

    /// Start a line anchored at the pointer-down position.
    pub fn begin_line(start: Point, style: Style) -> Element {
        Element::Line(LineShape::new(next_element_id(), start, style))
    }

    /// Start a zero-size rectangle anchored at the pointer-down position.
    pub fn begin_rect(start: Point, style: Style) -> Element {
        Element::Rect(RectShape::new(next_element_id(), start, style))
    }

    /// Start a zero-radius circle centered at the pointer-down position.
    pub fn begin_circle(start: Point, style: Style) -> Element {
        Element::Circle(CircleShape::new(next_element_id(), start, style))
    }
}
