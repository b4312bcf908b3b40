use kurbo::{Point, Rect};

use super::common::Style;

/// A straight line between two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub(crate) id: usize,
    pub start: Point,
    pub end: Point,
    style: Style,
}

impl LineShape {
    /// A new line anchored at `start`; the end point follows the drag.
    pub fn new(id: usize, start: Point, style: Style) -> Self {
        Self {
            id,
            start,
            end: start,
            style,
        }
    }

    pub fn with_endpoints(id: usize, start: Point, end: Point, style: Style) -> Self {
        Self {
            id,
            start,
            end,
            style,
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn drag_to(&mut self, p: Point) {
        self.end = p;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    pub fn hit_test(&self, p: Point) -> bool {
        let pad = self.style.hit_pad();
        self.bounds().inflate(pad, pad).contains(p)
    }
}

/// An axis-aligned rectangle.
///
/// The stored rect is always normalized (origin at the component-wise min of
/// the drag anchor and the pointer).
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub(crate) id: usize,
    pub rect: Rect,
    style: Style,
}

impl RectShape {
    /// A zero-size rectangle anchored at `start`.
    pub fn new(id: usize, start: Point, style: Style) -> Self {
        Self {
            id,
            rect: Rect::from_points(start, start),
            style,
        }
    }

    pub fn with_rect(id: usize, rect: Rect, style: Style) -> Self {
        Self { id, rect, style }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Re-span the rectangle between the drag anchor and the pointer.
    /// `Rect::from_points` normalizes min/max, so dragging up-left works.
    pub fn drag_to(&mut self, anchor: Point, p: Point) {
        self.rect = Rect::from_points(anchor, p);
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    pub fn hit_test(&self, p: Point) -> bool {
        let pad = self.style.hit_pad();
        self.rect.inflate(pad, pad).contains(p)
    }
}

/// A circle defined by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub(crate) id: usize,
    pub center: Point,
    pub radius: f64,
    style: Style,
}

impl CircleShape {
    /// A zero-radius circle centered at the drag anchor.
    pub fn new(id: usize, center: Point, style: Style) -> Self {
        Self {
            id,
            center,
            radius: 0.0,
            style,
        }
    }

    pub fn with_radius(id: usize, center: Point, radius: f64, style: Style) -> Self {
        Self {
            id,
            center,
            radius,
            style,
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Radius follows the Euclidean distance from the center to the pointer.
    pub fn drag_to(&mut self, p: Point) {
        self.radius = self.center.distance(p);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    pub fn hit_test(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius + self.style.hit_pad()
    }
}
