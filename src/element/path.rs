use kurbo::{Point, Rect};

use super::common::Style;

/// A freehand polyline accumulated from one pen drag gesture.
///
/// Rendered as an SVG `<path>` with `M x,y L x,y …` commands. Always has at
/// least one point (the pointer-down anchor).
#[derive(Debug, Clone, PartialEq)]
pub struct FreehandPath {
    pub(crate) id: usize,
    points: Vec<Point>,
    style: Style,
}

impl FreehandPath {
    pub fn new(id: usize, start: Point, style: Style) -> Self {
        Self {
            id,
            points: vec![start],
            style,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Append a segment to the pointer's current position. Used only while
    /// the gesture is in flight.
    pub fn push_point(&mut self, p: Point) {
        self.points.push(p);
    }

    /// The SVG path data string (`M x,y L x,y …`).
    pub fn path_data(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i == 0 {
                d.push_str(&format!("M {},{}", p.x, p.y));
            } else {
                d.push_str(&format!(" L {},{}", p.x, p.y));
            }
        }
        d
    }

    /// Rebuild a path from parsed path data points.
    pub fn from_points(id: usize, points: Vec<Point>, style: Style) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { id, points, style })
    }

    pub fn bounds(&self) -> Rect {
        let first = self.points[0];
        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(first, first), |r, p| {
                r.union(Rect::from_points(*p, *p))
            })
    }

    pub fn hit_test(&self, p: Point) -> bool {
        let pad = self.style.hit_pad();
        self.bounds().inflate(pad, pad).contains(p)
    }
}
