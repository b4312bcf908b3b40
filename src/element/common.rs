use std::sync::atomic::{AtomicUsize, Ordering};

/// Minimum half-width of the hit region around thin elements (lines, paths).
pub const HIT_PADDING: f64 = 4.0;

// Single static counter for all elements
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Allocate a unique runtime id for a new element.
///
/// Ids identify elements within one process only; they are not persisted and
/// are re-assigned on every parse.
pub fn next_element_id() -> usize {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst)
}

/// Style shared by every drawable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke: String,
    pub stroke_width: f64,
    /// Fill color, or "none". Freehand paths and lines are never filled.
    pub fill: String,
}

impl Style {
    pub fn new(stroke: impl Into<String>, stroke_width: f64, fill: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            fill: fill.into(),
        }
    }

    /// Hit padding for an element drawn with this style: at least
    /// [`HIT_PADDING`], widened for thick strokes.
    pub fn hit_pad(&self) -> f64 {
        (self.stroke_width / 2.0).max(HIT_PADDING)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new("#000000", 2.0, "none")
    }
}
