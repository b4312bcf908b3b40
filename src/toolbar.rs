//! The drawing toolbar: translates pointer and keyboard input into document
//! mutations and keeps the snapshot history consistent.
//!
//! All operations here are synchronous, in-memory, and infallible; anything
//! that can fail (load, save, mount) lives at the session boundary.

use kurbo::{Point, Rect};

use crate::config::Settings;
use crate::document::Document;
use crate::element::{Element, Style, factory};
use crate::history::History;

/// The available tools. Exactly one is active at a time; the active tool
/// decides how pointer and keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Pen,
    Line,
    Rect,
    Circle,
    Select,
    Eraser,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Line => "line",
            ToolKind::Rect => "rect",
            ToolKind::Circle => "circle",
            ToolKind::Select => "select",
            ToolKind::Eraser => "eraser",
        }
    }

    /// True for tools that construct a new element during a drag gesture.
    pub fn draws(&self) -> bool {
        matches!(
            self,
            ToolKind::Pen | ToolKind::Line | ToolKind::Rect | ToolKind::Circle
        )
    }
}

/// Toolbar state machine.
///
/// Owns the tool mode, the gesture in flight, the style settings, the
/// selection, and the history stack. Mutates a [`Document`] passed into each
/// operation; it never owns the document itself.
#[derive(Debug)]
pub struct Toolbar {
    active_tool: ToolKind,
    is_drawing: bool,
    /// Id of the element under construction while a drag is in flight.
    current: Option<usize>,
    /// Anchor of the drag gesture.
    start: Option<Point>,
    stroke_color: String,
    stroke_width: f64,
    fill_color: String,
    selected: Option<usize>,
    history: History,
    changed: bool,
}

impl Toolbar {
    /// A toolbar bound to a freshly loaded document. Seeds the history with
    /// the document's initial state.
    pub fn new(doc: &Document, settings: &Settings) -> Self {
        Self {
            active_tool: ToolKind::Pen,
            is_drawing: false,
            current: None,
            start: None,
            stroke_color: settings.default_stroke_color.clone(),
            stroke_width: settings.default_stroke_width,
            fill_color: settings.default_fill_color.clone(),
            selected: None,
            history: History::new(doc.clone()),
            changed: false,
        }
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.stroke_color = color.into();
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    pub fn set_fill_color(&mut self, color: impl Into<String>) {
        self.fill_color = color.into();
    }

    /// Switch the active tool. Leaving select mode clears the selection; no
    /// document mutation happens.
    pub fn select_tool(&mut self, tool: ToolKind) {
        if self.active_tool == ToolKind::Select && tool != ToolKind::Select {
            self.selected = None;
        }
        self.active_tool = tool;
    }

    /// Pointer press on the canvas.
    ///
    /// Select picks (or clears) the selection; Eraser removes the topmost hit
    /// element immediately; drawing tools start a gesture and append the
    /// partially constructed element to the document.
    pub fn pointer_down(&mut self, doc: &mut Document, p: Point) {
        match self.active_tool {
            ToolKind::Select => {
                self.selected = doc.hit_test(p);
            }
            ToolKind::Eraser => {
                if let Some(id) = doc.hit_test(p) {
                    doc.remove(id);
                    if self.selected == Some(id) {
                        self.selected = None;
                    }
                    self.push_history(doc);
                    self.changed = true;
                }
            }
            tool => {
                debug_assert!(tool.draws());
                self.selected = None;
                self.is_drawing = true;
                self.start = Some(p);
                let style = self.current_style(tool);
                let element = match tool {
                    ToolKind::Pen => factory::begin_path(p, style),
                    ToolKind::Line => factory::begin_line(p, style),
                    ToolKind::Rect => factory::begin_rect(p, style),
                    ToolKind::Circle => factory::begin_circle(p, style),
                    _ => unreachable!(),
                };
                self.current = Some(element.id());
                doc.add(element);
            }
        }
    }

    /// Pointer drag. Updates the in-flight element's geometry per tool
    /// semantics; a no-op unless a drawing gesture is active.
    pub fn pointer_move(&mut self, doc: &mut Document, p: Point) {
        if !self.is_drawing {
            return;
        }
        let (Some(id), Some(anchor)) = (self.current, self.start) else {
            return;
        };
        let Some(element) = doc.element_mut(id) else {
            return;
        };
        match element {
            Element::Path(path) => path.push_point(p),
            Element::Line(line) => line.drag_to(p),
            Element::Rect(rect) => rect.drag_to(anchor, p),
            Element::Circle(circle) => circle.drag_to(p),
        }
    }

    /// Pointer release: commit the gesture.
    ///
    /// A drag that never moved still commits its zero-size element and still
    /// pushes history; there is no minimum-size suppression.
    pub fn pointer_up(&mut self, doc: &mut Document) {
        if !self.is_drawing {
            return;
        }
        self.is_drawing = false;
        self.current = None;
        self.start = None;
        self.push_history(doc);
        self.changed = true;
    }

    /// Delete key: remove the selected element, if any.
    pub fn key_delete(&mut self, doc: &mut Document) {
        if let Some(id) = self.selected.take() {
            doc.remove(id);
            self.push_history(doc);
            self.changed = true;
        }
    }

    /// Restore the previous snapshot. A no-op at the oldest entry; never
    /// pushes a new one.
    pub fn undo(&mut self, doc: &mut Document) {
        if let Some(snapshot) = self.history.undo() {
            doc.restore(snapshot);
            self.selected = None;
            self.changed = true;
        }
    }

    /// Restore the next snapshot. A no-op at the newest entry.
    pub fn redo(&mut self, doc: &mut Document) {
        if let Some(snapshot) = self.history.redo() {
            doc.restore(snapshot);
            self.selected = None;
            self.changed = true;
        }
    }

    /// Record the document's current state after a committed mutation.
    pub fn push_history(&mut self, doc: &Document) {
        self.history.push(doc.clone());
    }

    /// Bounding-box overlay for the selection, inflated by the element's hit
    /// padding so thin elements stay visible.
    pub fn selection_bounds(&self, doc: &Document) -> Option<Rect> {
        let element = doc.element(self.selected?)?;
        let pad = element.style().hit_pad();
        Some(element.bounds().inflate(pad, pad))
    }

    /// Drain the document-changed flag. The session folds this into its
    /// dirty bit after every forwarded event.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    fn current_style(&self, tool: ToolKind) -> Style {
        // Paths and lines are never filled; shapes take the configured fill.
        let fill = match tool {
            ToolKind::Rect | ToolKind::Circle => self.fill_color.clone(),
            _ => "none".to_owned(),
        };
        Style::new(self.stroke_color.clone(), self.stroke_width, fill)
    }
}
