//! SVG persistence for canvas documents.
//!
//! Serialization is a pure function from [`Document`] to markup; parsing is a
//! forward string scan over the four recognized child tags so paint order is
//! preserved. Unknown tags are skipped. Saving immediately after loading
//! reproduces a structurally identical document (element kinds, geometry,
//! styles, dimensions); byte-identical output is not guaranteed.

use kurbo::{Point, Rect};

use crate::document::Document;
use crate::element::{
    CircleShape, Element, FreehandPath, LineShape, RectShape, Style, next_element_id,
};
use crate::error::{EditorError, Result};

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize a document to SVG markup with the fixed declaration header.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str(XML_HEADER);
    out.push('\n');
    out.push_str(&format!(
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        SVG_NS,
        doc.width(),
        doc.height(),
        doc.width(),
        doc.height()
    ));
    for element in doc.elements() {
        out.push_str("  ");
        out.push_str(&element_markup(element));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

fn element_markup(element: &Element) -> String {
    let style = element.style();
    match element {
        Element::Path(path) => format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            path.path_data(),
            style.stroke,
            style.stroke_width
        ),
        Element::Line(line) => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            line.start.x, line.start.y, line.end.x, line.end.y, style.stroke, style.stroke_width
        ),
        Element::Rect(rect) => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            rect.rect.x0,
            rect.rect.y0,
            rect.rect.width(),
            rect.rect.height(),
            style.fill,
            style.stroke,
            style.stroke_width
        ),
        Element::Circle(circle) => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            circle.center.x,
            circle.center.y,
            circle.radius,
            style.fill,
            style.stroke,
            style.stroke_width
        ),
    }
}

/// Parse SVG markup back into a document.
///
/// Fails with [`EditorError::InvalidFormat`] when the `<svg>` root or its
/// dimensions are missing, or when a recognized child tag carries malformed
/// geometry. Child tags other than path/line/rect/circle are ignored.
pub fn parse(content: &str) -> Result<Document> {
    let root_start = content
        .find("<svg")
        .ok_or_else(|| EditorError::InvalidFormat("missing <svg> root".into()))?;
    let root_end = content[root_start..]
        .find('>')
        .map(|i| root_start + i)
        .ok_or_else(|| EditorError::InvalidFormat("unterminated <svg> tag".into()))?;
    let root_tag = &content[root_start..root_end];

    let (width, height) = dimensions(root_tag)?;

    let body_end = content
        .rfind("</svg>")
        .ok_or_else(|| EditorError::InvalidFormat("missing </svg>".into()))?;
    if body_end < root_end {
        return Err(EditorError::InvalidFormat("missing </svg>".into()));
    }
    let body = &content[root_end + 1..body_end];

    let mut elements = Vec::new();
    let mut pos = 0;
    while let Some(open) = body[pos..].find('<') {
        let tag_start = pos + open;
        let rest = &body[tag_start..];
        let close = rest
            .find('>')
            .ok_or_else(|| EditorError::InvalidFormat("unterminated tag".into()))?;
        let tag = &rest[..close];
        if let Some(element) = parse_element(tag)? {
            elements.push(element);
        }
        pos = tag_start + close + 1;
    }

    Ok(Document::from_parts(width, height, elements))
}

fn dimensions(root_tag: &str) -> Result<(f64, f64)> {
    if let (Some(w), Some(h)) = (attr_f64(root_tag, "width"), attr_f64(root_tag, "height")) {
        return Ok((w, h));
    }
    // Fall back to the viewBox when explicit dimensions are absent.
    if let Some(view_box) = attr_str(root_tag, "viewBox") {
        let parts: Vec<f64> = view_box
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect();
        if parts.len() == 4 {
            return Ok((parts[2], parts[3]));
        }
    }
    Err(EditorError::InvalidFormat(
        "svg root has no usable dimensions".into(),
    ))
}

fn parse_element(tag: &str) -> Result<Option<Element>> {
    let style = parse_style(tag);
    if tag.starts_with("<path") {
        let d = attr_str(tag, "d")
            .ok_or_else(|| EditorError::InvalidFormat("<path> without d attribute".into()))?;
        let points = parse_path_data(d)?;
        let path = FreehandPath::from_points(next_element_id(), points, style)
            .ok_or_else(|| EditorError::InvalidFormat("empty path data".into()))?;
        Ok(Some(Element::Path(path)))
    } else if tag.starts_with("<line") {
        let x1 = attr_f64(tag, "x1").unwrap_or(0.0);
        let y1 = attr_f64(tag, "y1").unwrap_or(0.0);
        let x2 = attr_f64(tag, "x2").unwrap_or(0.0);
        let y2 = attr_f64(tag, "y2").unwrap_or(0.0);
        Ok(Some(Element::Line(LineShape::with_endpoints(
            next_element_id(),
            Point::new(x1, y1),
            Point::new(x2, y2),
            style,
        ))))
    } else if tag.starts_with("<rect") {
        let x = attr_f64(tag, "x").unwrap_or(0.0);
        let y = attr_f64(tag, "y").unwrap_or(0.0);
        let width = attr_f64(tag, "width").unwrap_or(0.0);
        let height = attr_f64(tag, "height").unwrap_or(0.0);
        Ok(Some(Element::Rect(RectShape::with_rect(
            next_element_id(),
            Rect::new(x, y, x + width, y + height),
            style,
        ))))
    } else if tag.starts_with("<circle") {
        let cx = attr_f64(tag, "cx").unwrap_or(0.0);
        let cy = attr_f64(tag, "cy").unwrap_or(0.0);
        let r = attr_f64(tag, "r").unwrap_or(0.0);
        Ok(Some(Element::Circle(CircleShape::with_radius(
            next_element_id(),
            Point::new(cx, cy),
            r,
            style,
        ))))
    } else {
        Ok(None)
    }
}

fn parse_style(tag: &str) -> Style {
    let stroke = attr_str(tag, "stroke").unwrap_or("#000000");
    let stroke_width = attr_f64(tag, "stroke-width").unwrap_or(2.0);
    let fill = attr_str(tag, "fill").unwrap_or("none");
    Style::new(stroke, stroke_width, fill)
}

/// Parse `M x,y L x,y …` path data as written by [`FreehandPath::path_data`].
/// Tolerates commands glued to their coordinates (`M10,10`).
fn parse_path_data(d: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for token in d.split_whitespace() {
        let token = token.trim_start_matches(['M', 'L', 'm', 'l']);
        if token.is_empty() {
            continue;
        }
        let (x, y) = token
            .split_once(',')
            .ok_or_else(|| EditorError::InvalidFormat(format!("bad path token: {token}")))?;
        let x: f64 = x
            .parse()
            .map_err(|_| EditorError::InvalidFormat(format!("bad path coordinate: {x}")))?;
        let y: f64 = y
            .parse()
            .map_err(|_| EditorError::InvalidFormat(format!("bad path coordinate: {y}")))?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn attr_str<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let pattern = format!("{attr}=\"");
    let mut search = 0;
    while let Some(found) = tag[search..].find(&pattern) {
        let at = search + found;
        // Attribute names start after whitespace; without this check "width"
        // would match inside "stroke-width".
        if tag[..at].ends_with(|c: char| c.is_whitespace()) {
            let start = at + pattern.len();
            let end = tag[start..].find('"')?;
            return Some(&tag[start..start + end]);
        }
        search = at + pattern.len();
    }
    None
}

fn attr_f64(tag: &str, attr: &str) -> Option<f64> {
    attr_str(tag, attr).and_then(|s| s.parse().ok())
}
