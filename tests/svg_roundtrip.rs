use inkline::document::Document;
use inkline::element::{
    CircleShape, Element, FreehandPath, LineShape, RectShape, Style, next_element_id,
};
use inkline::svg;
use kurbo::{Point, Rect};

fn mixed_document() -> Document {
    let ink = Style::new("#ff0000", 3.0, "none");
    let filled = Style::new("#0000ff", 1.5, "#ffff00");

    let mut doc = Document::new(800.0, 600.0);
    doc.add(Element::Path(
        FreehandPath::from_points(
            next_element_id(),
            vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(20.0, 20.0),
            ],
            ink.clone(),
        )
        .unwrap(),
    ));
    doc.add(Element::Line(LineShape::with_endpoints(
        next_element_id(),
        Point::new(0.0, 0.0),
        Point::new(100.0, 50.0),
        ink,
    )));
    doc.add(Element::Rect(RectShape::with_rect(
        next_element_id(),
        Rect::new(50.0, 50.0, 100.0, 100.0),
        filled.clone(),
    )));
    doc.add(Element::Circle(CircleShape::with_radius(
        next_element_id(),
        Point::new(200.0, 200.0),
        25.5,
        filled,
    )));
    doc
}

#[test]
fn mixed_document_survives_a_round_trip() {
    let doc = mixed_document();
    let markup = svg::serialize(&doc);
    let reparsed = svg::parse(&markup).unwrap();

    assert!(reparsed.same_content(&doc));
}

#[test]
fn serialized_markup_carries_the_fixed_header() {
    let markup = svg::serialize(&Document::new(800.0, 600.0));

    assert!(markup.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(markup.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(markup.contains("width=\"800\""));
    assert!(markup.contains("height=\"600\""));
    assert!(markup.contains("viewBox=\"0 0 800 600\""));
    assert!(markup.trim_end().ends_with("</svg>"));
}

#[test]
fn blank_document_round_trips_empty() {
    let doc = Document::new(640.0, 480.0);
    let reparsed = svg::parse(&svg::serialize(&doc)).unwrap();

    assert!(reparsed.is_empty());
    assert_eq!(reparsed.width(), 640.0);
    assert_eq!(reparsed.height(), 480.0);
}

#[test]
fn paint_order_is_preserved() {
    let doc = mixed_document();
    let reparsed = svg::parse(&svg::serialize(&doc)).unwrap();

    let kinds: Vec<_> = reparsed.elements().iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, ["path", "line", "rect", "circle"]);
}

#[test]
fn styles_survive_a_round_trip() {
    let doc = mixed_document();
    let reparsed = svg::parse(&svg::serialize(&doc)).unwrap();

    let rect = &reparsed.elements()[2];
    assert_eq!(rect.style().stroke, "#0000ff");
    assert_eq!(rect.style().stroke_width, 1.5);
    assert_eq!(rect.style().fill, "#ffff00");

    // Paths are never filled, whatever the configured fill.
    let path = &reparsed.elements()[0];
    assert_eq!(path.style().fill, "none");
}

#[test]
fn saving_a_reparsed_document_is_stable() {
    // Save-after-load with no edits must reproduce a structurally equal
    // document; here the markup even stabilizes after one round trip.
    let first = svg::serialize(&mixed_document());
    let second = svg::serialize(&svg::parse(&first).unwrap());
    assert_eq!(first, second);
}
