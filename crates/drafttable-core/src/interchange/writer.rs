//! Interchange export.

use crate::shapes::{Circle, Element, Line, Rectangle, Shape};
use std::fmt::Write;

const PREAMBLE: &str = "0\nSECTION\n2\nHEADER\n0\nENDSEC\n\
0\nSECTION\n2\nTABLES\n0\nENDSEC\n\
0\nSECTION\n2\nBLOCKS\n0\nENDSEC\n\
0\nSECTION\n2\nENTITIES\n";

const TRAILER: &str = "0\nENDSEC\n0\nEOF";

/// Serialize elements to interchange text.
///
/// Zero-radius circles, zero-extent rectangles and polylines are left out.
/// The output has no trailing newline.
pub fn export(elements: &[Element]) -> String {
    let mut out = String::from(PREAMBLE);
    let mut written = 0usize;
    for el in elements {
        let emitted = match &el.shape {
            Shape::Line(line) => write_line(&mut out, &el.layer, line),
            Shape::Circle(circle) => write_circle(&mut out, &el.layer, circle),
            Shape::Rectangle(rect) => write_rectangle(&mut out, &el.layer, rect),
            Shape::Polyline(_) => false,
        };
        if emitted {
            written += 1;
        } else {
            log::debug!("export skipped {} {}", el.shape.kind_name(), el.id);
        }
    }
    out.push_str(TRAILER);
    log::info!("exported {written} of {} element(s)", elements.len());
    out
}

fn pair(out: &mut String, code: u16, value: impl std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{code}\n{value}\n");
}

fn num(value: f64) -> String {
    // Shortest round-trip form; negative zero prints as 0.
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

fn write_line(out: &mut String, layer: &str, line: &Line) -> bool {
    pair(out, 0, "LINE");
    pair(out, 8, layer);
    pair(out, 10, num(line.start.x));
    pair(out, 20, num(line.start.y));
    pair(out, 11, num(line.end.x));
    pair(out, 21, num(line.end.y));
    true
}

fn write_circle(out: &mut String, layer: &str, circle: &Circle) -> bool {
    if circle.radius == 0.0 {
        return false;
    }
    pair(out, 0, "CIRCLE");
    pair(out, 8, layer);
    pair(out, 10, num(circle.center.x));
    pair(out, 20, num(circle.center.y));
    pair(out, 40, num(circle.radius));
    true
}

fn write_rectangle(out: &mut String, layer: &str, rect: &Rectangle) -> bool {
    if rect.width == 0.0 || rect.height == 0.0 {
        return false;
    }
    pair(out, 0, "LWPOLYLINE");
    pair(out, 8, layer);
    pair(out, 90, 4);
    pair(out, 70, 1);
    for corner in rect.corners() {
        pair(out, 10, num(corner.x));
        pair(out, 20, num(corner.y));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Polyline;
    use kurbo::Point;

    #[test]
    fn test_empty_document_boilerplate() {
        assert_eq!(
            export(&[]),
            "0\nSECTION\n2\nHEADER\n0\nENDSEC\n0\nSECTION\n2\nTABLES\n0\nENDSEC\n\
             0\nSECTION\n2\nBLOCKS\n0\nENDSEC\n0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF"
        );
    }

    #[test]
    fn test_line_record() {
        let el = Element::new("l".into(), Shape::Line(Line::new(Point::new(100.0, 100.0), Point::new(700.5, -3.0))));
        let text = export(&[el]);
        assert!(text.contains("0\nLINE\n8\n0\n10\n100\n20\n100\n11\n700.5\n21\n-3\n"));
    }

    #[test]
    fn test_rectangle_record_is_sign_aware() {
        let el = Element::new(
            "r".into(),
            Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), -50.0, 30.0)),
        )
        .with_layer("frame");
        let text = export(&[el]);
        assert!(text.contains(
            "0\nLWPOLYLINE\n8\nframe\n90\n4\n70\n1\n10\n0\n20\n0\n10\n-50\n20\n0\n10\n-50\n20\n30\n10\n0\n20\n30\n"
        ));
    }

    #[test]
    fn test_degenerate_shapes_skipped() {
        let elements = vec![
            Element::new("c".into(), Shape::Circle(Circle::new(Point::new(1.0, 1.0), 0.0))),
            Element::new("r".into(), Shape::Rectangle(Rectangle::new(Point::new(1.0, 1.0), 10.0, 0.0))),
            Element::new("p".into(), Shape::Polyline(Polyline::new(vec![Point::new(0.0, 0.0)]))),
        ];
        assert_eq!(export(&elements), export(&[]));
    }

    #[test]
    fn test_negative_zero_prints_plain() {
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(0.1 + 0.2), "0.30000000000000004");
    }
}
