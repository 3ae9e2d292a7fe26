//! SVG path data
//!
//! Reads and writes the absolute `M`/`L`/`C`/`Z` subset of SVG path data,
//! which is what the editor puts on the clipboard and reads back from it.
//! Relative commands and the other curve types are not understood.
//!
//! Parsing never fails. Unknown commands and malformed numbers are logged
//! and skipped, and whatever could be read is returned.

use crate::path::glyph_path::push_cubic;
use crate::path::{GlyphPath, PointKind, SegmentKind};
use kurbo::Point;
use tracing::{debug, warn};

/// Parse path data into one path per `M` subpath
///
/// A `C` sets the previous point's outgoing handle as well as the new
/// point's incoming handle. On `Z`, a last curve point sitting on the first
/// one is folded into it; a repeated corner is kept. Coordinate groups may repeat after `M` (as line-tos), `L`
/// and `C`.
pub fn parse_svg_path_data(data: &str) -> Vec<GlyphPath> {
    let tokens = tokenize(data);
    let mut paths = Vec::new();
    let mut current: Option<GlyphPath> = None;
    let mut command: Option<char> = None;
    let mut i = 0;

    while i < tokens.len() {
        if let Some(letter) = command_letter(&tokens[i]) {
            i += 1;
            command = match letter {
                'M' | 'L' | 'C' => Some(letter),
                'Z' | 'z' => {
                    match current.take() {
                        Some(mut path) => {
                            path.close_merging_endpoint();
                            paths.push(path);
                        }
                        None => warn!("SVG path data: 'Z' without an open subpath, ignored"),
                    }
                    None
                }
                other => {
                    warn!("SVG path data: unsupported command '{}' skipped", other);
                    None
                }
            };
            continue;
        }

        let Some(cmd) = command else {
            warn!("SVG path data: stray token '{}' skipped", tokens[i]);
            i += 1;
            continue;
        };

        let arity = if cmd == 'C' { 6 } else { 2 };
        let start = i;
        while i < tokens.len() && i - start < arity && command_letter(&tokens[i]).is_none() {
            i += 1;
        }
        let group = &tokens[start..i];
        if group.len() < arity {
            warn!(
                "SVG path data: '{}' needs {} numbers, found {}; skipped",
                cmd,
                arity,
                group.len()
            );
            continue;
        }
        let Some(values) = parse_numbers(group) else {
            warn!("SVG path data: malformed numbers {:?} for '{}' skipped", group, cmd);
            continue;
        };

        match cmd {
            'M' => {
                if let Some(done) = current.take() {
                    paths.push(done);
                }
                let mut path = GlyphPath::new();
                path.push_point(values[0], values[1], PointKind::Corner);
                current = Some(path);
                command = Some('L');
            }
            'L' => {
                let path = current.get_or_insert_with(GlyphPath::new);
                path.push_point(values[0], values[1], PointKind::Corner);
            }
            _ => {
                let path = current.get_or_insert_with(GlyphPath::new);
                push_cubic(
                    path,
                    Point::new(values[0], values[1]),
                    Point::new(values[2], values[3]),
                    Point::new(values[4], values[5]),
                );
            }
        }
    }

    if let Some(done) = current.take() {
        paths.push(done);
    }
    paths.retain(|p| !p.is_empty());
    debug!("Parsed {} path(s) from SVG path data", paths.len());
    paths
}

/// The first non-empty path in `data`, if any
pub fn parse_svg_path(data: &str) -> Option<GlyphPath> {
    parse_svg_path_data(data).into_iter().next()
}

/// Serialize one path to absolute path data
///
/// Line segments become `L`, cubic segments `C`. A cubic closing segment is
/// written out as a `C` back to the start point before the `Z`. An empty path
/// gives an empty string.
pub fn serialize_to_svg_path_data(path: &GlyphPath) -> String {
    let Some(first) = path.points.first() else {
        return String::new();
    };
    let mut parts = vec![format!("M {} {}", format_number(first.x), format_number(first.y))];

    for segment in path.segments() {
        let from = &path.points[segment.from];
        let to = &path.points[segment.to];
        match segment.kind {
            SegmentKind::Line if segment.to == 0 => {}
            SegmentKind::Line => {
                parts.push(format!("L {} {}", format_number(to.x), format_number(to.y)));
            }
            SegmentKind::Cubic => {
                let c1 = from.control_out_point();
                let c2 = to.control_in_point();
                parts.push(format!(
                    "C {} {} {} {} {} {}",
                    format_number(c1.x),
                    format_number(c1.y),
                    format_number(c2.x),
                    format_number(c2.y),
                    format_number(to.x),
                    format_number(to.y)
                ));
            }
        }
    }

    if path.is_closed {
        parts.push("Z".to_string());
    }
    parts.join(" ")
}

/// Serialize several paths into one path data string
pub fn serialize_paths(paths: &[GlyphPath]) -> String {
    paths
        .iter()
        .filter(|p| !p.is_empty())
        .map(serialize_to_svg_path_data)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split path data into command letters and number strings
///
/// Whitespace and commas separate tokens. A letter (other than an exponent
/// `e`/`E`) always stands alone, and a sign starts a new number unless it
/// follows an exponent, so `M10-5` gives `M`, `10`, `-5`.
fn tokenize(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        match ch {
            c if c.is_whitespace() || c == ',' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            'e' | 'E' => current.push(ch),
            c if c.is_ascii_alphabetic() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(c.to_string());
            }
            '-' | '+' => {
                if !current.is_empty() && !current.ends_with(['e', 'E']) {
                    tokens.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn command_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() && c != 'e' && c != 'E' => Some(c),
        _ => None,
    }
}

fn parse_numbers(tokens: &[String]) -> Option<Vec<f64>> {
    tokens
        .iter()
        .map(|t| t.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

/// Shortest representation that parses back to the same value
fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also catches -0
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Vec2};

    fn square() -> GlyphPath {
        let mut path = GlyphPath::new();
        path.add_rectangle(Rect::new(0.0, 0.0, 100.0, 100.0));
        path
    }

    #[test]
    fn test_corner_square_round_trip() {
        let data = serialize_to_svg_path_data(&square());
        assert_eq!(data, "M 0 0 L 100 0 L 100 100 L 0 100 Z");

        let parsed = parse_svg_path(&data).unwrap();
        assert!(parsed.is_closed);
        assert_eq!(parsed.positions(), square().positions());
        assert!(parsed.points.iter().all(|p| p.kind == PointKind::Corner));
    }

    #[test]
    fn test_repeated_start_corner_round_trip() {
        let positions = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 0.0),
        ];
        let path = GlyphPath::from_positions(&positions, PointKind::Corner, true);
        let data = serialize_to_svg_path_data(&path);
        assert_eq!(data, "M 0 0 L 100 0 L 100 100 L 0 0 Z");

        let parsed = parse_svg_path(&data).unwrap();
        assert!(parsed.is_closed);
        assert_eq!(parsed.positions(), positions.to_vec());
    }

    #[test]
    fn test_curve_sets_both_handles() {
        let path = parse_svg_path("M 0 0 C 10 20 30 40 50 50").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.points[0].kind, PointKind::Curve);
        assert_eq!(path.points[0].control_out(), Vec2::new(10.0, 20.0));
        assert_eq!(path.points[1].kind, PointKind::Curve);
        assert_eq!(path.points[1].control_in(), Vec2::new(-20.0, -10.0));
        assert_eq!(
            serialize_to_svg_path_data(&path),
            "M 0 0 C 10 20 30 40 50 50"
        );
    }

    #[test]
    fn test_closing_curve_round_trip() {
        let mut circle = GlyphPath::new();
        circle.add_circle(Point::new(0.0, 0.0), 100.0);
        let data = serialize_to_svg_path_data(&circle);
        assert_eq!(data.matches('C').count(), 4);
        assert!(data.ends_with(" 100 0 Z"));

        let parsed = parse_svg_path(&data).unwrap();
        assert_eq!(parsed.len(), 4);
        assert!(parsed.is_closed);
        for (a, b) in parsed.points.iter().zip(&circle.points) {
            assert!(a.position().distance(b.position()) < 1e-9);
            assert!((a.control_in() - b.control_in()).hypot2() < 1e-18);
            assert!((a.control_out() - b.control_out()).hypot2() < 1e-18);
        }
    }

    #[test]
    fn test_each_move_starts_a_path() {
        let paths = parse_svg_path_data("M 0 0 L 10 0 L 10 10 Z M 20 20 L 30 30");
        assert_eq!(paths.len(), 2);
        assert!(paths[0].is_closed);
        assert_eq!(paths[0].len(), 3);
        assert!(!paths[1].is_closed);
        assert_eq!(paths[1].positions(), vec![Point::new(20.0, 20.0), Point::new(30.0, 30.0)]);
    }

    #[test]
    fn test_compact_syntax() {
        let paths = parse_svg_path_data("M0,0L10-5,20 0 30,5Z");
        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].positions(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, -5.0),
                Point::new(20.0, 0.0),
                Point::new(30.0, 5.0),
            ]
        );
        let implicit = parse_svg_path("M 0 0 10 0 10 10").unwrap();
        assert_eq!(implicit.len(), 3);
        let exponent = parse_svg_path("M 1e2 -1.5E-1").unwrap();
        assert_eq!(exponent.points[0].position(), Point::new(100.0, -0.15));
    }

    #[test]
    fn test_malformed_input_is_skipped() {
        let path = parse_svg_path("M 0 0 L 1.2.3 4 L 10 10 Q 1 2 3 4 L 20 0").unwrap();
        assert_eq!(
            path.positions(),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(20.0, 0.0)]
        );
        let truncated = parse_svg_path("M 0 0 L 5 Z").unwrap();
        assert_eq!(truncated.len(), 1);
        assert!(truncated.is_closed);
    }

    #[test]
    fn test_empty_results() {
        assert!(parse_svg_path("").is_none());
        assert!(parse_svg_path("Z Z").is_none());
        assert!(parse_svg_path("hello world").is_none());
        assert_eq!(serialize_to_svg_path_data(&GlyphPath::new()), "");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_serialize_several_paths() {
        let mut a = GlyphPath::new();
        a.push_point(0.0, 0.0, PointKind::Corner);
        a.push_point(1.0, 1.0, PointKind::Corner);
        let data = serialize_paths(&[a, GlyphPath::new(), square()]);
        assert_eq!(data, "M 0 0 L 1 1 M 0 0 L 100 0 L 100 100 L 0 100 Z");
    }
}
