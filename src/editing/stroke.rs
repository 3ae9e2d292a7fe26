//! Stroke expansion
//!
//! Turns a centerline into a closed outline by offsetting every point along
//! its perpendicular, left side first and then the right side in reverse.
//! This is a point-wise offset, not an exact curve offset: large widths on
//! tight curves will self-intersect and nothing guards against that.

use crate::geometry::point::{perpendicular, unit};
use crate::path::{GlyphPath, HandleConstraint, PathPoint, PointKind};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Handle length given to rounded outline points, in design units
pub const ROUND_HANDLE_LENGTH: f64 = 4.0;

/// Miters longer than this multiple of the half width fall back to a bevel
pub const MITER_LIMIT: f64 = 4.0;

/// Style for the ends of an open stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Every outline point becomes a smooth curve point (cosmetic rounding)
    Round,
    /// Flat cap pushed half the width past the endpoint
    Square,
}

/// Style for the joints between segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Offset along the bisector so both edges keep their full width
    Miter,
    /// Offset along the outgoing segment's perpendicular only
    #[default]
    Bevel,
    /// Bevel offsets with smooth handles on the joint points
    Round,
}

/// Expand a centerline into a closed outline of the given width
///
/// A negative width swaps the two sides. Closed paths wrap the direction
/// of the last point to the first; on an open path the last point keeps its
/// incoming direction rather than pointing back at the start.
pub fn stroke_to_outline(path: &GlyphPath, stroke_width: f64, cap: LineCap, join: LineJoin) -> GlyphPath {
    let n = path.len();
    let mut outline = GlyphPath::new();
    outline.close();
    if n == 0 {
        return outline;
    }

    let positions = path.positions();
    let directions = outgoing_directions(&positions, path.is_closed);
    let half = stroke_width / 2.0;

    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    for i in 0..n {
        let is_joint = path.is_closed || (i > 0 && i < n - 1);
        let incoming = if i == 0 {
            if path.is_closed { directions[n - 1] } else { directions[0] }
        } else {
            directions[i - 1]
        };
        let normal = match join {
            LineJoin::Miter if is_joint => miter_normal(incoming, directions[i]),
            _ => perpendicular(directions[i]),
        };

        let mut offset = normal * half;
        let mut p = positions[i];
        if cap == LineCap::Square && !path.is_closed {
            if i == 0 {
                p -= directions[i] * half.abs();
            } else if i == n - 1 {
                p += directions[i] * half.abs();
            }
        }
        if !offset.x.is_finite() || !offset.y.is_finite() {
            offset = Vec2::ZERO;
        }

        let rounded = cap == LineCap::Round || (join == LineJoin::Round && is_joint);
        left.push(outline_point(p + offset, directions[i], rounded));
        right.push(outline_point(p - offset, -directions[i], rounded));
    }

    outline.points.extend(left);
    outline.points.extend(right.into_iter().rev());
    debug!(
        "Stroked path {} ({} points, width {}) into {} outline points",
        path.id,
        n,
        stroke_width,
        outline.len()
    );
    outline
}

/// Grow a path outwards by `amount` on each side
pub fn expand(path: &GlyphPath, amount: f64) -> GlyphPath {
    stroke_to_outline(path, amount * 2.0, LineCap::Butt, LineJoin::Bevel)
}

/// Same as [`expand`] with the sides swapped
///
/// Large amounts produce degenerate, self-intersecting outlines.
pub fn contract(path: &GlyphPath, amount: f64) -> GlyphPath {
    stroke_to_outline(path, -amount * 2.0, LineCap::Butt, LineJoin::Bevel)
}

/// Unit direction from each point to the next
///
/// The last point of a closed path wraps to the first; the last point of an
/// open path reuses the direction of the segment leading into it. Zero-length
/// segments borrow the nearest earlier valid direction (or the first valid
/// one); a path with no extent gets zero directions.
fn outgoing_directions(positions: &[Point], closed: bool) -> Vec<Vec2> {
    let n = positions.len();
    let raw: Vec<Option<Vec2>> = (0..n)
        .map(|i| {
            if !closed && i == n - 1 {
                return None;
            }
            unit(positions[(i + 1) % n] - positions[i])
        })
        .collect();

    let first_valid = raw.iter().flatten().next().copied().unwrap_or(Vec2::ZERO);
    let mut last_valid = first_valid;
    raw.into_iter()
        .map(|d| {
            if let Some(d) = d {
                last_valid = d;
            }
            last_valid
        })
        .collect()
}

/// Bisector normal scaled so the offset edges stay `half` away, clamped by
/// [`MITER_LIMIT`]
fn miter_normal(incoming: Vec2, outgoing: Vec2) -> Vec2 {
    let n_in = perpendicular(incoming);
    let n_out = perpendicular(outgoing);
    let Some(bisector) = unit(n_in + n_out) else {
        return n_out;
    };
    let cos = bisector.x * n_out.x + bisector.y * n_out.y;
    if cos <= 1.0 / MITER_LIMIT {
        n_out
    } else {
        bisector / cos
    }
}

fn outline_point(p: Point, tangent: Vec2, rounded: bool) -> PathPoint {
    if !rounded {
        return PathPoint::corner(p.x, p.y);
    }
    let handle = tangent * ROUND_HANDLE_LENGTH;
    PathPoint::new(p.x, p.y, PointKind::Curve)
        .with_handles(-handle, handle)
        .with_constraint(HandleConstraint::Symmetric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    fn horizontal_line() -> GlyphPath {
        GlyphPath::from_positions(
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            PointKind::Corner,
            false,
        )
    }

    fn square() -> GlyphPath {
        let mut path = GlyphPath::new();
        path.add_rectangle(Rect::new(0.0, 0.0, 100.0, 100.0));
        path
    }

    #[test]
    fn test_straight_line_outline() {
        let outline = stroke_to_outline(&horizontal_line(), 10.0, LineCap::Butt, LineJoin::Bevel);
        assert!(outline.is_closed);
        assert_eq!(
            outline.positions(),
            vec![
                Point::new(0.0, 5.0),
                Point::new(100.0, 5.0),
                Point::new(100.0, -5.0),
                Point::new(0.0, -5.0),
            ]
        );
        assert!(outline.points.iter().all(|p| p.kind == PointKind::Corner));
    }

    #[test]
    fn test_square_cap_extends_ends() {
        let outline = stroke_to_outline(&horizontal_line(), 10.0, LineCap::Square, LineJoin::Bevel);
        assert_eq!(outline.points[0].position(), Point::new(-5.0, 5.0));
        assert_eq!(outline.points[1].position(), Point::new(105.0, 5.0));
    }

    #[test]
    fn test_round_cap_rounds_every_point() {
        let outline = stroke_to_outline(&horizontal_line(), 10.0, LineCap::Round, LineJoin::Bevel);
        for point in &outline.points {
            assert_eq!(point.kind, PointKind::Curve);
            assert_eq!(point.constraint, HandleConstraint::Symmetric);
            assert_eq!(point.control_in(), -point.control_out());
            assert!((point.control_out().x.abs() - ROUND_HANDLE_LENGTH).abs() < 1e-12);
        }
    }

    #[test]
    fn test_miter_join_keeps_width_on_square() {
        let outline = stroke_to_outline(&square(), 10.0, LineCap::Butt, LineJoin::Miter);
        assert_eq!(outline.len(), 8);
        let inner: Vec<Point> = outline.positions()[..4].to_vec();
        let expected = [(5.0, 5.0), (95.0, 5.0), (95.0, 95.0), (5.0, 95.0)];
        for (p, (x, y)) in inner.iter().zip(expected) {
            assert!(p.distance(Point::new(x, y)) < 1e-9, "{:?} vs ({}, {})", p, x, y);
        }
    }

    #[test]
    fn test_bevel_join_on_square_uses_outgoing_perpendicular() {
        let outline = stroke_to_outline(&square(), 10.0, LineCap::Butt, LineJoin::Bevel);
        // Corner (100, 0) heads up: its left side is at x = 95
        assert!(outline.points[1].position().distance(Point::new(95.0, 0.0)) < 1e-9);
    }

    #[test]
    fn test_expand_and_contract_mirror_each_other() {
        let line = horizontal_line();
        let grown = expand(&line, 3.0);
        let shrunk = contract(&line, 3.0);
        assert_eq!(grown.points[0].position(), Point::new(0.0, 3.0));
        assert_eq!(shrunk.points[0].position(), Point::new(0.0, -3.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = stroke_to_outline(&GlyphPath::new(), 10.0, LineCap::Butt, LineJoin::Bevel);
        assert!(empty.is_empty());
        assert!(empty.is_closed);

        let single = GlyphPath::from_positions(&[Point::new(3.0, 4.0)], PointKind::Corner, false);
        let outline = stroke_to_outline(&single, 10.0, LineCap::Butt, LineJoin::Bevel);
        assert_eq!(outline.len(), 2);
        assert!(outline.points.iter().all(|p| p.position() == Point::new(3.0, 4.0)));

        let repeated = GlyphPath::from_positions(
            &[Point::new(0.0, 0.0), Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            PointKind::Corner,
            false,
        );
        let outline = stroke_to_outline(&repeated, 2.0, LineCap::Butt, LineJoin::Bevel);
        assert!(outline.positions().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert_eq!(outline.points[0].position(), Point::new(0.0, 1.0));
    }
}
