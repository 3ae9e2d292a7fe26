//! Point and vector arithmetic for outline geometry
//!
//! Positions are `kurbo::Point` and offsets are `kurbo::Vec2`, both in font
//! design units. The helpers here guard every zero-length case so that the
//! editing algorithms never divide by zero or propagate NaN.

use kurbo::{Point, Vec2};

/// A raw 2D position. Used for geometry, never stored as model state.
pub type Point2D = Point;

/// Lengths below this are treated as zero.
pub const EPSILON: f64 = 1e-12;

/// Euclidean length of a vector
pub fn length(v: Vec2) -> f64 {
    v.x.hypot(v.y)
}

/// Unit vector in the direction of `v`, or `None` for a zero-length vector
pub fn unit(v: Vec2) -> Option<Vec2> {
    let len = length(v);
    if len <= EPSILON {
        None
    } else {
        Some(Vec2::new(v.x / len, v.y / len))
    }
}

/// Left-hand perpendicular of `v` (rotated +90°)
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Rotate a vector counter-clockwise by `degrees`
pub fn rotate_vec(v: Vec2, degrees: f64) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Direction angle of the vector from `from` to `to`, in radians
///
/// Returns 0 when the two points coincide.
pub fn direction_angle(from: Point, to: Point) -> f64 {
    let d = to - from;
    if length(d) <= EPSILON {
        0.0
    } else {
        d.y.atan2(d.x)
    }
}

/// Perpendicular distance of `p` from the line through `a` and `b`
///
/// Falls back to the plain distance to `a` when the line is degenerate.
pub fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx == 0.0 && dy == 0.0 {
        return p.distance(a);
    }
    (dy * p.x - dx * p.y + b.x * a.y - b.y * a.x).abs() / (dx * dx + dy * dy).sqrt()
}

/// Absolute turning angle between an incoming and an outgoing direction,
/// in degrees within `[0, 180]`
///
/// Returns `None` when either vector has zero length.
pub fn turning_angle(incoming: Vec2, outgoing: Vec2) -> Option<f64> {
    if length(incoming) <= EPSILON || length(outgoing) <= EPSILON {
        return None;
    }
    let cross = incoming.x * outgoing.y - incoming.y * outgoing.x;
    let dot = incoming.x * outgoing.x + incoming.y * outgoing.y;
    Some(cross.atan2(dot).abs().to_degrees())
}

/// Cross product of two vectors (z component)
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}
