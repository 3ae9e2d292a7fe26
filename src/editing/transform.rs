//! Affine transforms on glyph paths
//!
//! Positions are transformed around an explicit center. Handle offsets are
//! vectors relative to their point, so they only see the linear part of a
//! transform, never the translation.

use crate::geometry::point::rotate_vec;
use crate::path::GlyphPath;
use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One transform, independent of the center it is applied around
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum TransformOp {
    Scale { sx: f64, sy: f64 },
    Rotate { degrees: f64 },
    Skew { x_degrees: f64, y_degrees: f64 },
    Mirror { horizontal: bool, vertical: bool },
    Translate { dx: f64, dy: f64 },
}

impl TransformOp {
    /// Apply to `path` in place around `center`
    pub fn apply(&self, path: &mut GlyphPath, center: Point) {
        debug!("Applying {:?} to path {} around {:?}", self, path.id, center);
        match *self {
            TransformOp::Scale { sx, sy } => scale(path, sx, sy, center),
            TransformOp::Rotate { degrees } => rotate(path, degrees, center),
            TransformOp::Skew {
                x_degrees,
                y_degrees,
            } => skew(path, x_degrees, y_degrees, center),
            TransformOp::Mirror {
                horizontal,
                vertical,
            } => mirror(path, horizontal, vertical, center),
            TransformOp::Translate { dx, dy } => translate(path, dx, dy),
        }
    }
}

/// Map every position (taken relative to `center`) and every handle offset
/// through the same linear map
fn transform_relative(
    path: &mut GlyphPath,
    center: Point,
    map_vector: impl Fn(Vec2) -> Vec2,
) {
    for point in &mut path.points {
        let relative = point.position() - center;
        point.set_position(center + map_vector(relative));
        let handle_in = map_vector(point.control_in());
        let handle_out = map_vector(point.control_out());
        point.set_control_in(handle_in);
        point.set_control_out(handle_out);
    }
}

/// Scale around `center`; handles are scaled by the same factors
///
/// Positions are computed as `p·s + c·(1 − s)`, which leaves them bit-exact
/// for a unit factor.
pub fn scale(path: &mut GlyphPath, sx: f64, sy: f64, center: Point) {
    for point in &mut path.points {
        let p = point.position();
        point.set_position(Point::new(
            p.x * sx + center.x * (1.0 - sx),
            p.y * sy + center.y * (1.0 - sy),
        ));
        let handle_in = point.control_in();
        let handle_out = point.control_out();
        point.set_control_in(Vec2::new(handle_in.x * sx, handle_in.y * sy));
        point.set_control_out(Vec2::new(handle_out.x * sx, handle_out.y * sy));
    }
}

/// Rotate counter-clockwise by `degrees` around `center`
pub fn rotate(path: &mut GlyphPath, degrees: f64, center: Point) {
    transform_relative(path, center, |v| rotate_vec(v, degrees));
}

/// Shear around `center`: `x' = x + y·tan(ax)`, `y' = y + x·tan(ay)`
///
/// Both coordinates are computed from the original (x, y).
pub fn skew(path: &mut GlyphPath, x_degrees: f64, y_degrees: f64, center: Point) {
    let tan_x = x_degrees.to_radians().tan();
    let tan_y = y_degrees.to_radians().tan();
    transform_relative(path, center, |v| {
        Vec2::new(v.x + v.y * tan_x, v.y + v.x * tan_y)
    });
}

/// Mirror across the vertical axis (`horizontal`) and/or the horizontal axis
/// (`vertical`) through `center`
///
/// Handles flip exactly. Mirroring twice around a fractional center can
/// leave positions off by a rounding error of `2·center`.
pub fn mirror(path: &mut GlyphPath, horizontal: bool, vertical: bool, center: Point) {
    let sx = if horizontal { -1.0 } else { 1.0 };
    let sy = if vertical { -1.0 } else { 1.0 };
    scale(path, sx, sy, center);
}

/// Move every point; handles are unaffected
pub fn translate(path: &mut GlyphPath, dx: f64, dy: f64) {
    path.translate(dx, dy);
}

/// Apply an arbitrary affine matrix (e.g. a component transform)
pub fn apply_affine(path: &mut GlyphPath, affine: Affine) {
    let [a, b, c, d, _, _] = affine.as_coeffs();
    let linear = Affine::new([a, b, c, d, 0.0, 0.0]);
    for point in &mut path.points {
        point.set_position(affine * point.position());
        let handle_in = (linear * point.control_in().to_point()).to_vec2();
        let handle_out = (linear * point.control_out().to_point()).to_vec2();
        point.set_control_in(handle_in);
        point.set_control_out(handle_out);
    }
}
