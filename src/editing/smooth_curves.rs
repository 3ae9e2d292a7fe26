//! Curve smoothing algorithms
//!
//! Each algorithm reads point positions only, ignoring any handle or kind
//! state already on the path, and either returns a new path or (for
//! [`auto_smooth`]) rewrites the handles in place.
//!
//! Degenerate input never fails: a path with too few points for the chosen
//! method, or a parameter outside its valid range, comes back unchanged.

use super::corners::detect_all_corners;
use crate::geometry::point::direction_angle;
use crate::path::{GlyphPath, HandleConstraint, PathPoint, PointKind};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A smoothing method together with its parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum SmoothingMethod {
    Chaikin { iterations: usize },
    CatmullRom { tension: f64 },
    Gaussian { radius: usize, sigma: f64 },
    Auto,
    Smart { threshold_degrees: f64 },
}

impl SmoothingMethod {
    /// Run the method on a copy of `path`
    pub fn apply(&self, path: &GlyphPath) -> GlyphPath {
        match *self {
            SmoothingMethod::Chaikin { iterations } => chaikin_smooth(path, iterations),
            SmoothingMethod::CatmullRom { tension } => catmull_rom_smooth(path, tension),
            SmoothingMethod::Gaussian { radius, sigma } => gaussian_smooth(path, radius, sigma),
            SmoothingMethod::Auto => {
                let mut smoothed = path.clone();
                auto_smooth(&mut smoothed);
                smoothed
            }
            SmoothingMethod::Smart { threshold_degrees } => {
                let mut smoothed = path.clone();
                smart_smooth(&mut smoothed, threshold_degrees);
                smoothed
            }
        }
    }
}

/// Chaikin corner cutting
///
/// Every iteration replaces each segment (including the closing one of a
/// closed path) with two points at 1/4 and 3/4 along it. The output points
/// are curve points without handles.
pub fn chaikin_smooth(path: &GlyphPath, iterations: usize) -> GlyphPath {
    if iterations == 0 || path.len() < 2 {
        debug!("Chaikin smoothing skipped: {} points, {} iterations", path.len(), iterations);
        return path.clone();
    }

    let mut positions = path.positions();
    for _ in 0..iterations {
        positions = chaikin_pass(&positions, path.is_closed);
    }
    GlyphPath::from_positions(&positions, PointKind::Curve, path.is_closed)
}

fn chaikin_pass(points: &[Point], closed: bool) -> Vec<Point> {
    let n = points.len();
    let pairs = if closed { n } else { n - 1 };
    let mut cut = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        cut.push(p1.lerp(p2, 0.25));
        cut.push(p1.lerp(p2, 0.75));
    }
    cut
}

/// Catmull-Rom spline fitting
///
/// Every point but the last becomes a curve point with broken handles
/// derived from its neighbours; the last point is kept as a plain corner.
/// Needs at least 4 points. `tension` is clamped to `[0, 1]`.
pub fn catmull_rom_smooth(path: &GlyphPath, tension: f64) -> GlyphPath {
    let n = path.len();
    if n < 4 || !tension.is_finite() {
        debug!("Catmull-Rom smoothing skipped: {} points", n);
        return path.clone();
    }
    let tension = tension.clamp(0.0, 1.0);
    let positions = path.positions();

    let mut points = Vec::with_capacity(n);
    for i in 0..n - 1 {
        let p0 = positions[i.saturating_sub(1)];
        let p1 = positions[i];
        let p2 = positions[i + 1];
        let p3 = positions[(i + 2).min(n - 1)];

        let control_out = (p2 - p0) * tension;
        let control_in = -((p3 - p1) * tension);
        points.push(
            PathPoint::curve(p1.x, p1.y)
                .with_handles(control_in, control_out)
                .with_constraint(HandleConstraint::Broken),
        );
    }
    let last = positions[n - 1];
    points.push(PathPoint::corner(last.x, last.y));

    GlyphPath::from_points(points, path.is_closed)
}

/// Normalized Gaussian weights for offsets `-radius..=radius`
///
/// A sigma that is not a positive number gives the identity kernel `[1.0]`.
pub fn gaussian_kernel(radius: usize, sigma: f64) -> Vec<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return vec![1.0];
    }
    let r = radius as i64;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let weights: Vec<f64> = (-r..=r)
        .map(|k| (-((k * k) as f64) / two_sigma_sq).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Gaussian position smoothing
///
/// Convolves every position with its neighbours within `radius`. Indices
/// wrap on closed paths and clamp on open ones. Needs more than
/// `2 * radius` points.
pub fn gaussian_smooth(path: &GlyphPath, radius: usize, sigma: f64) -> GlyphPath {
    let n = path.len();
    let too_short = radius.checked_mul(2).map_or(true, |width| n <= width);
    if radius == 0 || !sigma.is_finite() || sigma <= 0.0 || too_short {
        debug!(
            "Gaussian smoothing skipped: {} points, radius {}, sigma {}",
            n, radius, sigma
        );
        return path.clone();
    }

    let kernel = gaussian_kernel(radius, sigma);
    let positions = path.positions();
    let r = radius as i64;
    let len = n as i64;

    let smoothed: Vec<Point> = (0..len)
        .map(|i| {
            let mut acc = Vec2::ZERO;
            for (slot, k) in (-r..=r).enumerate() {
                let j = if path.is_closed {
                    (i + k).rem_euclid(len)
                } else {
                    (i + k).clamp(0, len - 1)
                };
                acc += positions[j as usize].to_vec2() * kernel[slot];
            }
            acc.to_point()
        })
        .collect();

    GlyphPath::from_positions(&smoothed, PointKind::Curve, path.is_closed)
}

/// Tangent-based automatic handles, in place
///
/// Every non-control point becomes a symmetric curve point. Its incoming
/// handle follows the direction from the previous point, its outgoing
/// handle the direction to the next point, each a third of the shorter
/// neighbour distance long. Neighbours wrap around. Needs at least 3 points.
pub fn auto_smooth(path: &mut GlyphPath) {
    let n = path.len();
    if n < 3 {
        debug!("Auto smoothing skipped: {} points", n);
        return;
    }
    let positions = path.positions();

    for (i, point) in path.points.iter_mut().enumerate() {
        if point.kind == PointKind::Control {
            continue;
        }
        let prev = positions[(i + n - 1) % n];
        let current = positions[i];
        let next = positions[(i + 1) % n];

        let in_angle = direction_angle(prev, current);
        let out_angle = direction_angle(current, next);
        let tension = current.distance(prev).min(current.distance(next)) / 3.0;

        point.set_control_in(-Vec2::new(in_angle.cos(), in_angle.sin()) * tension);
        point.set_control_out(Vec2::new(out_angle.cos(), out_angle.sin()) * tension);
        point.kind = PointKind::Curve;
        point.constraint = HandleConstraint::Symmetric;
    }
}

/// Auto smoothing that keeps sharp corners sharp, in place
///
/// Points turning more than `threshold_degrees` (and both ends of an open
/// path) are reset to handle-less corners after [`auto_smooth`].
pub fn smart_smooth(path: &mut GlyphPath, threshold_degrees: f64) {
    let n = path.len();
    if n < 3 {
        return;
    }
    let mut corners = detect_all_corners(path, threshold_degrees);
    if !path.is_closed {
        corners.push(0);
        corners.push(n - 1);
    }

    auto_smooth(path);

    for index in corners {
        let point = &mut path.points[index];
        point.clear_handles();
        point.kind = PointKind::Corner;
        point.constraint = HandleConstraint::Broken;
    }
}
