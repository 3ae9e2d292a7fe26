//! Path simplification (Ramer–Douglas–Peucker)
//!
//! Reduces a polyline to the subsequence of points that deviate from their
//! enclosing chord by more than a tolerance. Freehand strokes go through this
//! before handles are attached.

use crate::geometry::point::perpendicular_distance;
use crate::path::GlyphPath;
use kurbo::Point;
use tracing::debug;

/// Simplify a polyline, keeping its endpoints
///
/// Inputs with fewer than 3 points come back unchanged. Among equally
/// distant candidates the lowest index wins.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    simplify_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Indices of the points [`simplify`] keeps, in order
pub fn simplify_indices(points: &[Point], tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    // Explicit stack instead of recursion so long strokes can't overflow
    let mut ranges = vec![(0, n - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last <= first + 1 {
            continue;
        }
        let (index, max_distance) = farthest_point(points, first, last);
        if max_distance > tolerance {
            keep[index] = true;
            ranges.push((index, last));
            ranges.push((first, index));
        }
    }

    let kept: Vec<usize> = (0..n).filter(|&i| keep[i]).collect();
    debug!(
        "Simplified {} points to {} (tolerance {})",
        n,
        kept.len(),
        tolerance
    );
    kept
}

/// Point strictly between `first` and `last` farthest from their chord
fn farthest_point(points: &[Point], first: usize, last: usize) -> (usize, f64) {
    let a = points[first];
    let b = points[last];
    let mut best = (first + 1, 0.0);
    for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
        let distance = perpendicular_distance(*p, a, b);
        if distance > best.1 {
            best = (i, distance);
        }
    }
    best
}

/// Simplify a path's point sequence
///
/// Surviving points keep their kind and handles but are minted with fresh
/// ids, since the result is a new path.
pub fn simplify_path(path: &GlyphPath, tolerance: f64) -> GlyphPath {
    let positions = path.positions();
    let kept = simplify_indices(&positions, tolerance);
    let points = kept.into_iter().map(|i| path.points[i].duplicate()).collect();
    GlyphPath::from_points(points, path.is_closed)
}
