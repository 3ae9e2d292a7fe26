//! Corner detection by turning angle

use crate::geometry::point::turning_angle;
use crate::path::GlyphPath;

/// Absolute turning angle at `index`, in degrees within `[0, 180]`
///
/// Neighbours wrap around on closed paths. Returns `None` for endpoints of
/// open paths and where either adjacent segment has zero length.
pub fn turning_angle_at(path: &GlyphPath, index: usize) -> Option<f64> {
    let n = path.len();
    if n < 3 || index >= n {
        return None;
    }
    let prev = if index == 0 {
        if !path.is_closed {
            return None;
        }
        n - 1
    } else {
        index - 1
    };
    let next = if index == n - 1 {
        if !path.is_closed {
            return None;
        }
        0
    } else {
        index + 1
    };
    let current = path.points[index].position();
    let incoming = current - path.points[prev].position();
    let outgoing = path.points[next].position() - current;
    turning_angle(incoming, outgoing)
}

/// Interior points (indices `1..n-1`) whose turning angle exceeds
/// `threshold_degrees`, in ascending order
///
/// The path is not modified; the caller decides what to do with the corners.
pub fn detect_corners(path: &GlyphPath, threshold_degrees: f64) -> Vec<usize> {
    let n = path.len();
    if n < 3 {
        return Vec::new();
    }
    (1..n - 1)
        .filter(|&i| is_corner(path, i, threshold_degrees))
        .collect()
}

/// Like [`detect_corners`], but on closed paths the first and last points
/// are judged too, using their wrap-around neighbours
pub fn detect_all_corners(path: &GlyphPath, threshold_degrees: f64) -> Vec<usize> {
    if !path.is_closed {
        return detect_corners(path, threshold_degrees);
    }
    (0..path.len())
        .filter(|&i| is_corner(path, i, threshold_degrees))
        .collect()
}

fn is_corner(path: &GlyphPath, index: usize, threshold_degrees: f64) -> bool {
    turning_angle_at(path, index).is_some_and(|angle| angle > threshold_degrees)
}
