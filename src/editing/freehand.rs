//! Freehand drawing pipeline
//!
//! Raw pointer samples are thinned with [`simplify`] and then given tangent
//! handles with [`auto_smooth`]. Sample coordinates must already be in
//! design space.

use super::simplify::simplify;
use super::smooth_curves::auto_smooth;
use crate::path::{GlyphPath, PointKind};
use kurbo::Point;
use tracing::debug;

/// Build a smooth path from raw pointer samples
///
/// Strokes that simplify to fewer than 3 points stay as corner points.
pub fn freehand_to_path(raw: &[Point], tolerance: f64, closed: bool) -> GlyphPath {
    let kept = simplify(raw, tolerance);
    let mut path = GlyphPath::from_positions(&kept, PointKind::Corner, closed);
    auto_smooth(&mut path);
    debug!(
        "Freehand stroke: {} samples -> {} points",
        raw.len(),
        path.len()
    );
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::HandleConstraint;

    #[test]
    fn test_noisy_arc_becomes_smooth_path() {
        let samples: Vec<Point> = (0..=40)
            .map(|i| {
                let t = i as f64 / 40.0 * std::f64::consts::PI;
                let jitter = if i % 2 == 0 { 0.2 } else { -0.2 };
                Point::new(100.0 * t.cos(), 100.0 * t.sin() + jitter)
            })
            .collect();
        let path = freehand_to_path(&samples, 2.0, false);
        assert!(path.len() >= 3);
        assert!(path.len() < samples.len());
        assert_eq!(path.points.first().map(|p| p.position()), Some(samples[0]));
        assert_eq!(path.points.last().map(|p| p.position()), Some(samples[40]));
        for point in &path.points {
            assert_eq!(point.kind, PointKind::Curve);
            assert_eq!(point.constraint, HandleConstraint::Symmetric);
        }
    }

    #[test]
    fn test_straight_stroke_stays_corners() {
        let samples: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 0.0)).collect();
        let path = freehand_to_path(&samples, 0.5, false);
        assert_eq!(path.len(), 2);
        assert!(path.points.iter().all(|p| p.kind == PointKind::Corner));
    }
}
