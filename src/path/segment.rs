//! Segment classification
//!
//! The single place that decides whether the segment between two adjacent
//! points is a straight line or a cubic bezier. Path conversion, SVG output
//! and stroking all go through [`classify`].

use super::glyph_path::GlyphPath;
use super::point::PathPoint;
use kurbo::{CubicBez, Line, PathSeg};

/// Drawing kind of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Line,
    Cubic,
}

/// A segment between two points of a path, by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    pub kind: SegmentKind,
}

/// Classify the segment `from → to`
///
/// The segment is cubic iff `from` is curve-like with an outgoing handle or
/// `to` is curve-like with an incoming handle.
pub fn classify(from: &PathPoint, to: &PathPoint) -> SegmentKind {
    let out_handle = from.kind.is_curve_like() && from.has_out_handle();
    let in_handle = to.kind.is_curve_like() && to.has_in_handle();
    if out_handle || in_handle {
        SegmentKind::Cubic
    } else {
        SegmentKind::Line
    }
}

/// Build the kurbo segment for `from → to`
pub fn to_path_seg(from: &PathPoint, to: &PathPoint) -> PathSeg {
    match classify(from, to) {
        SegmentKind::Line => PathSeg::Line(Line::new(from.position(), to.position())),
        SegmentKind::Cubic => PathSeg::Cubic(CubicBez::new(
            from.position(),
            from.control_out_point(),
            to.control_in_point(),
            to.position(),
        )),
    }
}

impl GlyphPath {
    /// All renderable segments in drawing order, including the closing
    /// segment of a closed path. Paths with fewer than 2 points have none.
    pub fn segments(&self) -> Vec<Segment> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        let count = if self.is_closed { n } else { n - 1 };
        (0..count)
            .map(|from| {
                let to = (from + 1) % n;
                Segment {
                    from,
                    to,
                    kind: classify(&self.points[from], &self.points[to]),
                }
            })
            .collect()
    }

    /// Renderable segments as kurbo geometry
    pub fn path_segs(&self) -> Vec<PathSeg> {
        self.segments()
            .iter()
            .map(|seg| to_path_seg(&self.points[seg.from], &self.points[seg.to]))
            .collect()
    }
}
