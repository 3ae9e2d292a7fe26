//! Glyph outline paths
//!
//! A [`GlyphPath`] owns an ordered sequence of [`PathPoint`]s. Order is
//! drawing order: it defines segment adjacency and winding. A closed path has
//! an implicit segment from the last point back to the first.

use super::ids::{PathId, PointId};
use super::point::{HandleConstraint, PathPoint, PointKind};
use super::segment::SegmentKind;
use kurbo::{BezPath, PathEl, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Handle length factor for approximating a quarter circle with a cubic
pub const CIRCLE_KAPPA: f64 = 0.552_284_749_830_793_4;

/// A single contour of a glyph
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphPath {
    #[serde(default = "PathId::next")]
    pub id: PathId,
    #[serde(default)]
    pub points: Vec<PathPoint>,
    #[serde(default)]
    pub is_closed: bool,
}

impl Default for GlyphPath {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphPath {
    /// Create an empty open path
    pub fn new() -> Self {
        Self {
            id: PathId::next(),
            points: Vec::new(),
            is_closed: false,
        }
    }

    /// Create a path owning `points`
    pub fn from_points(points: Vec<PathPoint>, is_closed: bool) -> Self {
        Self {
            id: PathId::next(),
            points,
            is_closed,
        }
    }

    /// Create a path of handle-less points of one kind at the given positions
    pub fn from_positions(positions: &[Point], kind: PointKind, is_closed: bool) -> Self {
        let points = positions
            .iter()
            .map(|p| PathPoint::new(p.x, p.y, kind))
            .collect();
        Self::from_points(points, is_closed)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, returning its id
    pub fn push(&mut self, point: PathPoint) -> PointId {
        let id = point.id;
        self.points.push(point);
        id
    }

    /// Append a handle-less point at (x, y)
    pub fn push_point(&mut self, x: f64, y: f64, kind: PointKind) -> PointId {
        self.push(PathPoint::new(x, y, kind))
    }

    /// Insert a point before `index` (clamped to the end)
    pub fn insert(&mut self, index: usize, point: PathPoint) -> PointId {
        let id = point.id;
        let index = index.min(self.points.len());
        self.points.insert(index, point);
        id
    }

    /// Remove the point with the given id
    pub fn remove(&mut self, id: PointId) -> Option<PathPoint> {
        let index = self.index_of(id)?;
        Some(self.points.remove(index))
    }

    pub fn index_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    pub fn point(&self, id: PointId) -> Option<&PathPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn point_mut(&mut self, id: PointId) -> Option<&mut PathPoint> {
        self.points.iter_mut().find(|p| p.id == id)
    }

    /// On-path positions in order
    pub fn positions(&self) -> Vec<Point> {
        self.points.iter().map(PathPoint::position).collect()
    }

    pub fn close(&mut self) {
        self.is_closed = true;
    }

    /// Copy of this path where the path and every point get fresh ids
    pub fn duplicate(&self) -> Self {
        Self::from_points(
            self.points.iter().map(PathPoint::duplicate).collect(),
            self.is_closed,
        )
    }

    /// Append an axis-aligned rectangle as four corner points and close
    pub fn add_rectangle(&mut self, rect: Rect) {
        let rect = rect.abs();
        self.push_point(rect.x0, rect.y0, PointKind::Corner);
        self.push_point(rect.x1, rect.y0, PointKind::Corner);
        self.push_point(rect.x1, rect.y1, PointKind::Corner);
        self.push_point(rect.x0, rect.y1, PointKind::Corner);
        self.close();
    }

    /// Append a circle as four symmetric curve points and close
    ///
    /// Points run counter-clockwise starting at the rightmost extreme.
    pub fn add_circle(&mut self, center: Point, radius: f64) {
        let k = radius * CIRCLE_KAPPA;
        let extremes = [
            (Vec2::new(radius, 0.0), Vec2::new(0.0, k)),
            (Vec2::new(0.0, radius), Vec2::new(-k, 0.0)),
            (Vec2::new(-radius, 0.0), Vec2::new(0.0, -k)),
            (Vec2::new(0.0, -radius), Vec2::new(k, 0.0)),
        ];
        for (offset, out) in extremes {
            let p = center + offset;
            self.push(
                PathPoint::curve(p.x, p.y)
                    .with_handles(-out, out)
                    .with_constraint(HandleConstraint::Symmetric),
            );
        }
        self.close();
    }

    /// Signed shoelace area over on-path points
    ///
    /// Positive is counter-clockwise with y pointing up.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }
        twice_area / 2.0
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Reverse the drawing direction
    ///
    /// Handles swap sides so every segment keeps its shape.
    pub fn reverse(&mut self) {
        self.points.reverse();
        for point in &mut self.points {
            point.swap_handles();
        }
    }

    /// Make the path run in the requested direction, reversing only if
    /// needed. Returns whether the path was reversed.
    pub fn correct_direction(&mut self, clockwise: bool) -> bool {
        let area = self.signed_area();
        if area == 0.0 {
            debug!("Path {} has no area, direction left unchanged", self.id);
            return false;
        }
        if (area < 0.0) != clockwise {
            self.reverse();
            true
        } else {
            false
        }
    }

    /// Bounding box of on-path positions
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?.position();
        let rect = self
            .points
            .iter()
            .skip(1)
            .fold(Rect::from_points(first, first), |rect, p| {
                rect.union_pt(p.position())
            });
        Some(rect)
    }

    /// Move every point by (dx, dy); handle offsets ride along
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let offset = Vec2::new(dx, dy);
        for point in &mut self.points {
            point.set_position(point.position() + offset);
        }
    }

    /// Center of the bounding box, or the origin for an empty path
    pub fn center(&self) -> Point {
        self.bounds().map(|r| r.center()).unwrap_or(Point::ZERO)
    }

    /// Give `point` an outgoing handle, promoting a corner to a cusp so the
    /// segment classifier sees the handle
    pub(crate) fn attach_out_handle(point: &mut PathPoint, offset: Vec2) {
        if offset == Vec2::ZERO {
            return;
        }
        point.set_control_out(offset);
        if !point.kind.is_curve_like() {
            point.kind = PointKind::Curve;
            point.constraint = HandleConstraint::Broken;
        }
    }

    /// Close the path, folding a final curve point that lands on the first
    /// point into it
    ///
    /// Only a curve-like point with an incoming handle is folded, which is
    /// what a closing cubic produces. A corner repeating the first position
    /// is a real point and stays.
    pub(crate) fn close_merging_endpoint(&mut self) {
        self.is_closed = true;
        let n = self.points.len();
        if n < 2 {
            return;
        }
        let last = &self.points[n - 1];
        if last.position() != self.points[0].position()
            || !last.kind.is_curve_like()
            || !last.has_in_handle()
        {
            return;
        }
        if let Some(last) = self.points.pop() {
            let first = &mut self.points[0];
            first.set_control_in(last.control_in());
            if !first.kind.is_curve_like() {
                first.kind = PointKind::Curve;
                first.constraint = HandleConstraint::Broken;
            }
        }
    }

    /// Convert to a kurbo path
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        let Some(first) = self.points.first() else {
            return bez;
        };
        bez.move_to(first.position());
        for segment in self.segments() {
            let from = &self.points[segment.from];
            let to = &self.points[segment.to];
            let closing = segment.to == 0;
            match segment.kind {
                SegmentKind::Line if closing => {}
                SegmentKind::Line => bez.line_to(to.position()),
                SegmentKind::Cubic => {
                    bez.curve_to(from.control_out_point(), to.control_in_point(), to.position())
                }
            }
        }
        if self.is_closed {
            bez.close_path();
        }
        bez
    }

    /// Convert a kurbo path into one glyph path per subpath
    ///
    /// Quadratic segments are raised to cubics.
    pub fn from_bezpath(bez: &BezPath) -> Vec<GlyphPath> {
        let mut paths = Vec::new();
        let mut current: Option<GlyphPath> = None;

        for el in bez.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if let Some(done) = current.take() {
                        paths.push(done);
                    }
                    let mut path = GlyphPath::new();
                    path.push_point(p.x, p.y, PointKind::Corner);
                    current = Some(path);
                }
                PathEl::LineTo(p) => {
                    let path = current.get_or_insert_with(GlyphPath::new);
                    path.push_point(p.x, p.y, PointKind::Corner);
                }
                PathEl::QuadTo(q, p) => {
                    let path = current.get_or_insert_with(GlyphPath::new);
                    let start = path.points.last().map(PathPoint::position).unwrap_or(q);
                    let c1 = start + (q - start) * (2.0 / 3.0);
                    let c2 = p + (q - p) * (2.0 / 3.0);
                    push_cubic(path, c1, c2, p);
                }
                PathEl::CurveTo(c1, c2, p) => {
                    let path = current.get_or_insert_with(GlyphPath::new);
                    push_cubic(path, c1, c2, p);
                }
                PathEl::ClosePath => {
                    if let Some(mut done) = current.take() {
                        done.close_merging_endpoint();
                        paths.push(done);
                    }
                }
            }
        }
        if let Some(done) = current.take() {
            paths.push(done);
        }
        paths.retain(|p| !p.is_empty());
        paths
    }
}

/// Append a cubic segment ending at `end` to `path`
pub(crate) fn push_cubic(path: &mut GlyphPath, c1: Point, c2: Point, end: Point) {
    if let Some(prev) = path.points.last_mut() {
        let offset = c1 - prev.position();
        GlyphPath::attach_out_handle(prev, offset);
    }
    path.push(PathPoint::curve(end.x, end.y).with_handles(c2 - end, Vec2::ZERO));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> GlyphPath {
        let mut path = GlyphPath::new();
        path.add_rectangle(Rect::new(0.0, 0.0, 100.0, 100.0));
        path
    }

    #[test]
    fn test_add_rectangle() {
        let path = square();
        assert!(path.is_closed);
        assert_eq!(
            path.positions(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ]
        );
        assert!(path.points.iter().all(|p| p.kind == PointKind::Corner));
    }

    #[test]
    fn test_signed_area_and_direction() {
        let mut path = square();
        assert_eq!(path.signed_area(), 10_000.0);
        assert!(!path.is_clockwise());

        assert!(path.correct_direction(true));
        assert!(path.is_clockwise());
        assert_eq!(path.signed_area(), -10_000.0);

        // Already clockwise: nothing to do
        assert!(!path.correct_direction(true));
    }

    #[test]
    fn test_degenerate_paths_have_no_area() {
        let mut path = GlyphPath::new();
        path.push_point(0.0, 0.0, PointKind::Corner);
        path.push_point(10.0, 0.0, PointKind::Corner);
        assert_eq!(path.signed_area(), 0.0);
        assert!(!path.correct_direction(true));
    }

    #[test]
    fn test_reverse_swaps_handles() {
        let mut path = GlyphPath::new();
        path.push(PathPoint::curve(0.0, 0.0).with_handles(Vec2::new(-1.0, 0.0), Vec2::new(2.0, 0.0)));
        path.push(PathPoint::corner(10.0, 0.0));
        path.reverse();
        assert_eq!(path.points[1].position(), Point::new(0.0, 0.0));
        assert_eq!(path.points[1].control_in(), Vec2::new(2.0, 0.0));
        assert_eq!(path.points[1].control_out(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_circle_geometry() {
        let mut path = GlyphPath::new();
        path.add_circle(Point::new(50.0, 50.0), 10.0);
        assert_eq!(path.len(), 4);
        assert!(path.is_closed);
        assert!(path.signed_area() > 0.0);
        let bounds = path.bounds().unwrap();
        assert_eq!(bounds, Rect::new(40.0, 40.0, 60.0, 60.0));
        for point in &path.points {
            assert_eq!(point.constraint, HandleConstraint::Symmetric);
            let sum = point.control_in() + point.control_out();
            assert!(sum.x.abs() < 1e-12 && sum.y.abs() < 1e-12);
        }
    }

    #[test]
    fn test_point_lookup_by_id() {
        let mut path = square();
        let id = path.points[2].id;
        assert_eq!(path.index_of(id), Some(2));
        path.point_mut(id).unwrap().x = 150.0;
        assert_eq!(path.point(id).unwrap().x, 150.0);
        let removed = path.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(path.len(), 3);
        assert!(path.point(id).is_none());
    }

    #[test]
    fn test_duplicate_has_fresh_ids() {
        let path = square();
        let copy = path.duplicate();
        assert_ne!(path.id, copy.id);
        assert_eq!(path.positions(), copy.positions());
        for (a, b) in path.points.iter().zip(&copy.points) {
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn test_bezpath_round_trip() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((100.0, 0.0));
        bez.curve_to((100.0, 50.0), (50.0, 100.0), (0.0, 100.0));
        bez.close_path();

        let paths = GlyphPath::from_bezpath(&bez);
        assert_eq!(paths.len(), 1);
        let path = &paths[0];
        assert!(path.is_closed);
        assert_eq!(path.len(), 3);
        assert_eq!(path.points[1].control_out(), Vec2::new(0.0, 50.0));
        assert_eq!(path.points[2].control_in(), Vec2::new(50.0, 0.0));

        let back = path.to_bezpath();
        assert_eq!(back.elements(), bez.elements());
    }

    #[test]
    fn test_from_bezpath_merges_closing_curve_point() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((10.0, 0.0));
        bez.curve_to((10.0, 5.0), (5.0, 0.0), (0.0, 0.0));
        bez.close_path();
        let paths = GlyphPath::from_bezpath(&bez);
        assert_eq!(paths[0].len(), 2);
        assert_eq!(paths[0].points[0].control_in(), Vec2::new(5.0, 0.0));
        assert_eq!(paths[0].points[0].kind, PointKind::Curve);
    }

    #[test]
    fn test_from_bezpath_keeps_repeated_corner() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((10.0, 0.0));
        bez.line_to((10.0, 10.0));
        bez.line_to((0.0, 0.0));
        bez.close_path();
        let paths = GlyphPath::from_bezpath(&bez);
        assert_eq!(paths[0].len(), 4);
        assert!(paths[0].is_closed);
    }

    #[test]
    fn test_from_bezpath_splits_subpaths() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((10.0, 0.0));
        bez.move_to((20.0, 0.0));
        bez.quad_to((25.0, 10.0), (30.0, 0.0));
        let paths = GlyphPath::from_bezpath(&bez);
        assert_eq!(paths.len(), 2);
        assert!(!paths[1].is_closed);
        let quad_end = &paths[1].points[1];
        assert_eq!(quad_end.kind, PointKind::Curve);
        assert!(quad_end.has_in_handle());
    }
}
