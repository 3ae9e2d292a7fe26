//! Editable outline points
//!
//! A [`PathPoint`] is an on-path position with an optional pair of bezier
//! handles. Handles are stored as offsets relative to the point, so moving a
//! point carries its handles along without touching them.

use super::ids::PointId;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Point kind, deciding how the adjacent segments are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// No curvature, adjacent segments are straight unless the neighbour
    /// brings a handle
    #[default]
    Corner,
    /// On-path point with bezier handles
    #[serde(alias = "smooth")]
    Curve,
    /// Auxiliary off-path point
    Control,
    /// Smooth point whose handles are managed automatically
    Auto,
}

impl PointKind {
    /// Curve-like points carry meaningful handles
    pub fn is_curve_like(self) -> bool {
        matches!(self, PointKind::Curve | PointKind::Auto)
    }

    /// Check if this point kind lies on the outline
    pub fn is_on_path(self) -> bool {
        !matches!(self, PointKind::Control)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PointKind::Corner => "corner",
            PointKind::Curve => "curve",
            PointKind::Control => "control",
            PointKind::Auto => "auto",
        }
    }
}

/// How a point's two handles move relative to each other when one is edited
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleConstraint {
    /// Equal length, opposite direction
    Symmetric,
    /// Opposite direction, each handle keeps its own length
    Asymmetric,
    /// Handles are independent
    #[default]
    Broken,
}

/// A point in a glyph outline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    #[serde(default = "PointId::next")]
    pub id: PointId,
    /// Position in font design units
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub kind: PointKind,
    #[serde(default)]
    pub constraint: HandleConstraint,
    /// Incoming handle, relative to (x, y)
    #[serde(default)]
    pub control_in_x: f64,
    #[serde(default)]
    pub control_in_y: f64,
    /// Outgoing handle, relative to (x, y)
    #[serde(default)]
    pub control_out_x: f64,
    #[serde(default)]
    pub control_out_y: f64,
}

impl PathPoint {
    /// Create a point without handles
    pub fn new(x: f64, y: f64, kind: PointKind) -> Self {
        Self {
            id: PointId::next(),
            x,
            y,
            kind,
            constraint: HandleConstraint::default(),
            control_in_x: 0.0,
            control_in_y: 0.0,
            control_out_x: 0.0,
            control_out_y: 0.0,
        }
    }

    /// Create a corner point
    pub fn corner(x: f64, y: f64) -> Self {
        Self::new(x, y, PointKind::Corner)
    }

    /// Create a curve point
    pub fn curve(x: f64, y: f64) -> Self {
        Self::new(x, y, PointKind::Curve)
    }

    /// Set both handles (relative offsets) without applying any constraint
    pub fn with_handles(mut self, control_in: Vec2, control_out: Vec2) -> Self {
        self.set_control_in(control_in);
        self.set_control_out(control_out);
        self
    }

    /// Set the handle constraint
    pub fn with_constraint(mut self, constraint: HandleConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Incoming handle offset
    pub fn control_in(&self) -> Vec2 {
        Vec2::new(self.control_in_x, self.control_in_y)
    }

    /// Outgoing handle offset
    pub fn control_out(&self) -> Vec2 {
        Vec2::new(self.control_out_x, self.control_out_y)
    }

    /// Raw setter, no constraint is applied. See [`super::constraints`].
    pub fn set_control_in(&mut self, v: Vec2) {
        self.control_in_x = v.x;
        self.control_in_y = v.y;
    }

    /// Raw setter, no constraint is applied. See [`super::constraints`].
    pub fn set_control_out(&mut self, v: Vec2) {
        self.control_out_x = v.x;
        self.control_out_y = v.y;
    }

    /// Absolute position of the incoming handle
    pub fn control_in_point(&self) -> Point {
        self.position() + self.control_in()
    }

    /// Absolute position of the outgoing handle
    pub fn control_out_point(&self) -> Point {
        self.position() + self.control_out()
    }

    /// A (0, 0) handle is absent
    pub fn has_in_handle(&self) -> bool {
        self.control_in_x != 0.0 || self.control_in_y != 0.0
    }

    pub fn has_out_handle(&self) -> bool {
        self.control_out_x != 0.0 || self.control_out_y != 0.0
    }

    /// Drop both handles
    pub fn clear_handles(&mut self) {
        self.set_control_in(Vec2::ZERO);
        self.set_control_out(Vec2::ZERO);
    }

    /// Swap the incoming and outgoing handles (used when reversing a path)
    pub fn swap_handles(&mut self) {
        std::mem::swap(&mut self.control_in_x, &mut self.control_out_x);
        std::mem::swap(&mut self.control_in_y, &mut self.control_out_y);
    }

    /// Copy of this point with a fresh id
    pub fn duplicate(&self) -> Self {
        Self {
            id: PointId::next(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let point = PathPoint::corner(100.0, 200.0);
        assert_eq!(point.position(), Point::new(100.0, 200.0));
        assert_eq!(point.kind, PointKind::Corner);
        assert_eq!(point.constraint, HandleConstraint::Broken);
        assert!(!point.has_in_handle());
        assert!(!point.has_out_handle());
    }

    #[test]
    fn test_absolute_handles() {
        let point = PathPoint::curve(10.0, 20.0)
            .with_handles(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 2.0));
        assert_eq!(point.control_in_point(), Point::new(5.0, 20.0));
        assert_eq!(point.control_out_point(), Point::new(15.0, 22.0));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(PointKind::Curve.is_curve_like());
        assert!(PointKind::Auto.is_curve_like());
        assert!(!PointKind::Corner.is_curve_like());
        assert!(!PointKind::Control.is_on_path());
    }

    #[test]
    fn test_smooth_alias_deserializes_as_curve() {
        let kind: PointKind = serde_json::from_str("\"smooth\"").unwrap();
        assert_eq!(kind, PointKind::Curve);
    }

    #[test]
    fn test_duplicate_mints_new_id() {
        let point = PathPoint::curve(1.0, 2.0);
        let copy = point.duplicate();
        assert_ne!(point.id, copy.id);
        assert_eq!(point.position(), copy.position());
    }
}
