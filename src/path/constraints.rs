//! Handle constraint enforcement
//!
//! Whenever one handle of a point is edited the opposite handle follows the
//! point's [`HandleConstraint`]:
//!
//! ```text
//!  in handle        point        out handle
//!      o-------------●-------------o
//! ```
//!
//! - **Symmetric**: the other handle mirrors the edited one exactly.
//! - **Asymmetric**: the other handle points the opposite way but keeps its
//!   own length.
//! - **Broken**: the other handle is left alone.
//!
//! The rules are applied regardless of point kind; a corner point simply has
//! no visible handles.

use super::point::{HandleConstraint, PathPoint};
use crate::geometry::point::{length, unit};
use kurbo::Vec2;
use tracing::debug;

/// Which of the two handles was edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    In,
    Out,
}

/// Set the incoming handle and update the outgoing one per the constraint
pub fn set_in_handle(point: &mut PathPoint, dx: f64, dy: f64) {
    set_handle(point, HandleSide::In, Vec2::new(dx, dy));
}

/// Set the outgoing handle and update the incoming one per the constraint
pub fn set_out_handle(point: &mut PathPoint, dx: f64, dy: f64) {
    set_handle(point, HandleSide::Out, Vec2::new(dx, dy));
}

/// Set one handle offset and propagate to the opposite handle
pub fn set_handle(point: &mut PathPoint, side: HandleSide, offset: Vec2) {
    let other = match side {
        HandleSide::In => {
            point.set_control_in(offset);
            point.control_out()
        }
        HandleSide::Out => {
            point.set_control_out(offset);
            point.control_in()
        }
    };

    let Some(new_other) = constrained_opposite(point.constraint, offset, other) else {
        return;
    };

    match side {
        HandleSide::In => point.set_control_out(new_other),
        HandleSide::Out => point.set_control_in(new_other),
    }
}

/// Where the opposite handle goes, or `None` if it must stay put
fn constrained_opposite(constraint: HandleConstraint, edited: Vec2, other: Vec2) -> Option<Vec2> {
    match constraint {
        HandleConstraint::Symmetric => Some(-edited),
        HandleConstraint::Asymmetric => {
            // A zero-length edit has no direction to mirror
            let direction = unit(edited)?;
            Some(-direction * length(other))
        }
        HandleConstraint::Broken => None,
    }
}

/// Change a point's constraint and bring its handles into agreement
///
/// The outgoing handle leads; when it is absent the incoming handle does.
pub fn set_constraint(point: &mut PathPoint, constraint: HandleConstraint) {
    point.constraint = constraint;
    apply_constraint(point);
}

/// Re-enforce the point's current constraint on its handles
pub fn apply_constraint(point: &mut PathPoint) {
    if point.constraint == HandleConstraint::Broken {
        return;
    }
    if point.has_out_handle() {
        let out = point.control_out();
        set_handle(point, HandleSide::Out, out);
    } else if point.has_in_handle() {
        let handle_in = point.control_in();
        set_handle(point, HandleSide::In, handle_in);
    } else {
        debug!("Point {} has no handles, constraint has nothing to enforce", point.id);
    }
}

/// Whether the two handles currently satisfy the point's constraint
pub fn satisfies_constraint(point: &PathPoint, tolerance: f64) -> bool {
    let handle_in = point.control_in();
    let out = point.control_out();
    match point.constraint {
        HandleConstraint::Broken => true,
        HandleConstraint::Symmetric => length(handle_in + out) <= tolerance,
        HandleConstraint::Asymmetric => match (unit(handle_in), unit(out)) {
            (Some(a), Some(b)) => length(a + b) <= tolerance,
            _ => true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::point::PointKind;

    fn curve_point(constraint: HandleConstraint) -> PathPoint {
        PathPoint::new(100.0, 100.0, PointKind::Curve)
            .with_handles(Vec2::new(-20.0, 0.0), Vec2::new(30.0, 0.0))
            .with_constraint(constraint)
    }

    #[test]
    fn test_symmetric_mirrors_out_handle() {
        let mut point = curve_point(HandleConstraint::Symmetric);
        set_out_handle(&mut point, 10.0, 0.0);
        assert_eq!(point.control_in(), Vec2::new(-10.0, 0.0));
        assert_eq!(point.control_out(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_symmetric_mirrors_in_handle() {
        let mut point = curve_point(HandleConstraint::Symmetric);
        set_in_handle(&mut point, 3.0, -4.0);
        assert_eq!(point.control_out(), Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn test_asymmetric_keeps_other_length() {
        let mut point = curve_point(HandleConstraint::Asymmetric);
        // Out handle was 30 long; rotate the in handle to point straight down
        set_in_handle(&mut point, 0.0, -5.0);
        let out = point.control_out();
        assert!(out.x.abs() < 1e-9);
        assert!((out.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_asymmetric_zero_edit_leaves_other_unchanged() {
        let mut point = curve_point(HandleConstraint::Asymmetric);
        set_out_handle(&mut point, 0.0, 0.0);
        assert_eq!(point.control_out(), Vec2::ZERO);
        assert_eq!(point.control_in(), Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn test_broken_leaves_other_unchanged() {
        let mut point = curve_point(HandleConstraint::Broken);
        set_out_handle(&mut point, 0.0, 50.0);
        assert_eq!(point.control_in(), Vec2::new(-20.0, 0.0));
        assert_eq!(point.control_out(), Vec2::new(0.0, 50.0));
    }

    #[test]
    fn test_corner_points_are_updated_too() {
        let mut point = PathPoint::corner(0.0, 0.0).with_constraint(HandleConstraint::Symmetric);
        set_out_handle(&mut point, 7.0, 1.0);
        assert_eq!(point.control_in(), Vec2::new(-7.0, -1.0));
    }

    #[test]
    fn test_switching_constraint_realigns_handles() {
        let mut point = PathPoint::curve(0.0, 0.0)
            .with_handles(Vec2::new(0.0, 10.0), Vec2::new(20.0, 0.0));
        assert!(satisfies_constraint(&point, 1e-9));

        set_constraint(&mut point, HandleConstraint::Asymmetric);
        let handle_in = point.control_in();
        assert!((handle_in.x + 10.0).abs() < 1e-9);
        assert!(handle_in.y.abs() < 1e-9);
        assert!(satisfies_constraint(&point, 1e-9));

        set_constraint(&mut point, HandleConstraint::Symmetric);
        assert_eq!(point.control_in(), Vec2::new(-20.0, 0.0));
    }
}
