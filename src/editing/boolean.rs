//! Boolean operations between two contours
//!
//! There is no clipping here. Union and subtract only orient the second
//! contour relative to the first so that a non-zero fill renders the
//! expected result when the contours nest; overlapping contours are left
//! overlapping. Intersect and exclude are not supported yet and return the
//! first contour unchanged.

use crate::path::GlyphPath;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
    Exclude,
}

impl BooleanOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BooleanOp::Union => "union",
            BooleanOp::Subtract => "subtract",
            BooleanOp::Intersect => "intersect",
            BooleanOp::Exclude => "exclude",
        }
    }
}

/// Combine contour `b` into contour `a`
///
/// Returns fresh copies; neither input is touched.
pub fn apply_boolean(a: &GlyphPath, b: &GlyphPath, op: BooleanOp) -> Vec<GlyphPath> {
    let first = a.duplicate();
    let mut second = b.duplicate();
    let a_clockwise = a.is_clockwise();

    match op {
        BooleanOp::Union => {
            second.correct_direction(a_clockwise);
            debug!("Union of {} and {}: kept both contours", a.id, b.id);
            vec![first, second]
        }
        BooleanOp::Subtract => {
            second.correct_direction(!a_clockwise);
            debug!("Subtract {} from {}: second contour reversed to a counter", b.id, a.id);
            vec![first, second]
        }
        BooleanOp::Intersect | BooleanOp::Exclude => {
            warn!(
                "Boolean {} is not supported, returning {} unchanged",
                op.as_str(),
                a.id
            );
            vec![first]
        }
    }
}
