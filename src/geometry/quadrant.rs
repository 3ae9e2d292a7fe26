//! Quadrant system for choosing transform anchors
//!
//! This module provides a 9-point grid system (like a tic-tac-toe board) for
//! picking a point on a bounding box, e.g. the center a rotation pivots on.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Nine positions in a 2D grid, used to pick an anchor on a bounding box
///
/// Think of this as a 3x3 grid (y grows upwards, as in font design space):
///
/// ```text
/// TopLeft     Top     TopRight
/// Left        Center  Right
/// BottomLeft  Bottom  BottomRight
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    #[default]
    Center,
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Quadrant {
    /// The point this quadrant names on `rect`, in design space (y up)
    pub fn point_in_design_space_rect(self, rect: Rect) -> Point {
        let rect = rect.abs();
        let center = rect.center();
        let x = match self {
            Quadrant::TopLeft | Quadrant::Left | Quadrant::BottomLeft => rect.x0,
            Quadrant::TopRight | Quadrant::Right | Quadrant::BottomRight => rect.x1,
            Quadrant::Top | Quadrant::Center | Quadrant::Bottom => center.x,
        };
        let y = match self {
            Quadrant::TopLeft | Quadrant::Top | Quadrant::TopRight => rect.y1,
            Quadrant::BottomLeft | Quadrant::Bottom | Quadrant::BottomRight => rect.y0,
            Quadrant::Left | Quadrant::Center | Quadrant::Right => center.y,
        };
        Point::new(x, y)
    }
}
