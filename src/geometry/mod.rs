//! Geometric Primitives and Operations

pub mod point;
pub mod quadrant;

// Re-export commonly used items
pub use point::{perpendicular_distance, turning_angle, Point2D};
pub use quadrant::Quadrant;
