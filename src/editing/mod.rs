//! Editing Functionality
//!
//! This module contains the path algorithms the editor runs on glyph
//! outlines:
//! - Simplification of freehand strokes
//! - Smoothing and corner detection
//! - Transforms around an anchor point
//! - Stroke expansion and the (limited) boolean operations

pub mod boolean;
pub mod corners;
pub mod freehand;
pub mod simplify;
pub mod smooth_curves;
pub mod stroke;
pub mod transform;

// Re-export commonly used items
pub use boolean::{apply_boolean, BooleanOp};
pub use corners::{detect_all_corners, detect_corners, turning_angle_at};
pub use freehand::freehand_to_path;
pub use simplify::{simplify, simplify_path};
pub use smooth_curves::{
    auto_smooth, catmull_rom_smooth, chaikin_smooth, gaussian_kernel, gaussian_smooth,
    smart_smooth, SmoothingMethod,
};
pub use stroke::{contract, expand, stroke_to_outline, LineCap, LineJoin};
pub use transform::{apply_affine, mirror, rotate, scale, skew, translate, TransformOp};
