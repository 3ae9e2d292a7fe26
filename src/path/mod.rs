//! Glyph outline data model
//!
//! Paths own their points outright; a point never belongs to two paths and
//! has no back-reference to its path. Algorithms either mutate a path's points
//! in place or build a fresh path with newly minted points.

pub mod constraints;
pub mod glyph_path;
pub mod ids;
pub mod point;
pub mod segment;

pub use constraints::{apply_constraint, set_constraint, set_in_handle, set_out_handle, HandleSide};
pub use glyph_path::GlyphPath;
pub use ids::{PathId, PointId};
pub use point::{HandleConstraint, PathPoint, PointKind};
pub use segment::{classify, Segment, SegmentKind};
