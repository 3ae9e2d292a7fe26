//! Bezy geometry
//!
//! The path model and path algorithms of the Bezy font editor: handle
//! constraints, simplification, smoothing, corner detection, transforms,
//! stroking and SVG path data interchange.
pub mod core;
pub mod editing;
pub mod geometry;
pub mod io;
pub mod logging;
pub mod path;
