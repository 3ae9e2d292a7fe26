//! Default parameters for the geometry algorithms
//!
//! Built-in defaults, overridden by ~/.config/bezy/geometry.json, overridden
//! in turn by command line flags.

use crate::core::config_file::ConfigFile;
use crate::editing::LineCap;
use crate::editing::LineJoin;
use serde::{Deserialize, Serialize};

/// Default Ramer–Douglas–Peucker tolerance, in design units
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 2.0;
pub const DEFAULT_CHAIKIN_ITERATIONS: usize = 2;
pub const DEFAULT_CATMULL_ROM_TENSION: f64 = 1.0 / 6.0;
pub const DEFAULT_GAUSSIAN_RADIUS: usize = 2;
pub const DEFAULT_GAUSSIAN_SIGMA: f64 = 1.0;
/// Turning angle in degrees above which a point counts as a corner
pub const DEFAULT_CORNER_THRESHOLD: f64 = 45.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 20.0;

/// Resolved algorithm parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometrySettings {
    pub simplify_tolerance: f64,
    pub chaikin_iterations: usize,
    pub catmull_rom_tension: f64,
    pub gaussian_radius: usize,
    pub gaussian_sigma: f64,
    pub corner_threshold: f64,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            chaikin_iterations: DEFAULT_CHAIKIN_ITERATIONS,
            catmull_rom_tension: DEFAULT_CATMULL_ROM_TENSION,
            gaussian_radius: DEFAULT_GAUSSIAN_RADIUS,
            gaussian_sigma: DEFAULT_GAUSSIAN_SIGMA,
            corner_threshold: DEFAULT_CORNER_THRESHOLD,
            stroke_width: DEFAULT_STROKE_WIDTH,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }
}

impl GeometrySettings {
    /// Defaults with every value set in `config` applied on top
    pub fn from_config(config: &ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            simplify_tolerance: config.simplify_tolerance.unwrap_or(defaults.simplify_tolerance),
            chaikin_iterations: config.chaikin_iterations.unwrap_or(defaults.chaikin_iterations),
            catmull_rom_tension: config
                .catmull_rom_tension
                .unwrap_or(defaults.catmull_rom_tension),
            gaussian_radius: config.gaussian_radius.unwrap_or(defaults.gaussian_radius),
            gaussian_sigma: config.gaussian_sigma.unwrap_or(defaults.gaussian_sigma),
            corner_threshold: config.corner_threshold.unwrap_or(defaults.corner_threshold),
            stroke_width: config.stroke_width.unwrap_or(defaults.stroke_width),
            line_cap: config.line_cap.unwrap_or(defaults.line_cap),
            line_join: config.line_join.unwrap_or(defaults.line_join),
        }
    }
}
