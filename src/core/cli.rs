//! Command line interface for the Bezy geometry tools
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Paths come in as SVG path data (or JSON)
//! and results go to stdout, so commands can be piped into each other.

use crate::editing::{LineCap, LineJoin};
use crate::geometry::Quadrant;
use crate::io::ExchangeFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bezy geometry CLI arguments
///
/// Examples:
///   bezy-geometry --path "M 0 0 L 100 0 L 100 100 Z" info
///   bezy-geometry --input stroke.svgpath simplify --tolerance 1.5
///   bezy-geometry --path "M 0 0 L 50 80 L 100 0" smooth --method catmull-rom
///   bezy-geometry --path "M 0 0 L 100 0" stroke --width 30 --cap round
///   bezy-geometry --path "M 0 0 L 100 0 L 0 100 Z" transform --rotate 90 --anchor bottom-left
///   cat glyph.json | bezy-geometry --format json json
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "bezy-geometry",
    version,
    about = "Path geometry tools from the Bezy font editor",
    long_about = "Simplify, smooth, transform and stroke glyph outlines given as SVG path data (M/L/C/Z, absolute coordinates) or as JSON. Results are written to stdout."
)]
pub struct CliArgs {
    /// Path data given directly on the command line
    #[clap(
        long = "path",
        short = 'p',
        help = "Path data to operate on",
        long_help = "Path data to operate on, e.g. \"M 0 0 L 100 0 L 100 100 Z\". Takes precedence over --input; if neither is given the data is read from stdin.",
        conflicts_with = "input"
    )]
    pub path_data: Option<String>,

    /// File containing path data
    #[clap(
        long = "input",
        short = 'i',
        help = "File to read path data from",
        long_help = "File to read path data from. If neither --path nor --input is given the data is read from stdin."
    )]
    pub input: Option<PathBuf>,

    /// Encoding of the input, and of the output of geometry commands
    #[clap(long = "format", short = 'f', value_enum, default_value_t = ExchangeFormat::Svg)]
    pub format: ExchangeFormat,

    /// Log debug output to stderr
    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,

    /// Also write logs to ~/.config/bezy/logs/
    #[clap(long = "log-file", help = "Write logs to ~/.config/bezy/logs/ as well")]
    pub log_file: bool,

    /// Initialize user configuration directory with a geometry.json
    #[clap(
        long = "new-config",
        help = "Initialize ~/.config/bezy with a geometry.json",
        long_help = "Initialize the ~/.config/bezy directory with a geometry.json holding every default value, so the defaults can be changed without command line flags."
    )]
    pub new_config: bool,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

/// Operation to run on every input path
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Drop points that deviate less than the tolerance from their chord
    Simplify {
        #[clap(long, short = 't')]
        tolerance: Option<f64>,
    },
    /// Smooth the path with one of the smoothing methods
    Smooth {
        #[clap(long, short = 'm', value_enum, default_value_t = SmoothKind::Auto)]
        method: SmoothKind,
        #[clap(long)]
        iterations: Option<usize>,
        #[clap(long)]
        tension: Option<f64>,
        #[clap(long)]
        radius: Option<usize>,
        #[clap(long)]
        sigma: Option<f64>,
        /// Corner threshold in degrees, for the smart method
        #[clap(long)]
        threshold: Option<f64>,
    },
    /// List the indices of corner points
    Corners {
        /// Turning angle in degrees above which a point is a corner
        #[clap(long, short = 't')]
        threshold: Option<f64>,
        /// Also judge the first and last point of closed paths
        #[clap(long)]
        all: bool,
    },
    /// Scale, rotate, skew, mirror and translate, in that order
    Transform {
        #[clap(long, allow_negative_numbers = true)]
        scale_x: Option<f64>,
        #[clap(long, allow_negative_numbers = true)]
        scale_y: Option<f64>,
        /// Counter-clockwise rotation in degrees
        #[clap(long, allow_negative_numbers = true)]
        rotate: Option<f64>,
        #[clap(long, allow_negative_numbers = true)]
        skew_x: Option<f64>,
        #[clap(long, allow_negative_numbers = true)]
        skew_y: Option<f64>,
        #[clap(long)]
        mirror_horizontal: bool,
        #[clap(long)]
        mirror_vertical: bool,
        #[clap(long, allow_negative_numbers = true)]
        translate_x: Option<f64>,
        #[clap(long, allow_negative_numbers = true)]
        translate_y: Option<f64>,
        /// Point of each path's bounding box the transform is centered on
        #[clap(long, short = 'a', value_enum, default_value_t = Quadrant::Center)]
        anchor: Quadrant,
    },
    /// Expand a centerline into a closed outline
    Stroke {
        #[clap(long, short = 'w')]
        width: Option<f64>,
        #[clap(long, value_enum)]
        cap: Option<LineCap>,
        #[clap(long, value_enum)]
        join: Option<LineJoin>,
    },
    /// Grow the outline by an amount on each side
    Expand { amount: f64 },
    /// Shrink the outline by an amount on each side
    Contract { amount: f64 },
    /// Print point counts, area, direction and bounds
    Info,
    /// Print the paths as JSON
    Json,
}

/// Smoothing method names on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothKind {
    Chaikin,
    CatmullRom,
    Gaussian,
    Auto,
    Smart,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Catches missing input files and nonsensical values before any work
    /// is done, with a clear message.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.input {
            if !path.exists() {
                return Err(format!("Input file not found: {}", path.display()));
            }
            if !path.is_file() {
                return Err(format!("Input is not a file: {}", path.display()));
            }
        }

        match &self.command {
            Some(Command::Simplify {
                tolerance: Some(tolerance),
            }) if *tolerance < 0.0 => {
                Err(format!("Tolerance must not be negative, got {}", tolerance))
            }
            Some(Command::Stroke {
                width: Some(width), ..
            }) if *width <= 0.0 => Err(format!("Stroke width must be positive, got {}", width)),
            Some(Command::Expand { amount }) | Some(Command::Contract { amount })
                if *amount < 0.0 =>
            {
                Err(format!("Amount must not be negative, got {}", amount))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_subcommands() {
        let args = parse(&["bezy-geometry", "--path", "M 0 0 L 1 1", "simplify", "-t", "0.5"]);
        assert_eq!(args.path_data.as_deref(), Some("M 0 0 L 1 1"));
        assert_eq!(args.command, Some(Command::Simplify { tolerance: Some(0.5) }));

        let args = parse(&["bezy-geometry", "smooth", "--method", "catmull-rom"]);
        assert!(matches!(
            args.command,
            Some(Command::Smooth {
                method: SmoothKind::CatmullRom,
                ..
            })
        ));

        let args = parse(&["bezy-geometry", "transform", "--rotate", "90", "--anchor", "bottom-left"]);
        assert!(matches!(
            args.command,
            Some(Command::Transform {
                rotate: Some(r),
                anchor: Quadrant::BottomLeft,
                ..
            }) if r == 90.0
        ));
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["bezy-geometry"]);
        assert_eq!(args.format, ExchangeFormat::Svg);
        assert!(args.command.is_none());
        assert!(!args.verbose);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_path_conflicts_with_input() {
        assert!(CliArgs::try_parse_from(["bezy-geometry", "--path", "M 0 0", "--input", "a.txt"]).is_err());
    }

    #[test]
    fn test_validation() {
        let args = parse(&["bezy-geometry", "--input", "/definitely/not/here.svg", "info"]);
        assert!(args.validate().is_err());

        let args = parse(&["bezy-geometry", "stroke", "--width", "0"]);
        assert!(args.validate().is_err());

        let args = parse(&["bezy-geometry", "expand", "5"]);
        assert!(args.validate().is_ok());
    }
}
