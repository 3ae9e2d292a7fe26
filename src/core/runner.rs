//! Application runner logic
//!
//! Reads the input paths, runs the requested command on each of them and
//! renders the result as text.

use crate::core::cli::{CliArgs, Command, SmoothKind};
use crate::core::config_file::ConfigFile;
use crate::core::settings::GeometrySettings;
use crate::editing::{
    contract, detect_all_corners, detect_corners, expand, simplify_path, stroke_to_outline,
    SmoothingMethod, TransformOp,
};
use crate::io::{decode_paths, encode_paths, ExchangeFormat};
use crate::logging;
use crate::path::{GlyphPath, SegmentKind};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::Read;
use tracing::info;

/// Run the command line application with the given CLI arguments.
/// Handles special CLI flags and delegates to [`execute`].
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    cli_args.validate().map_err(anyhow::Error::msg)?;
    // Held until exit so the log file is flushed
    let _log_guard = logging::init_logging(cli_args.verbose, cli_args.log_file)?;

    let settings = ConfigFile::load()
        .map(|config| GeometrySettings::from_config(&config))
        .unwrap_or_default();
    let input = read_input(&cli_args)?;
    let paths = decode_paths(&input, cli_args.format)?;
    info!("Read {} path(s)", paths.len());

    let output = execute(cli_args.command.as_ref(), &paths, &settings, cli_args.format)?;
    println!("{}", output);
    Ok(())
}

/// Input text from `--path`, `--input` or stdin, in that order of precedence
fn read_input(cli_args: &CliArgs) -> Result<String> {
    if let Some(data) = &cli_args.path_data {
        return Ok(data.clone());
    }
    if let Some(path) = &cli_args.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read path data from stdin")?;
    Ok(buffer)
}

/// Run `command` on every path and render the result
///
/// Geometry commands produce paths encoded as `format`; `corners` and `info`
/// produce a plain-text report. Without a command the paths are re-encoded
/// unchanged.
pub fn execute(
    command: Option<&Command>,
    paths: &[GlyphPath],
    settings: &GeometrySettings,
    format: ExchangeFormat,
) -> Result<String> {
    let Some(command) = command else {
        return encode_paths(paths, format);
    };

    let results: Vec<GlyphPath> = match command {
        Command::Simplify { tolerance } => {
            let tolerance = tolerance.unwrap_or(settings.simplify_tolerance);
            paths.iter().map(|p| simplify_path(p, tolerance)).collect()
        }
        Command::Smooth {
            method,
            iterations,
            tension,
            radius,
            sigma,
            threshold,
        } => {
            let method = match method {
                SmoothKind::Chaikin => SmoothingMethod::Chaikin {
                    iterations: iterations.unwrap_or(settings.chaikin_iterations),
                },
                SmoothKind::CatmullRom => SmoothingMethod::CatmullRom {
                    tension: tension.unwrap_or(settings.catmull_rom_tension),
                },
                SmoothKind::Gaussian => SmoothingMethod::Gaussian {
                    radius: radius.unwrap_or(settings.gaussian_radius),
                    sigma: sigma.unwrap_or(settings.gaussian_sigma),
                },
                SmoothKind::Auto => SmoothingMethod::Auto,
                SmoothKind::Smart => SmoothingMethod::Smart {
                    threshold_degrees: threshold.unwrap_or(settings.corner_threshold),
                },
            };
            paths.iter().map(|p| method.apply(p)).collect()
        }
        Command::Corners { threshold, all } => {
            let threshold = threshold.unwrap_or(settings.corner_threshold);
            return Ok(corner_report(paths, threshold, *all));
        }
        Command::Transform {
            scale_x,
            scale_y,
            rotate,
            skew_x,
            skew_y,
            mirror_horizontal,
            mirror_vertical,
            translate_x,
            translate_y,
            anchor,
        } => {
            let mut ops = Vec::new();
            if scale_x.is_some() || scale_y.is_some() {
                ops.push(TransformOp::Scale {
                    sx: scale_x.unwrap_or(1.0),
                    sy: scale_y.unwrap_or(1.0),
                });
            }
            if let Some(degrees) = rotate {
                ops.push(TransformOp::Rotate { degrees: *degrees });
            }
            if skew_x.is_some() || skew_y.is_some() {
                ops.push(TransformOp::Skew {
                    x_degrees: skew_x.unwrap_or(0.0),
                    y_degrees: skew_y.unwrap_or(0.0),
                });
            }
            if *mirror_horizontal || *mirror_vertical {
                ops.push(TransformOp::Mirror {
                    horizontal: *mirror_horizontal,
                    vertical: *mirror_vertical,
                });
            }
            if translate_x.is_some() || translate_y.is_some() {
                ops.push(TransformOp::Translate {
                    dx: translate_x.unwrap_or(0.0),
                    dy: translate_y.unwrap_or(0.0),
                });
            }

            paths
                .iter()
                .map(|path| {
                    let mut path = path.clone();
                    // The anchor is fixed before the first operation
                    let center = path
                        .bounds()
                        .map(|rect| anchor.point_in_design_space_rect(rect))
                        .unwrap_or_default();
                    for op in &ops {
                        op.apply(&mut path, center);
                    }
                    path
                })
                .collect()
        }
        Command::Stroke { width, cap, join } => {
            let width = width.unwrap_or(settings.stroke_width);
            let cap = cap.unwrap_or(settings.line_cap);
            let join = join.unwrap_or(settings.line_join);
            paths
                .iter()
                .map(|p| stroke_to_outline(p, width, cap, join))
                .collect()
        }
        Command::Expand { amount } => paths.iter().map(|p| expand(p, *amount)).collect(),
        Command::Contract { amount } => paths.iter().map(|p| contract(p, *amount)).collect(),
        Command::Info => return Ok(info_report(paths)),
        Command::Json => return encode_paths(paths, ExchangeFormat::Json),
    };

    encode_paths(&results, format)
}

fn corner_report(paths: &[GlyphPath], threshold: f64, all: bool) -> String {
    let mut report = String::new();
    for (i, path) in paths.iter().enumerate() {
        let corners = if all {
            detect_all_corners(path, threshold)
        } else {
            detect_corners(path, threshold)
        };
        let indices: Vec<String> = corners.iter().map(|c| c.to_string()).collect();
        let _ = writeln!(report, "path {}: [{}]", i, indices.join(", "));
    }
    report.trim_end().to_string()
}

fn info_report(paths: &[GlyphPath]) -> String {
    let mut report = String::new();
    for (i, path) in paths.iter().enumerate() {
        let segments = path.segments();
        let cubics = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Cubic)
            .count();
        let direction = match path.signed_area() {
            a if a > 0.0 => "counter-clockwise",
            a if a < 0.0 => "clockwise",
            _ => "none",
        };
        let _ = writeln!(
            report,
            "path {}: {} points, {}, {} lines, {} curves, area {}, direction {}",
            i,
            path.len(),
            if path.is_closed { "closed" } else { "open" },
            segments.len() - cubics,
            cubics,
            path.signed_area().abs(),
            direction
        );
        if let Some(bounds) = path.bounds() {
            let _ = writeln!(
                report,
                "  bounds {} {} {} {}",
                bounds.x0, bounds.y0, bounds.x1, bounds.y1
            );
        }
    }
    report.trim_end().to_string()
}
