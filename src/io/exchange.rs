//! Path exchange with the outside world
//!
//! Copy and paste go through the [`PathExporter`] and [`PathImporter`]
//! traits instead of a platform clipboard, so the geometry never depends on
//! one. [`TextExchange`] is an in-memory text buffer implementing both.

use super::svg::{parse_svg_path_data, serialize_paths};
use crate::path::GlyphPath;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Text encoding used for exchanged paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeFormat {
    /// SVG path data (`M`/`L`/`C`/`Z`)
    #[default]
    Svg,
    /// The path model as JSON
    Json,
}

/// A sink for outgoing paths (e.g. copy)
pub trait PathExporter {
    fn export_paths(&mut self, paths: &[GlyphPath], format: ExchangeFormat) -> Result<()>;
}

/// A source of incoming paths (e.g. paste)
pub trait PathImporter {
    fn import_paths(&self, format: ExchangeFormat) -> Result<Vec<GlyphPath>>;
}

/// Encode paths as text
pub fn encode_paths(paths: &[GlyphPath], format: ExchangeFormat) -> Result<String> {
    match format {
        ExchangeFormat::Svg => Ok(serialize_paths(paths)),
        ExchangeFormat::Json => {
            serde_json::to_string_pretty(paths).context("Failed to encode paths as JSON")
        }
    }
}

/// Decode paths from text
///
/// Decoded paths always get fresh ids, so pasting the same text twice never
/// produces two paths sharing an id.
pub fn decode_paths(text: &str, format: ExchangeFormat) -> Result<Vec<GlyphPath>> {
    let paths = match format {
        ExchangeFormat::Svg => parse_svg_path_data(text),
        ExchangeFormat::Json => {
            let paths: Vec<GlyphPath> =
                serde_json::from_str(text).context("Failed to decode paths from JSON")?;
            paths.iter().map(GlyphPath::duplicate).collect()
        }
    };
    if paths.is_empty() {
        bail!("No paths found in {:?} data", format);
    }
    Ok(paths)
}

/// In-memory exchange buffer
#[derive(Debug, Clone, Default)]
pub struct TextExchange {
    contents: Option<String>,
}

impl TextExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing text, e.g. read from stdin
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn clear(&mut self) {
        self.contents = None;
    }
}

impl PathExporter for TextExchange {
    fn export_paths(&mut self, paths: &[GlyphPath], format: ExchangeFormat) -> Result<()> {
        let text = encode_paths(paths, format)?;
        debug!("Exported {} path(s) as {:?}", paths.len(), format);
        self.contents = Some(text);
        Ok(())
    }
}

impl PathImporter for TextExchange {
    fn import_paths(&self, format: ExchangeFormat) -> Result<Vec<GlyphPath>> {
        let Some(text) = self.contents.as_deref() else {
            bail!("Exchange buffer is empty");
        };
        decode_paths(text, format)
    }
}
