//! Path interchange: SVG path data, JSON and the exchange traits

pub mod exchange;
pub mod svg;

pub use exchange::{decode_paths, encode_paths, ExchangeFormat, PathExporter, PathImporter, TextExchange};
pub use svg::{parse_svg_path, parse_svg_path_data, serialize_paths, serialize_to_svg_path_data};
