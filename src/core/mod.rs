//! Core application functionality
//!
//! This module contains the command line side of the crate:
//! - Settings defaults and the user config file
//! - CLI parsing and validation
//! - The runner that connects input, algorithms and output

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::{execute, run_app};
pub use settings::GeometrySettings;
