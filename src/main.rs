//! Path geometry tools from the Bezy font editor, on the command line.
//!
//! The enjoyment of one's tools is an essential ingredient of successful work.
//! — Donald Knuth

use bezy_geometry::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    match core::runner::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
