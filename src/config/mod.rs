//! Configuration layer: paths + JSON I/O for the alias mapping.
pub mod path;
pub mod io;

pub use path::{ensure_config_file, ConfigPaths};
pub use io::{load_meetings, save_meetings};
