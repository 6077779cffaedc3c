//! Library root for zms
pub mod cli;
pub mod models;

pub mod config;
pub mod zoom;
pub mod commands;

// Convenience re-exports
pub use commands::{crud, join, list, shell_alias};
pub use config::{io as cfg_io, path as cfg_path};
