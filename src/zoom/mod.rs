//! Join URL construction and the platform URL opener.
pub mod client;

pub use client::{join_url, SystemOpener, UrlOpener};
