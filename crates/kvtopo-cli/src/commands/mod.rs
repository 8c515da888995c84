//! CLI commands

pub mod extract;
pub mod render;
pub mod types;

pub use types::{ExtractArgs, RenderArgs};
