//! kvtopo-cli library
//!
//! This module exposes the internal functionality of kvtopo-cli for testing purposes.

#[doc(hidden)]
pub mod commands;
pub mod logging;
pub mod prompt;

pub use commands::types::{ExtractArgs, RenderArgs};
