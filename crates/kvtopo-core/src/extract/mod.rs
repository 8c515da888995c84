//! Extract module: Adjacency scanning of OpenR show-tech dumps
//!
//! Walks the dump top to bottom, tracking whether the scanner is inside the
//! `breeze kvstore adj` section and which host is currently reporting, and
//! records one adjacency per peer row.

mod patterns;
mod run;
mod state;

pub use patterns::{classify, LineKind};
pub use run::{extract, extract_file, extract_str, ExtractError};
pub use state::ScanState;
