//! Adjacency extraction entry points

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use super::patterns::classify;
use super::state::ScanState;
use crate::topology::AdjacencyMap;

/// Errors that can occur while extracting adjacencies
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scan dump lines and collect one adjacency per peer row
///
/// A repeated `(host, local interface)` key replaces the earlier value.
pub fn extract<'a, I>(lines: I) -> AdjacencyMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = ScanState::default();
    let mut result = AdjacencyMap::new();

    for line in lines {
        if let Some((local, remote)) = state.advance(classify(line)) {
            if let Some(previous) = result.insert(local.clone(), remote) {
                trace!("{} reported twice, replacing {}", local, previous);
            }
        }
    }

    if state.in_section() {
        debug!("Input ended inside the kvstore adjacency section");
    }

    result
}

/// Scan a whole dump held in memory
#[must_use]
pub fn extract_str(text: &str) -> AdjacencyMap {
    extract(text.lines())
}

/// Read a dump from disk and scan it
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn extract_file(path: &Path) -> Result<AdjacencyMap, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(extract_str(&text))
}
