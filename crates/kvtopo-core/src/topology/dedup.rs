//! Reciprocal adjacency removal
//!
//! Every link shows up twice in a kvstore dump, once from each end. These
//! routines drop the second report so each link is drawn once.

use std::collections::HashSet;

use tracing::trace;

use super::model::{AdjacencyMap, Endpoint};

/// Strategy for deciding whether an adjacency was already recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DedupMode {
    /// Drop an entry when either of its concatenated endpoint strings occurs
    /// anywhere in the concatenation of previously kept endpoints.
    ///
    /// The Python tool kept an entry whenever one of the two strings was new.
    /// This is stricter: a link is kept only if neither end was seen. Names
    /// that happen to be substrings of earlier ones still cause false merges.
    #[default]
    Substring,
    /// Drop an entry only when the same unordered endpoint pair was kept.
    Exact,
}

impl std::fmt::Display for DedupMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Substring => "substring",
            Self::Exact => "exact",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for DedupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "exact" => Ok(Self::Exact),
            other => Err(format!("unknown dedup mode '{other}'")),
        }
    }
}

/// Remove reciprocal adjacencies, keeping the first report of each link
///
/// The result is an order-preserving subset of `map`.
#[must_use]
pub fn dedup(map: &AdjacencyMap, mode: DedupMode) -> AdjacencyMap {
    match mode {
        DedupMode::Substring => dedup_substring(map),
        DedupMode::Exact => dedup_exact(map),
    }
}

fn dedup_substring(map: &AdjacencyMap) -> AdjacencyMap {
    // Concatenation of every recorded key and value string, no separators.
    let mut seen = String::new();
    let mut kept = AdjacencyMap::new();

    for adj in map {
        let key_str = adj.local.concatenated();
        let value_str = adj.remote.concatenated();

        if seen.contains(&key_str) || seen.contains(&value_str) {
            trace!("Dropping {} -> {}", adj.local, adj.remote);
            continue;
        }

        seen.push_str(&key_str);
        seen.push_str(&value_str);
        kept.insert(adj.local.clone(), adj.remote.clone());
    }

    kept
}

fn dedup_exact(map: &AdjacencyMap) -> AdjacencyMap {
    let mut seen: HashSet<(&Endpoint, &Endpoint)> = HashSet::new();
    let mut kept = AdjacencyMap::new();

    for adj in map {
        let pair = if adj.local <= adj.remote {
            (&adj.local, &adj.remote)
        } else {
            (&adj.remote, &adj.local)
        };

        if !seen.insert(pair) {
            trace!("Dropping {} -> {}", adj.local, adj.remote);
            continue;
        }

        kept.insert(adj.local.clone(), adj.remote.clone());
    }

    kept
}
