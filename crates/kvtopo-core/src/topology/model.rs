//! Topology model types

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

/// One side of an adjacency: a router name and one of its interfaces
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Endpoint {
    /// Host or peer name as printed in the dump
    pub node: String,
    /// Interface name on that node
    pub interface: String,
}

impl Endpoint {
    /// Create a new endpoint
    #[must_use]
    pub fn new(node: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            interface: interface.into(),
        }
    }

    /// Node name followed directly by the interface name, no separator
    #[must_use]
    pub fn concatenated(&self) -> String {
        let mut s = String::with_capacity(self.node.len() + self.interface.len());
        s.push_str(&self.node);
        s.push_str(&self.interface);
        s
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.node, self.interface)
    }
}

/// A single reported adjacency, keyed by its local side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    /// Reporting host and its local interface
    pub local: Endpoint,
    /// Neighbor and the interface it uses towards the host
    pub remote: Endpoint,
}

/// Insertion-ordered mapping from local endpoint to remote endpoint
///
/// Re-inserting an existing key replaces the value but keeps the entry at
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    entries: Vec<Adjacency>,
    index: HashMap<Endpoint, usize>,
}

impl AdjacencyMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an adjacency, returning the value it replaced
    pub fn insert(&mut self, local: Endpoint, remote: Endpoint) -> Option<Endpoint> {
        if let Some(&pos) = self.index.get(&local) {
            return Some(std::mem::replace(&mut self.entries[pos].remote, remote));
        }
        self.index.insert(local.clone(), self.entries.len());
        self.entries.push(Adjacency { local, remote });
        None
    }

    /// Look up the remote side for a local endpoint
    #[must_use]
    pub fn get(&self, local: &Endpoint) -> Option<&Endpoint> {
        self.index.get(local).map(|&pos| &self.entries[pos].remote)
    }

    /// Whether the map has an entry for `local`
    #[must_use]
    pub fn contains_key(&self, local: &Endpoint) -> bool {
        self.index.contains_key(local)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Adjacency> {
        self.entries.iter()
    }
}

impl FromIterator<(Endpoint, Endpoint)> for AdjacencyMap {
    fn from_iter<I: IntoIterator<Item = (Endpoint, Endpoint)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (local, remote) in iter {
            map.insert(local, remote);
        }
        map
    }
}

impl<'a> IntoIterator for &'a AdjacencyMap {
    type Item = &'a Adjacency;
    type IntoIter = std::slice::Iter<'a, Adjacency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for AdjacencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
