//! Visual style applied to the rendered topology

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a style file
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Failed to read style file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid style file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordered Graphviz attribute list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrList(Vec<(String, String)>);

impl AttrList {
    /// Build a list from `(name, value)` pairs
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Value of an attribute, if set
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate attributes in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Graph, node and edge defaults written at the top of the DOT source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub graph: AttrList,
    pub node: AttrList,
    pub edge: AttrList,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            graph: AttrList::from_pairs(&[
                ("label", "Network Map"),
                ("fontsize", "16"),
                ("fontcolor", "white"),
                ("bgcolor", "#333333"),
                ("rankdir", "BT"),
            ]),
            node: AttrList::from_pairs(&[
                ("fontname", "Helvetica"),
                ("shape", "box"),
                ("fontcolor", "white"),
                ("color", "#006699"),
                ("style", "filled"),
                ("fillcolor", "#006699"),
                ("margin", "0.4"),
            ]),
            edge: AttrList::from_pairs(&[
                ("style", "dashed"),
                ("color", "green"),
                ("arrowhead", "open"),
                ("fontname", "Courier"),
                ("fontsize", "8"),
                ("fontcolor", "white"),
            ]),
        }
    }
}

/// User-supplied attribute overrides, as read from a JSON style file
///
/// ```json
/// { "graph": { "label": "Lab" }, "edge": { "color": "red" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub graph: BTreeMap<String, String>,
    pub node: BTreeMap<String, String>,
    pub edge: BTreeMap<String, String>,
}

impl Style {
    /// Apply overrides on top of this style
    #[must_use]
    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        for (name, value) in overrides.graph {
            self.graph.set(name, value);
        }
        for (name, value) in overrides.node {
            self.node.set(name, value);
        }
        for (name, value) in overrides.edge {
            self.edge.set(name, value);
        }
        self
    }

    /// Load the default style with overrides from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid style.
    pub fn from_json_file(path: &Path) -> Result<Self, StyleError> {
        let text = std::fs::read_to_string(path).map_err(|source| StyleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides: StyleOverrides =
            serde_json::from_str(&text).map_err(|source| StyleError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::default().with_overrides(overrides))
    }
}
