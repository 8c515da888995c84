//! Scanner state machine

use tracing::{debug, trace};

use super::patterns::LineKind;
use crate::topology::Endpoint;

/// Position of the scanner within the dump
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Outside the adjacency section
    #[default]
    Outside,
    /// Inside the section, before the first host header
    InSection,
    /// Inside the section; peer rows belong to `host`
    InHost { host: String },
}

impl ScanState {
    /// Whether the scanner is inside the adjacency section
    #[must_use]
    pub fn in_section(&self) -> bool {
        !matches!(self, Self::Outside)
    }

    /// Host whose peer rows are currently being read
    #[must_use]
    pub fn current_host(&self) -> Option<&str> {
        match self {
            Self::InHost { host } => Some(host),
            Self::Outside | Self::InSection => None,
        }
    }

    /// Apply one classified line, returning the adjacency it reports
    pub fn advance(&mut self, line: LineKind<'_>) -> Option<(Endpoint, Endpoint)> {
        match line {
            LineKind::Blank | LineKind::Other => None,
            LineKind::SectionStart => {
                if !self.in_section() {
                    debug!("Entering kvstore adjacency section");
                    *self = Self::InSection;
                }
                None
            }
            _ if !self.in_section() => None,
            LineKind::HostHeader { host } => {
                debug!("Reading adjacencies reported by {}", host);
                *self = Self::InHost {
                    host: host.to_string(),
                };
                None
            }
            LineKind::PeerRow {
                peer,
                local_interface,
                remote_interface,
            } => match self.current_host() {
                Some(host) => Some((
                    Endpoint::new(host, local_interface),
                    Endpoint::new(peer, remote_interface),
                )),
                None => {
                    trace!("Skipping peer row for {} with no host header", peer);
                    None
                }
            },
            LineKind::SectionEnd => {
                debug!("Leaving kvstore adjacency section");
                *self = Self::Outside;
                None
            }
        }
    }
}
