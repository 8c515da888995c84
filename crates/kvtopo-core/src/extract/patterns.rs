//! Line classification for the kvstore adjacency dump

use std::sync::LazyLock;

use regex::Regex;

/// Banner opening the adjacency section
const SECTION_START: &str = r"^.*breeze kvstore adj.+";
/// Any breeze banner; closes the adjacency section
const SECTION_END: &str = r"^.*breeze \S+.+";
/// `> <host> => Version: <n>`
const HOST_HEADER: &str = r"^>\s(\S+\.\S+)\s=>\sVersion:\s\d+";
/// `<peer> <local-intf> <remote-intf> <metric> <label> ...`
const PEER_ROW: &str = r"^(\S+\.\w*\d)\s+(\w+\S+)\s+(\w+\S+)\s+\d+\s+\d+.+";

#[allow(clippy::expect_used)]
static SECTION_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SECTION_START).expect("valid regex"));
#[allow(clippy::expect_used)]
static SECTION_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SECTION_END).expect("valid regex"));
#[allow(clippy::expect_used)]
static HOST_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HOST_HEADER).expect("valid regex"));
#[allow(clippy::expect_used)]
static PEER_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PEER_ROW).expect("valid regex"));

/// What a single dump line means to the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only
    Blank,
    /// `breeze kvstore adj` banner
    SectionStart,
    /// Any other breeze banner
    SectionEnd,
    /// Start of one host's adjacency list
    HostHeader {
        host: &'a str,
    },
    /// One neighbor of the current host
    PeerRow {
        peer: &'a str,
        local_interface: &'a str,
        remote_interface: &'a str,
    },
    /// Anything else (column headings, other sections, noise)
    Other,
}

/// Classify a line with its trailing newline already removed
///
/// Checks run in a fixed order: section start, host header, peer row,
/// section end. The start banner also matches the broader end pattern, and
/// a peer row may mention `breeze`, so the order is significant.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if SECTION_START_RE.is_match(line) {
        return LineKind::SectionStart;
    }
    if let Some(caps) = HOST_HEADER_RE.captures(line) {
        if let Some(host) = caps.get(1) {
            return LineKind::HostHeader {
                host: host.as_str(),
            };
        }
    }
    if let Some(caps) = PEER_ROW_RE.captures(line) {
        if let (Some(peer), Some(local), Some(remote)) = (caps.get(1), caps.get(2), caps.get(3)) {
            return LineKind::PeerRow {
                peer: peer.as_str(),
                local_interface: local.as_str(),
                remote_interface: remote.as_str(),
            };
        }
    }
    if SECTION_END_RE.is_match(line) {
        return LineKind::SectionEnd;
    }
    LineKind::Other
}
