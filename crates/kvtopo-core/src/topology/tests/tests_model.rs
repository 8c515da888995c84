//! Tests for topology model types

use crate::topology::model::{AdjacencyMap, Endpoint};

fn ep(node: &str, intf: &str) -> Endpoint {
    Endpoint::new(node, intf)
}

#[test]
fn test_endpoint_concatenated_has_no_separator() {
    assert_eq!(ep("r1.example.com", "eth0").concatenated(), "r1.example.cometh0");
    assert_eq!(ep("", "").concatenated(), "");
}

#[test]
fn test_endpoint_display() {
    assert_eq!(format!("{}", ep("r1", "eth0")), "r1:eth0");
}

#[test]
fn test_insert_preserves_order() {
    let mut map = AdjacencyMap::new();
    map.insert(ep("a", "1"), ep("b", "1"));
    map.insert(ep("c", "1"), ep("d", "1"));
    map.insert(ep("b", "2"), ep("a", "2"));

    let locals: Vec<_> = map.iter().map(|a| a.local.node.as_str()).collect();
    assert_eq!(locals, vec!["a", "c", "b"]);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_insert_duplicate_key_overwrites_in_place() {
    let mut map = AdjacencyMap::new();
    assert_eq!(map.insert(ep("a", "eth0"), ep("b", "eth1")), None);
    map.insert(ep("c", "eth0"), ep("d", "eth1"));

    let replaced = map.insert(ep("a", "eth0"), ep("e", "eth9"));

    assert_eq!(replaced, Some(ep("b", "eth1")));
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&ep("a", "eth0")), Some(&ep("e", "eth9")));

    let first = map.iter().next().map(|a| a.local.clone());
    assert_eq!(first, Some(ep("a", "eth0")));
}

#[test]
fn test_contains_key_and_is_empty() {
    let mut map = AdjacencyMap::new();
    assert!(map.is_empty());
    assert!(!map.contains_key(&ep("a", "1")));

    map.insert(ep("a", "1"), ep("b", "1"));
    assert!(!map.is_empty());
    assert!(map.contains_key(&ep("a", "1")));
    assert!(!map.contains_key(&ep("b", "1")));
}

#[test]
fn test_from_iterator_applies_overwrite_rules() {
    let map: AdjacencyMap = vec![
        (ep("a", "1"), ep("b", "1")),
        (ep("a", "1"), ep("c", "1")),
    ]
    .into_iter()
    .collect();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&ep("a", "1")), Some(&ep("c", "1")));
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_serialize_as_ordered_list() {
    let mut map = AdjacencyMap::new();
    map.insert(ep("r1", "eth0"), ep("r2", "eth1"));

    let json = serde_json::to_value(&map).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {
                "local": { "node": "r1", "interface": "eth0" },
                "remote": { "node": "r2", "interface": "eth1" }
            }
        ])
    );
}
