//! End-to-end tests of the extract -> dedup -> render pipeline
//!
//! These drive the core library the same way the render command does,
//! using DOT output so no Graphviz installation is needed.

use std::fs;

use kvtopo_core::{
    dedup, extract_str, render_topology, DedupMode, Endpoint, GraphvizRenderer, OutputFormat,
    RenderGraph, Style,
};
use tempfile::TempDir;

const SHOWTECH: &str = "\
-------- breeze kvstore keys --------
adj:r1.pod1
adj:r2.pod1

-------- breeze kvstore adj --------

> r1.pod1 => Version: 11, Node Label: 0, Overloaded?: False
Neighbor    Local Intf    Remote Intf    Metric    Label    NextHop-v4    Uptime
r2.pod1     po11          po21           1         0        10.1.1.2      3d
r3.pod1     po12          po31           1         0        10.1.1.3      3d

> r2.pod1 => Version: 9, Node Label: 0, Overloaded?: False
Neighbor    Local Intf    Remote Intf    Metric    Label    NextHop-v4    Uptime
r1.pod1     po21          po11           1         0        10.1.1.1      3d
r3.pod1     po22          po32           1         0        10.1.2.3      3d

> r3.pod1 => Version: 4, Node Label: 0, Overloaded?: False
Neighbor    Local Intf    Remote Intf    Metric    Label    NextHop-v4    Uptime
r1.pod1     po31          po12           1         0        10.1.1.1      3d
r2.pod1     po32          po22           1         0        10.1.2.2      3d

-------- breeze fib unicast-routes --------
";

#[test]
fn test_raw_extraction_has_every_report() {
    let adjacencies = extract_str(SHOWTECH);
    assert_eq!(adjacencies.len(), 6);
    assert_eq!(
        adjacencies.get(&Endpoint::new("r3.pod1", "po32")),
        Some(&Endpoint::new("r2.pod1", "po22"))
    );
}

#[test]
fn test_dedup_modes_agree_on_clean_names() {
    let adjacencies = extract_str(SHOWTECH);

    let substring = dedup(&adjacencies, DedupMode::Substring);
    let exact = dedup(&adjacencies, DedupMode::Exact);

    assert_eq!(substring.len(), 3);
    assert_eq!(substring, exact);
}

#[test]
fn test_render_graph_for_triangle() {
    let topology = dedup(&extract_str(SHOWTECH), DedupMode::Substring);
    let graph = RenderGraph::from_topology(&topology);

    assert_eq!(graph.nodes(), ["r1.pod1", "r2.pod1", "r3.pod1"]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
#[allow(clippy::expect_used)]
fn test_render_dot_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let topology = dedup(&extract_str(SHOWTECH), DedupMode::Substring);
    let renderer = GraphvizRenderer::new().with_format(OutputFormat::Dot);

    let written = render_topology(
        &topology,
        &renderer,
        &Style::default(),
        &temp_dir.path().join("pod1"),
    )
    .expect("Failed to render");

    let source = fs::read_to_string(written).expect("Failed to read output");
    assert!(source.contains("0 [ label = \"r1.pod1\" ]"));
    assert!(source.contains("1 [ label = \"r2.pod1\" ]"));
    assert!(source.contains(
        "0 -- 1 [ headlabel = \"po21\" label = \"            \" taillabel = \"po11\" ]"
    ));
    assert_eq!(source.matches(" -- ").count(), 3);
}
