//! Tests for the render command

#![allow(clippy::expect_used)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use kvtopo_core::{DedupMode, OutputFormat, RenderError};
use tempfile::TempDir;

use crate::commands::render::{missing_backend_hint, run};
use crate::commands::types::RenderArgs;
use crate::prompt::Prompter;

const DUMP: &str = "\
-------- breeze kvstore adj --------
> r1.example.com => Version: 3
r2.example.com.1    eth0    eth1    10    20   extra
> r2.example.com.1 => Version: 3
r3.example.com.1    eth2    eth0    10    20   extra
-------- breeze kvstore something-else --------
";

fn args(input: Option<PathBuf>, output: Option<PathBuf>) -> RenderArgs {
    RenderArgs {
        input,
        output,
        format: OutputFormat::Dot,
        dedup: DedupMode::Substring,
        style: None,
        dot_program: "dot".to_string(),
    }
}

fn write_dump(dir: &Path) -> PathBuf {
    let path = dir.join("showtech.txt");
    fs::write(&path, DUMP).expect("Failed to write dump");
    path
}

#[test]
fn test_run_with_paths_writes_dot_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_dump(temp_dir.path());
    let base = temp_dir.path().join("topo");
    let mut prompter = Prompter::new(Cursor::new(""), Vec::<u8>::new());
    let mut out: Vec<u8> = Vec::new();

    let written = run(args(Some(input), Some(base)), &mut prompter, &mut out)
        .expect("render should succeed");

    assert_eq!(written, temp_dir.path().join("topo.dot"));
    let stdout = String::from_utf8(out).expect("utf8");
    assert_eq!(stdout, format!("Graph saved in {}\n", written.display()));

    let source = fs::read_to_string(&written).expect("Failed to read output");
    assert!(source.contains("0 [ label = \"r1.example.com\" ]"));
    assert!(source.contains("1 [ label = \"r2.example.com.1\" ]"));
    assert!(source.contains("0 -- 1 ["));
    assert_eq!(source.matches(" -- ").count(), 2);
}

#[test]
fn test_run_prompts_for_missing_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_dump(temp_dir.path());
    let base = temp_dir.path().join("prompted");
    let answers = format!("{}\n{}\n", input.display(), base.display());
    let mut prompts: Vec<u8> = Vec::new();
    let mut prompter = Prompter::new(Cursor::new(answers), &mut prompts);

    let written = run(args(None, None), &mut prompter, &mut Vec::<u8>::new())
        .expect("render should succeed");

    assert_eq!(written, temp_dir.path().join("prompted.dot"));
    let prompts = String::from_utf8(prompts).expect("utf8");
    assert!(prompts.contains("Enter file name with OpenR show tech output: "));
    assert!(prompts.contains("Enter path and file name to save the topology graph: "));
}

#[test]
fn test_run_applies_style_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_dump(temp_dir.path());
    let style = temp_dir.path().join("style.json");
    fs::write(&style, r#"{"graph": {"label": "Lab 7"}}"#).expect("Failed to write style");
    let mut render_args = args(Some(input), Some(temp_dir.path().join("topo")));
    render_args.style = Some(style);

    let written = run(
        render_args,
        &mut Prompter::new(Cursor::new(""), Vec::<u8>::new()),
        &mut Vec::<u8>::new(),
    )
    .expect("render should succeed");

    let source = fs::read_to_string(written).expect("Failed to read output");
    assert!(source.contains("\"label\"=\"Lab 7\""));
}

#[test]
fn test_run_missing_input_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let render_args = args(
        Some(temp_dir.path().join("missing.txt")),
        Some(temp_dir.path().join("topo")),
    );

    let err = run(
        render_args,
        &mut Prompter::new(Cursor::new(""), Vec::<u8>::new()),
        &mut Vec::<u8>::new(),
    )
    .expect_err("missing input should fail");

    assert!(err.to_string().contains("missing.txt"));
    assert!(missing_backend_hint(&err).is_none());
}

#[test]
fn test_run_without_graphviz_gives_install_hint() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_dump(temp_dir.path());
    let mut render_args = args(Some(input), Some(temp_dir.path().join("topo")));
    render_args.format = OutputFormat::Png;
    render_args.dot_program = "kvtopo-no-such-graphviz".to_string();

    let err = run(
        render_args,
        &mut Prompter::new(Cursor::new(""), Vec::<u8>::new()),
        &mut Vec::<u8>::new(),
    )
    .expect_err("missing graphviz should fail");

    assert!(matches!(
        err.downcast_ref::<RenderError>(),
        Some(RenderError::BackendMissing { .. })
    ));
    let hint = missing_backend_hint(&err).expect("hint for missing backend");
    assert!(hint.contains("Graphviz needs to be installed"));
    assert!(hint.contains("kvtopo-no-such-graphviz"));
}
