//! Graphviz `dot` backend

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::dot::Dot;
use super::graph::RenderGraph;
use super::renderer::{OutputFormat, RenderError, Renderer};
use super::style::Style;

/// Renders through an installed Graphviz layout program
///
/// The DOT source is saved under the output base path and the image next to
/// it with the format extension appended, e.g. `topo` and `topo.png`.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    pub program: String,
    pub format: OutputFormat,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl GraphvizRenderer {
    /// Create a renderer using `dot` and PNG output
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout program (name on `PATH` or full path)
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn run_layout(&self, source: &Path, image: &Path) -> Result<(), RenderError> {
        debug!("Running {} -T{} on {}", self.program, self.format, source.display());

        let output = Command::new(&self.program)
            .arg(format!("-T{}", self.format.extension()))
            .arg("-o")
            .arg(image)
            .arg(source)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RenderError::BackendMissing {
                    program: self.program.clone(),
                },
                _ => RenderError::Io(e),
            })?;

        if !output.status.success() {
            return Err(RenderError::BackendFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

impl Renderer for GraphvizRenderer {
    fn render(
        &self,
        graph: &RenderGraph,
        style: &Style,
        output: &Path,
    ) -> Result<PathBuf, RenderError> {
        let source = Dot::new(graph, style).to_string();

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| RenderError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if self.format == OutputFormat::Dot {
            let path = with_extension_appended(output, self.format.extension());
            write_file(&path, &source)?;
            return Ok(path);
        }

        write_file(output, &source)?;
        let image = with_extension_appended(output, self.format.extension());
        self.run_layout(output, &image)?;
        Ok(image)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// `topo` -> `topo.png`, `lab.v2` -> `lab.v2.png`
fn with_extension_appended(path: &Path, ext: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}
