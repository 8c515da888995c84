//! Render module: Draw the topology found in a show tech dump

mod run;

pub use run::{missing_backend_hint, run};

#[cfg(test)]
mod tests;
