//! Extract module: Print the adjacencies found in a show tech dump

mod run;

pub use run::run;
