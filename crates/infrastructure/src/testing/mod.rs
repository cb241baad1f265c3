//! Response testing infrastructure.
//!
//! Provides the runner that checks scenario assertions against responses.

mod runner;

pub use runner::TestRunner;
