//! Testing infrastructure for evalview integration tests.
//!
//! - `ResultsDir`: temporary results directory populated with result files
//! - `documents`: builders for the result document shapes the harness produces

pub mod documents;
pub mod world;

pub use world::ResultsDir;
