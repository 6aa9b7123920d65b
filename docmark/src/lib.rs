//! Expose docmark's internal API for use in unit testing. The binary is the
//! supported interface; this API is primarily intended for tests and
//! benchmarks.
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
