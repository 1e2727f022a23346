//! # RESQML Bench
//!
//! Benchmarking fixtures for RESQML codec and XML performance testing.

pub mod fixtures;
