//! In-crate test suite
//!
//! Mirrors the pipeline structure: shared mocks in `test_helpers`, then one
//! file per concern.

pub mod test_helpers;

mod metadata_tests;
