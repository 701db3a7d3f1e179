//! Test utilities for Arbor.
//!
//! This crate provides test doubles and fixtures for code built on
//! `arbor-widget`.
//!
//! # Overview
//!
//! - [`MockMacroRecorder`] - records every property a tree capture reports
//! - [`ProbeWidget`] - widget kind whose capabilities are set per test
//! - [`fixtures`] - small prebuilt trees
//!
//! # Example
//!
//! ```rust
//! use arbor_test_utils::{fixtures, MockMacroRecorder};
//!
//! let sample = fixtures::sample_tree();
//! let mut recorder = MockMacroRecorder::new();
//! sample.tree.capture_user_input(sample.root, &mut recorder);
//!
//! assert_eq!(recorder.widgets(), vec![sample.a, sample.c, sample.b]);
//! ```

pub mod fixtures;
pub mod mock_recorder;
pub mod probe;

pub use mock_recorder::{MockMacroRecorder, RecordedProperty};
pub use probe::ProbeWidget;

/// Install a test log subscriber once per process.
pub fn init_logging() {
    arbor_core::logging::init_for_tests();
}
