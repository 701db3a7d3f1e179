//! Arbor Core
//!
//! Shared utilities for the Arbor widget toolkit: generational storage,
//! hash collections, logging setup, profiling hooks and small geometry types.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod profiling;
