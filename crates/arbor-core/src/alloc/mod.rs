//! Optimized allocation and collection types for Arbor.
//!
//! This module provides:
//! - Re-exports of optimized hash collections using AHash
//! - A generational [`Arena`] used to own widget nodes

pub mod arena;

pub use arena::{Arena, IndexSlot};

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
