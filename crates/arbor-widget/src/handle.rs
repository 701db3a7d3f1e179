//! Handles naming nodes in a widget tree, and the opaque backend token.

use arbor_core::alloc::IndexSlot;
use std::fmt;
use std::num::NonZeroUsize;

/// Copyable, generational reference to a node in a [`WidgetTree`].
///
/// A handle never owns the node it names. Once the node is destroyed the
/// slot's generation moves on and the handle is permanently invalid; see
/// [`WidgetTree::is_valid`].
///
/// [`WidgetTree`]: crate::WidgetTree
/// [`WidgetTree::is_valid`]: crate::WidgetTree::is_valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetHandle(IndexSlot);

impl WidgetHandle {
    pub(crate) fn from_slot(slot: IndexSlot) -> Self {
        Self(slot)
    }

    pub(crate) fn slot(self) -> IndexSlot {
        self.0
    }

    pub fn index(&self) -> u32 {
        self.0.index()
    }

    pub fn generation(&self) -> u32 {
        self.0.generation()
    }
}

impl fmt::Display for WidgetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.index(), self.generation())
    }
}

/// Opaque, pointer-sized token owned by a rendering backend.
///
/// The tree stores it, prints it in diagnostics and hands it back; it never
/// interprets or releases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendHandle(NonZeroUsize);

impl BackendHandle {
    pub const fn new(raw: NonZeroUsize) -> Self {
        Self(raw)
    }

    /// `None` for a null token.
    pub fn from_raw(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    pub fn as_raw(&self) -> usize {
        self.0.get()
    }
}

impl fmt::LowerHex for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0.get(), f)
    }
}
