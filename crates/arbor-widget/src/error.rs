//! Error types for widget tree operations.
//!
//! Only caller-recoverable failures are represented here. Using a destroyed
//! widget handle is an invariant breach and panics instead of returning a
//! [`WidgetError`].

use crate::handle::WidgetHandle;
use crate::property::PropertyType;
use std::fmt;

/// Identifies the widget an error was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetRef {
    pub class: &'static str,
    pub handle: WidgetHandle,
}

impl fmt::Display for WidgetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.class, self.handle)
    }
}

/// Errors that can occur while building or querying a widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// The child is already attached to another parent.
    AlreadyHasParent {
        child: WidgetRef,
        parent: WidgetRef,
    },

    /// The parent's children store does not accept any children.
    ChildrenRejected { parent: WidgetRef },

    /// The parent's children store is already full.
    TooManyChildren { parent: WidgetRef, limit: usize },

    /// The child is already listed in the parent's children store.
    DuplicateChild { parent: WidgetRef, child: WidgetRef },

    /// The parent is in the middle of being destroyed.
    ParentBeingDestroyed { parent: WidgetRef },

    /// The children store cannot be replaced while it still holds children.
    ChildrenStoreInUse { widget: WidgetRef, children: usize },

    /// Attaching would make a widget its own ancestor.
    WouldCreateCycle { child: WidgetRef, parent: WidgetRef },

    /// No descendant carries the requested identifier.
    WidgetNotFound { id: String },

    /// The widget kind has no property with this name.
    PropertyNotFound {
        property: String,
        widget: WidgetRef,
    },

    /// The value's type does not match the property descriptor.
    PropertyTypeMismatch {
        property: String,
        expected: PropertyType,
        actual: PropertyType,
        widget: WidgetRef,
    },

    /// The property can be read but not written.
    PropertyReadOnly {
        property: String,
        widget: WidgetRef,
    },
}

impl WidgetError {
    /// Caller-logic errors about tree shape.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            WidgetError::AlreadyHasParent { .. }
                | WidgetError::ChildrenRejected { .. }
                | WidgetError::TooManyChildren { .. }
                | WidgetError::DuplicateChild { .. }
                | WidgetError::ParentBeingDestroyed { .. }
                | WidgetError::ChildrenStoreInUse { .. }
                | WidgetError::WouldCreateCycle { .. }
        )
    }

    /// Something named by the caller does not exist.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            WidgetError::WidgetNotFound { .. } | WidgetError::PropertyNotFound { .. }
        )
    }

    /// The widget the error was raised for, if any.
    pub fn widget(&self) -> Option<WidgetRef> {
        match self {
            WidgetError::AlreadyHasParent { child, .. } => Some(*child),
            WidgetError::ChildrenRejected { parent }
            | WidgetError::TooManyChildren { parent, .. }
            | WidgetError::DuplicateChild { parent, .. }
            | WidgetError::ParentBeingDestroyed { parent } => Some(*parent),
            WidgetError::ChildrenStoreInUse { widget, .. } => Some(*widget),
            WidgetError::WouldCreateCycle { child, .. } => Some(*child),
            WidgetError::WidgetNotFound { .. } => None,
            WidgetError::PropertyNotFound { widget, .. }
            | WidgetError::PropertyTypeMismatch { widget, .. }
            | WidgetError::PropertyReadOnly { widget, .. } => Some(*widget),
        }
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::AlreadyHasParent { child, parent } => {
                write!(f, "{} already has a parent ({})", child, parent)
            }
            WidgetError::ChildrenRejected { parent } => {
                write!(f, "{} cannot have children", parent)
            }
            WidgetError::TooManyChildren { parent, limit } => {
                write!(f, "{} can only have {} child(ren)", parent, limit)
            }
            WidgetError::DuplicateChild { parent, child } => {
                write!(f, "{} already contains {}", parent, child)
            }
            WidgetError::ParentBeingDestroyed { parent } => {
                write!(f, "{} is being destroyed and cannot accept children", parent)
            }
            WidgetError::ChildrenStoreInUse { widget, children } => write!(
                f,
                "Cannot replace children store of {}: it still holds {} child(ren)",
                widget, children
            ),
            WidgetError::WouldCreateCycle { child, parent } => {
                write!(f, "{} is an ancestor of {}", child, parent)
            }
            WidgetError::WidgetNotFound { id } => {
                write!(f, "No widget with ID {}", id)
            }
            WidgetError::PropertyNotFound { property, widget } => {
                write!(f, "Unknown property \"{}\" for {}", property, widget)
            }
            WidgetError::PropertyTypeMismatch {
                property,
                expected,
                actual,
                widget,
            } => write!(
                f,
                "Property \"{}\" of {} expects {} but got {}",
                property, widget, expected, actual
            ),
            WidgetError::PropertyReadOnly { property, widget } => {
                write!(f, "Property \"{}\" of {} is read-only", property, widget)
            }
        }
    }
}

impl std::error::Error for WidgetError {}

/// Result type for widget tree operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::alloc::IndexSlot;

    fn widget_ref(class: &'static str, idx: u32) -> WidgetRef {
        WidgetRef {
            class,
            handle: WidgetHandle::from_slot(IndexSlot::new(0, idx)),
        }
    }

    #[test]
    fn test_display_names_the_widget() {
        let err = WidgetError::PropertyReadOnly {
            property: "WidgetClass".to_string(),
            widget: widget_ref("Label", 3),
        };
        assert_eq!(
            err.to_string(),
            "Property \"WidgetClass\" of Label at #3:0 is read-only"
        );
    }

    #[test]
    fn test_categories() {
        let structural = WidgetError::ChildrenRejected {
            parent: widget_ref("Label", 1),
        };
        let lookup = WidgetError::WidgetNotFound { id: "ok".to_string() };

        assert!(structural.is_structural());
        assert!(!structural.is_lookup());
        assert!(lookup.is_lookup());
        assert_eq!(lookup.widget(), None);
        assert_eq!(structural.widget(), Some(widget_ref("Label", 1)));
    }
}
