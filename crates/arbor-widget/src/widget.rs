//! The widget kind trait.
//!
//! A node in a [`WidgetTree`] carries the state every widget shares (identity,
//! parent link, children, flags, layout hints). What differs between a label,
//! a dialog and an input field lives in a `Box<dyn Widget>` owned by the node.
//!
//! # Capability queries
//!
//! Instead of downcasting to find out what a widget can do, tree algorithms
//! ask the trait:
//! - [`Widget::children_policy`] - how many children the kind accepts
//! - [`Widget::user_input_property`] - which property holds user input
//! - [`Widget::is_dialog`] - whether the kind is a top-level container
//!
//! # Property chain
//!
//! [`WidgetTree::get_property`] and [`WidgetTree::set_property`] validate the
//! request against [`Widget::property_set`], then offer it to the kind. A kind
//! that does not recognise a name returns `None` / `false` and the tree falls
//! back to the base properties it implements itself.
//!
//! # Example
//!
//! ```
//! use arbor_widget::property::{names, Property, PropertySet, PropertyType, PropertyValue};
//! use arbor_widget::{Widget, WidgetTree};
//! use std::sync::OnceLock;
//!
//! struct Spinner {
//!     value: i64,
//! }
//!
//! impl Widget for Spinner {
//!     fn widget_class(&self) -> &'static str {
//!         "Spinner"
//!     }
//!
//!     fn property_set(&self) -> &'static PropertySet {
//!         static SET: OnceLock<PropertySet> = OnceLock::new();
//!         SET.get_or_init(|| {
//!             PropertySet::extend_from(PropertySet::base())
//!                 .with(Property::new(names::VALUE, PropertyType::Integer))
//!         })
//!     }
//!
//!     fn get_property(&self, name: &str) -> Option<PropertyValue> {
//!         (name == names::VALUE).then(|| PropertyValue::Integer(self.value))
//!     }
//!
//!     fn set_property(&mut self, name: &str, value: &PropertyValue) -> bool {
//!         match (name, value) {
//!             (names::VALUE, PropertyValue::Integer(v)) => {
//!                 self.value = *v;
//!                 true
//!             }
//!             _ => false,
//!         }
//!     }
//!
//!     fn user_input_property(&self) -> Option<&'static str> {
//!         Some(names::VALUE)
//!     }
//! }
//!
//! let mut tree = WidgetTree::new();
//! let spinner = tree.create(Spinner { value: 3 }, None).unwrap();
//! tree.set_property(spinner, names::VALUE, PropertyValue::Integer(5)).unwrap();
//! assert_eq!(tree.get_property(spinner, names::VALUE).unwrap(), PropertyValue::Integer(5));
//! ```
//!
//! [`WidgetTree`]: crate::WidgetTree
//! [`WidgetTree::get_property`]: crate::WidgetTree::get_property
//! [`WidgetTree::set_property`]: crate::WidgetTree::set_property

use crate::children::ChildrenPolicy;
use crate::property::{PropertySet, PropertyValue};
use arbor_core::geometry::Dimension;
use std::any::Any;

/// Behaviour of one widget kind.
pub trait Widget: Any {
    /// Class name used in diagnostics and the `WidgetClass` property.
    fn widget_class(&self) -> &'static str;

    /// Children store variant a new node of this kind gets.
    fn children_policy(&self) -> ChildrenPolicy {
        ChildrenPolicy::Rejector
    }

    /// Property descriptors for this kind, including its ancestors' properties.
    fn property_set(&self) -> &'static PropertySet {
        PropertySet::base()
    }

    /// Read a kind-specific property. `None` defers to the base properties.
    ///
    /// Only called with names present in [`property_set`](Self::property_set).
    fn get_property(&self, _name: &str) -> Option<PropertyValue> {
        None
    }

    /// Write a kind-specific property. `false` defers to the base properties.
    ///
    /// Only called after the name, type and writability were checked.
    fn set_property(&mut self, _name: &str, _value: &PropertyValue) -> bool {
        false
    }

    /// Property holding the user's input, recorded by macro recorders.
    fn user_input_property(&self) -> Option<&'static str> {
        None
    }

    /// Whether this kind is a top-level container (dialog, window).
    fn is_dialog(&self) -> bool {
        false
    }

    /// Raw label text including shortcut markers, used for debug labels.
    fn shortcut_string(&self) -> &str {
        ""
    }

    /// Store a new label with shortcut markers.
    ///
    /// Returns `false` if the kind has no shortcut label.
    fn set_shortcut_string(&mut self, _shortcut: &str) -> bool {
        false
    }

    /// Try to take the keyboard focus.
    fn set_keyboard_focus(&mut self) -> bool {
        false
    }

    fn preferred_width(&self) -> u32 {
        0
    }

    fn preferred_height(&self) -> u32 {
        0
    }

    fn preferred_size(&self, dim: Dimension) -> u32 {
        match dim {
            Dimension::Horizontal => self.preferred_width(),
            Dimension::Vertical => self.preferred_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Widget for Plain {
        fn widget_class(&self) -> &'static str {
            "Plain"
        }

        fn preferred_width(&self) -> u32 {
            40
        }
    }

    #[test]
    fn test_defaults() {
        let mut plain = Plain;

        assert_eq!(plain.children_policy(), ChildrenPolicy::Rejector);
        assert!(std::ptr::eq(plain.property_set(), PropertySet::base()));
        assert!(plain.get_property("Enabled").is_none());
        assert!(!plain.set_property("Enabled", &PropertyValue::Bool(true)));
        assert!(plain.user_input_property().is_none());
        assert!(!plain.is_dialog());
        assert!(!plain.set_keyboard_focus());
        assert!(!plain.set_shortcut_string("&Ok"));
    }

    #[test]
    fn test_preferred_size_by_dimension() {
        let plain = Plain;
        assert_eq!(plain.preferred_size(Dimension::Horizontal), 40);
        assert_eq!(plain.preferred_size(Dimension::Vertical), 0);
    }
}
