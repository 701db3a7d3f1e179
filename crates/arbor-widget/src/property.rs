//! Named, typed widget properties.
//!
//! Every widget kind publishes a [`PropertySet`] describing which properties
//! scripting layers and test harnesses may read or write through
//! [`WidgetTree::get_property`] and [`WidgetTree::set_property`]. Sets are
//! built once per kind on first use and shared read-only afterwards.
//!
//! A kind's set always starts from its ancestor's set (ultimately
//! [`PropertySet::base`]), so the base properties are available on every
//! widget:
//!
//! | name          | type    | access     |
//! |---------------|---------|------------|
//! | `Enabled`     | boolean | read/write |
//! | `Notify`      | boolean | read/write |
//! | `WidgetClass` | string  | read-only  |
//! | `DebugLabel`  | string  | read-only  |
//! | `WidgetName`  | string  | read/write |
//! | `HelpText`    | string  | read/write |
//!
//! # Example
//!
//! ```
//! use arbor_widget::property::{names, Property, PropertySet, PropertyType};
//! use std::sync::OnceLock;
//!
//! fn slider_properties() -> &'static PropertySet {
//!     static SET: OnceLock<PropertySet> = OnceLock::new();
//!     SET.get_or_init(|| {
//!         PropertySet::extend_from(PropertySet::base())
//!             .with(Property::new(names::VALUE, PropertyType::Integer))
//!     })
//! }
//!
//! assert!(slider_properties().contains(names::ENABLED));
//! assert!(slider_properties().contains(names::VALUE));
//! ```
//!
//! [`WidgetTree::get_property`]: crate::WidgetTree::get_property
//! [`WidgetTree::set_property`]: crate::WidgetTree::set_property

use crate::error::{WidgetError, WidgetRef};
use indexmap::IndexMap;
use std::fmt;
use std::sync::OnceLock;

/// Property names shared across widget kinds.
///
/// Renaming any of these is a breaking change for scripts and macros.
pub mod names {
    pub const ENABLED: &str = "Enabled";
    pub const NOTIFY: &str = "Notify";
    pub const WIDGET_CLASS: &str = "WidgetClass";
    pub const DEBUG_LABEL: &str = "DebugLabel";
    pub const WIDGET_NAME: &str = "WidgetName";
    pub const HELP_TEXT: &str = "HelpText";

    pub const LABEL: &str = "Label";
    pub const VALUE: &str = "Value";
    pub const INPUT_MAX_LENGTH: &str = "InputMaxLength";
}

/// Type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Boolean,
    String,
    Integer,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropertyType::Boolean => "boolean",
            PropertyType::String => "string",
            PropertyType::Integer => "integer",
        })
    }
}

/// A property value as exchanged with scripts and recorders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Bool(bool),
    String(String),
    Integer(i64),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyType {
        match self {
            PropertyValue::Bool(_) => PropertyType::Boolean,
            PropertyValue::String(_) => PropertyType::String,
            PropertyValue::Integer(_) => PropertyType::Integer,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

/// Descriptor for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub kind: PropertyType,
    pub read_only: bool,
}

impl Property {
    pub const fn new(name: &'static str, kind: PropertyType) -> Self {
        Self {
            name,
            kind,
            read_only: false,
        }
    }

    pub const fn read_only(name: &'static str, kind: PropertyType) -> Self {
        Self {
            name,
            kind,
            read_only: true,
        }
    }
}

/// Why a property check failed, before it is attributed to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyError {
    NotFound,
    TypeMismatch {
        expected: PropertyType,
        actual: PropertyType,
    },
    ReadOnly,
}

impl PropertyError {
    /// Attach the property name and the widget the check was made for.
    pub fn for_widget(self, property: &str, widget: WidgetRef) -> WidgetError {
        let property = property.to_string();
        match self {
            PropertyError::NotFound => WidgetError::PropertyNotFound { property, widget },
            PropertyError::TypeMismatch { expected, actual } => WidgetError::PropertyTypeMismatch {
                property,
                expected,
                actual,
                widget,
            },
            PropertyError::ReadOnly => WidgetError::PropertyReadOnly { property, widget },
        }
    }
}

/// Ordered registry of property descriptors for one widget kind.
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    properties: IndexMap<&'static str, Property>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The properties every widget supports.
    pub fn base() -> &'static PropertySet {
        static BASE: OnceLock<PropertySet> = OnceLock::new();
        BASE.get_or_init(|| {
            PropertySet::new()
                .with(Property::new(names::ENABLED, PropertyType::Boolean))
                .with(Property::new(names::NOTIFY, PropertyType::Boolean))
                .with(Property::read_only(names::WIDGET_CLASS, PropertyType::String))
                .with(Property::read_only(names::DEBUG_LABEL, PropertyType::String))
                .with(Property::new(names::WIDGET_NAME, PropertyType::String))
                .with(Property::new(names::HELP_TEXT, PropertyType::String))
        })
    }

    /// Start a derived kind's set from its ancestor's descriptors.
    pub fn extend_from(parent: &PropertySet) -> Self {
        parent.clone()
    }

    /// Add a descriptor, replacing any earlier one with the same name.
    pub fn add(&mut self, property: Property) {
        self.properties.insert(property.name, property);
    }

    pub fn with(mut self, property: Property) -> Self {
        self.add(property);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> + '_ {
        self.properties.values()
    }

    /// Check that `name` is known.
    pub fn check(&self, name: &str) -> Result<&Property, PropertyError> {
        self.get(name).ok_or(PropertyError::NotFound)
    }

    /// Check that `name` is known and `value` has its type.
    pub fn check_value(&self, name: &str, value: &PropertyValue) -> Result<&Property, PropertyError> {
        let property = self.check(name)?;
        if property.kind != value.kind() {
            return Err(PropertyError::TypeMismatch {
                expected: property.kind,
                actual: value.kind(),
            });
        }
        Ok(property)
    }

    /// Everything [`check_value`](Self::check_value) does, and reject read-only properties.
    pub fn check_writable(
        &self,
        name: &str,
        value: &PropertyValue,
    ) -> Result<&Property, PropertyError> {
        let property = self.check_value(name, value)?;
        if property.read_only {
            return Err(PropertyError::ReadOnly);
        }
        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_set_order_and_access() {
        let base = PropertySet::base();
        let order: Vec<_> = base.iter().map(|p| p.name).collect();
        assert_eq!(
            order,
            vec![
                names::ENABLED,
                names::NOTIFY,
                names::WIDGET_CLASS,
                names::DEBUG_LABEL,
                names::WIDGET_NAME,
                names::HELP_TEXT
            ]
        );
        assert!(base.get(names::WIDGET_CLASS).unwrap().read_only);
        assert!(!base.get(names::ENABLED).unwrap().read_only);
    }

    #[test]
    fn test_base_set_is_built_once() {
        assert!(std::ptr::eq(PropertySet::base(), PropertySet::base()));
    }

    #[test]
    fn test_extend_keeps_base() {
        let set = PropertySet::extend_from(PropertySet::base())
            .with(Property::new(names::VALUE, PropertyType::Integer));

        assert_eq!(set.len(), PropertySet::base().len() + 1);
        assert!(set.contains(names::HELP_TEXT));
        assert_eq!(set.get(names::VALUE).unwrap().kind, PropertyType::Integer);
    }

    #[test]
    fn test_checks() {
        let base = PropertySet::base();

        assert_eq!(base.check("Bogus"), Err(PropertyError::NotFound));
        assert_eq!(
            base.check_value(names::ENABLED, &PropertyValue::from("yes")),
            Err(PropertyError::TypeMismatch {
                expected: PropertyType::Boolean,
                actual: PropertyType::String,
            })
        );
        assert_eq!(
            base.check_writable(names::WIDGET_CLASS, &PropertyValue::from("Label")),
            Err(PropertyError::ReadOnly)
        );
        assert!(base.check_writable(names::HELP_TEXT, &"help".into()).is_ok());
    }
}
