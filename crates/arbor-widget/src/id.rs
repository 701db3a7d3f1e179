//! Externally assigned widget identifiers.
//!
//! Identifiers let application code find a widget again after building a
//! dialog. They are compared by value only; the tree does not enforce
//! uniqueness, and lookups return the first match in pre-order.

use std::fmt;

/// Identifier a caller attaches to a widget.
///
/// # Example
/// ```
/// use arbor_widget::WidgetId;
///
/// let ok: WidgetId = "ok_button".into();
/// assert_eq!(ok, WidgetId::name("ok_button"));
/// assert_ne!(WidgetId::name("1"), WidgetId::number(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetId {
    Name(String),
    Number(i64),
}

impl WidgetId {
    pub fn name(name: impl Into<String>) -> Self {
        WidgetId::Name(name.into())
    }

    pub const fn number(value: i64) -> Self {
        WidgetId::Number(value)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetId::Name(name) => f.write_str(name),
            WidgetId::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        WidgetId::Name(s.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        WidgetId::Name(s)
    }
}

impl From<i64> for WidgetId {
    fn from(value: i64) -> Self {
        WidgetId::Number(value)
    }
}
