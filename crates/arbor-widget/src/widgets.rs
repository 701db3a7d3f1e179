//! Core widget kinds.

use crate::children::ChildrenPolicy;
use crate::property::{names, Property, PropertySet, PropertyType, PropertyValue};
use crate::widget::Widget;
use std::sync::OnceLock;

/// Properties of every kind with a `Label` string.
fn labelled_properties() -> &'static PropertySet {
    static SET: OnceLock<PropertySet> = OnceLock::new();
    SET.get_or_init(|| {
        PropertySet::extend_from(PropertySet::base())
            .with(Property::new(names::LABEL, PropertyType::String))
    })
}

fn get_label(label: &str, name: &str) -> Option<PropertyValue> {
    (name == names::LABEL).then(|| PropertyValue::from(label))
}

fn set_label(label: &mut String, name: &str, value: &PropertyValue) -> bool {
    match (name, value) {
        (names::LABEL, PropertyValue::String(text)) => {
            *label = text.clone();
            true
        }
        _ => false,
    }
}

/// Top-level container; the root of a window's widget tree.
#[derive(Debug, Default)]
pub struct Dialog;

impl Dialog {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Dialog {
    fn widget_class(&self) -> &'static str {
        "Dialog"
    }

    fn children_policy(&self) -> ChildrenPolicy {
        ChildrenPolicy::Multi
    }

    fn is_dialog(&self) -> bool {
        true
    }
}

/// Layout box holding any number of children.
#[derive(Debug, Default)]
pub struct Container;

impl Container {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Container {
    fn widget_class(&self) -> &'static str {
        "Container"
    }

    fn children_policy(&self) -> ChildrenPolicy {
        ChildrenPolicy::Multi
    }
}

/// Labelled border around a single child.
#[derive(Debug, Default)]
pub struct Frame {
    pub label: String,
}

impl Frame {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Widget for Frame {
    fn widget_class(&self) -> &'static str {
        "Frame"
    }

    fn children_policy(&self) -> ChildrenPolicy {
        ChildrenPolicy::Single
    }

    fn property_set(&self) -> &'static PropertySet {
        labelled_properties()
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        get_label(&self.label, name)
    }

    fn set_property(&mut self, name: &str, value: &PropertyValue) -> bool {
        set_label(&mut self.label, name, value)
    }

    fn shortcut_string(&self) -> &str {
        &self.label
    }

    fn set_shortcut_string(&mut self, shortcut: &str) -> bool {
        self.label = shortcut.to_string();
        true
    }
}

/// Static text.
#[derive(Debug, Default)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Widget for Label {
    fn widget_class(&self) -> &'static str {
        "Label"
    }

    fn property_set(&self) -> &'static PropertySet {
        labelled_properties()
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        get_label(&self.text, name)
    }

    fn set_property(&mut self, name: &str, value: &PropertyValue) -> bool {
        set_label(&mut self.text, name, value)
    }

    fn shortcut_string(&self) -> &str {
        &self.text
    }

    fn preferred_width(&self) -> u32 {
        self.text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u32
    }

    fn preferred_height(&self) -> u32 {
        self.text.lines().count().max(1) as u32
    }
}

/// Single-line text entry.
#[derive(Debug)]
pub struct InputField {
    pub label: String,
    pub value: String,
    /// Maximum number of characters, `-1` for no limit.
    pub input_max_length: i64,
    pub has_focus: bool,
}

impl InputField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            input_max_length: -1,
            has_focus: false,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn input_max_length(mut self, max: i64) -> Self {
        self.input_max_length = max;
        self
    }

    fn properties() -> &'static PropertySet {
        static SET: OnceLock<PropertySet> = OnceLock::new();
        SET.get_or_init(|| {
            PropertySet::extend_from(labelled_properties())
                .with(Property::new(names::VALUE, PropertyType::String))
                .with(Property::new(names::INPUT_MAX_LENGTH, PropertyType::Integer))
        })
    }
}

impl Widget for InputField {
    fn widget_class(&self) -> &'static str {
        "InputField"
    }

    fn property_set(&self) -> &'static PropertySet {
        Self::properties()
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            names::VALUE => Some(PropertyValue::from(self.value.as_str())),
            names::INPUT_MAX_LENGTH => Some(PropertyValue::Integer(self.input_max_length)),
            _ => get_label(&self.label, name),
        }
    }

    fn set_property(&mut self, name: &str, value: &PropertyValue) -> bool {
        match (name, value) {
            (names::VALUE, PropertyValue::String(text)) => {
                self.value = text.clone();
                true
            }
            (names::INPUT_MAX_LENGTH, PropertyValue::Integer(max)) => {
                self.input_max_length = *max;
                true
            }
            _ => set_label(&mut self.label, name, value),
        }
    }

    fn user_input_property(&self) -> Option<&'static str> {
        Some(names::VALUE)
    }

    fn shortcut_string(&self) -> &str {
        &self.label
    }

    fn set_shortcut_string(&mut self, shortcut: &str) -> bool {
        self.label = shortcut.to_string();
        true
    }

    fn set_keyboard_focus(&mut self) -> bool {
        self.has_focus = true;
        true
    }
}

/// Two-state toggle with a label.
#[derive(Debug, Default)]
pub struct CheckBox {
    pub label: String,
    pub checked: bool,
}

impl CheckBox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    fn properties() -> &'static PropertySet {
        static SET: OnceLock<PropertySet> = OnceLock::new();
        SET.get_or_init(|| {
            PropertySet::extend_from(labelled_properties())
                .with(Property::new(names::VALUE, PropertyType::Boolean))
        })
    }
}

impl Widget for CheckBox {
    fn widget_class(&self) -> &'static str {
        "CheckBox"
    }

    fn property_set(&self) -> &'static PropertySet {
        Self::properties()
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        match name {
            names::VALUE => Some(PropertyValue::Bool(self.checked)),
            _ => get_label(&self.label, name),
        }
    }

    fn set_property(&mut self, name: &str, value: &PropertyValue) -> bool {
        match (name, value) {
            (names::VALUE, PropertyValue::Bool(checked)) => {
                self.checked = *checked;
                true
            }
            _ => set_label(&mut self.label, name, value),
        }
    }

    fn user_input_property(&self) -> Option<&'static str> {
        Some(names::VALUE)
    }

    fn shortcut_string(&self) -> &str {
        &self.label
    }

    fn set_shortcut_string(&mut self, shortcut: &str) -> bool {
        self.label = shortcut.to_string();
        true
    }

    fn set_keyboard_focus(&mut self) -> bool {
        true
    }
}
