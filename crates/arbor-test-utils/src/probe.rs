//! Configurable widget kind for exercising tree algorithms.

use arbor_widget::property::{Property, PropertySet, PropertyType, PropertyValue, names};
use arbor_widget::{ChildrenPolicy, Widget};
use std::sync::OnceLock;

/// Widget kind whose class, children policy and capabilities are chosen by
/// the test.
///
/// Every probe has a string `Value` property. Whether it is reported as user
/// input is controlled by [`with_user_input`](Self::with_user_input).
#[derive(Debug, Clone)]
pub struct ProbeWidget {
    pub class: &'static str,
    pub policy: ChildrenPolicy,
    pub user_input: bool,
    pub dialog: bool,
    pub value: String,
    pub label: String,
}

impl ProbeWidget {
    pub fn new(class: &'static str) -> Self {
        Self {
            class,
            policy: ChildrenPolicy::Rejector,
            user_input: false,
            dialog: false,
            value: String::new(),
            label: String::new(),
        }
    }

    /// A probe accepting any number of children.
    pub fn container(class: &'static str) -> Self {
        Self::new(class).with_policy(ChildrenPolicy::Multi)
    }

    pub fn with_policy(mut self, policy: ChildrenPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_user_input(mut self, value: impl Into<String>) -> Self {
        self.user_input = true;
        self.value = value.into();
        self
    }

    pub fn as_dialog(mut self) -> Self {
        self.dialog = true;
        self.policy = ChildrenPolicy::Multi;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    fn properties() -> &'static PropertySet {
        static SET: OnceLock<PropertySet> = OnceLock::new();
        SET.get_or_init(|| {
            PropertySet::extend_from(PropertySet::base())
                .with(Property::new(names::VALUE, PropertyType::String))
        })
    }
}

impl Widget for ProbeWidget {
    fn widget_class(&self) -> &'static str {
        self.class
    }

    fn children_policy(&self) -> ChildrenPolicy {
        self.policy
    }

    fn property_set(&self) -> &'static PropertySet {
        Self::properties()
    }

    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        (name == names::VALUE).then(|| PropertyValue::from(self.value.as_str()))
    }

    fn set_property(&mut self, name: &str, value: &PropertyValue) -> bool {
        match (name, value) {
            (names::VALUE, PropertyValue::String(text)) => {
                self.value = text.clone();
                true
            }
            _ => false,
        }
    }

    fn user_input_property(&self) -> Option<&'static str> {
        self.user_input.then_some(names::VALUE)
    }

    fn is_dialog(&self) -> bool {
        self.dialog
    }

    fn shortcut_string(&self) -> &str {
        &self.label
    }
}
