//! Macro recorder double that keeps everything it is told.

use arbor_core::alloc::HashMap;
use arbor_widget::property::PropertyValue;
use arbor_widget::{MacroRecorder, WidgetHandle, WidgetId, WidgetTree};

/// One `record_widget_property` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedProperty {
    pub widget: WidgetHandle,
    pub id: Option<WidgetId>,
    pub property: &'static str,
    /// Value read back through the tree at record time, `None` if the read failed.
    pub value: Option<PropertyValue>,
}

/// Records every reported property in call order.
#[derive(Debug, Default)]
pub struct MockMacroRecorder {
    calls: Vec<RecordedProperty>,
    by_id: HashMap<WidgetId, PropertyValue>,
}

impl MockMacroRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[RecordedProperty] {
        &self.calls
    }

    pub fn count_records(&self) -> usize {
        self.calls.len()
    }

    /// Widgets in the order they were reported.
    pub fn widgets(&self) -> Vec<WidgetHandle> {
        self.calls.iter().map(|call| call.widget).collect()
    }

    /// Last value recorded for the widget carrying `id`.
    pub fn value_for(&self, id: &WidgetId) -> Option<&PropertyValue> {
        self.by_id.get(id)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.by_id.clear();
    }
}

impl MacroRecorder for MockMacroRecorder {
    fn record_widget_property(
        &mut self,
        tree: &WidgetTree,
        widget: WidgetHandle,
        property: &'static str,
    ) {
        let id = tree.node(widget).id().cloned();
        let value = tree.get_property(widget, property).ok();
        tracing::trace!("Recording {} of {}", property, tree.display(widget));

        if let (Some(id), Some(value)) = (&id, &value) {
            self.by_id.insert(id.clone(), value.clone());
        }

        self.calls.push(RecordedProperty {
            widget,
            id,
            property,
            value,
        });
    }
}
