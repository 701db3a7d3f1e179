//! Per-widget state shared by every widget kind.

use crate::children::ChildrenStore;
use crate::handle::{BackendHandle, WidgetHandle};
use crate::id::WidgetId;
use crate::widget::Widget;
use arbor_core::geometry::{BothDim, Dimension};
use bitflags::bitflags;
use std::any::Any;

bitflags! {
    /// Independent boolean facets of a widget's interaction behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// Accepts user interaction.
        const ENABLED         = 0b0000_0001;
        /// Reports user interaction to the application as events.
        const NOTIFY          = 0b0000_0010;
        /// Forwards raw key events to the application.
        const SEND_KEY_EVENTS = 0b0000_0100;
        /// Shortcut was assigned automatically rather than by the label.
        const AUTO_SHORTCUT   = 0b0000_1000;
        /// `id()` reports the stored identifier.
        const ID_ENABLED      = 0b0001_0000;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        WidgetFlags::ENABLED | WidgetFlags::ID_ENABLED
    }
}

/// A node of a [`WidgetTree`](crate::WidgetTree).
///
/// Structural fields (parent, children, destruction state) are read-only here;
/// they change only through tree operations so the parent link and the
/// parent's children store always agree.
pub struct WidgetNode {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) id: Option<WidgetId>,
    pub(crate) parent: Option<WidgetHandle>,
    pub(crate) children: ChildrenStore,
    pub(crate) being_destroyed: bool,
    flags: WidgetFlags,
    stretch: BothDim<bool>,
    weight: BothDim<u32>,
    function_key: Option<u32>,
    name: String,
    help_text: String,
    backend: Option<BackendHandle>,
}

impl WidgetNode {
    pub(crate) fn new(widget: Box<dyn Widget>, parent: Option<WidgetHandle>) -> Self {
        let children = ChildrenStore::new(widget.children_policy());
        Self {
            widget,
            id: None,
            parent,
            children,
            being_destroyed: false,
            flags: WidgetFlags::default(),
            stretch: BothDim::splat(false),
            weight: BothDim::splat(0),
            function_key: None,
            name: String::new(),
            help_text: String::new(),
            backend: None,
        }
    }

    pub fn widget(&self) -> &dyn Widget {
        &*self.widget
    }

    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        &mut *self.widget
    }

    /// The widget kind as `T`, if it is one.
    pub fn downcast<T: Widget>(&self) -> Option<&T> {
        let any: &dyn Any = &*self.widget;
        any.downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Widget>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = &mut *self.widget;
        any.downcast_mut::<T>()
    }

    pub fn widget_class(&self) -> &'static str {
        self.widget.widget_class()
    }

    // Identity

    /// The identifier, or `None` while ids are disabled for this widget.
    pub fn id(&self) -> Option<&WidgetId> {
        if self.flags.contains(WidgetFlags::ID_ENABLED) {
            self.id.as_ref()
        } else {
            None
        }
    }

    /// Whether an identifier is stored, regardless of [`is_id_enabled`](Self::is_id_enabled).
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Replace the identifier, returning the previous one.
    pub fn set_id(&mut self, id: impl Into<WidgetId>) -> Option<WidgetId> {
        self.id.replace(id.into())
    }

    pub fn is_id_enabled(&self) -> bool {
        self.flags.contains(WidgetFlags::ID_ENABLED)
    }

    pub fn set_id_enabled(&mut self, enabled: bool) {
        self.flags.set(WidgetFlags::ID_ENABLED, enabled);
    }

    // Structure

    pub fn parent(&self) -> Option<WidgetHandle> {
        self.parent
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn children(&self) -> &ChildrenStore {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn first_child(&self) -> Option<WidgetHandle> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<WidgetHandle> {
        self.children.last()
    }

    pub fn is_being_destroyed(&self) -> bool {
        self.being_destroyed
    }

    // Flags

    pub fn flags(&self) -> WidgetFlags {
        self.flags
    }

    pub fn is_enabled(&self) -> bool {
        self.flags.contains(WidgetFlags::ENABLED)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(WidgetFlags::ENABLED, enabled);
    }

    pub fn notify(&self) -> bool {
        self.flags.contains(WidgetFlags::NOTIFY)
    }

    pub fn set_notify(&mut self, notify: bool) {
        self.flags.set(WidgetFlags::NOTIFY, notify);
    }

    pub fn send_key_events(&self) -> bool {
        self.flags.contains(WidgetFlags::SEND_KEY_EVENTS)
    }

    pub fn set_send_key_events(&mut self, send: bool) {
        self.flags.set(WidgetFlags::SEND_KEY_EVENTS, send);
    }

    pub fn auto_shortcut(&self) -> bool {
        self.flags.contains(WidgetFlags::AUTO_SHORTCUT)
    }

    pub fn set_auto_shortcut(&mut self, auto: bool) {
        self.flags.set(WidgetFlags::AUTO_SHORTCUT, auto);
    }

    // Layout hints

    pub fn stretchable(&self, dim: Dimension) -> bool {
        self.stretch[dim]
    }

    pub fn set_stretchable(&mut self, dim: Dimension, stretch: bool) {
        self.stretch[dim] = stretch;
    }

    /// Turn stretching on if requested; never turns it off.
    pub fn set_default_stretchable(&mut self, dim: Dimension, stretch: bool) {
        self.stretch[dim] |= stretch;
    }

    pub fn weight(&self, dim: Dimension) -> u32 {
        self.weight[dim]
    }

    pub fn set_weight(&mut self, dim: Dimension, weight: u32) {
        self.weight[dim] = weight;
    }

    pub fn has_weight(&self, dim: Dimension) -> bool {
        self.weight(dim) > 0
    }

    pub fn preferred_size(&self, dim: Dimension) -> u32 {
        self.widget.preferred_size(dim)
    }

    // Keyboard

    pub fn function_key(&self) -> Option<u32> {
        self.function_key
    }

    /// Bind function key `F<key>`; `0` removes the binding.
    pub fn set_function_key(&mut self, key: u32) {
        self.function_key = (key > 0).then_some(key);
    }

    pub fn has_function_key(&self) -> bool {
        self.function_key.is_some()
    }

    // Descriptive text

    pub fn widget_name(&self) -> &str {
        &self.name
    }

    pub fn set_widget_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn set_help_text(&mut self, help_text: impl Into<String>) {
        self.help_text = help_text.into();
    }

    // Backend

    pub fn backend(&self) -> Option<BackendHandle> {
        self.backend
    }

    pub fn set_backend(&mut self, backend: Option<BackendHandle>) {
        self.backend = backend;
    }
}
