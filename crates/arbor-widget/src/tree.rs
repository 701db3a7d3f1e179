//! The widget tree: node ownership, lifecycle and property dispatch.
//!
//! All nodes live in the tree's generational arena. Creating a node is the
//! only way to get one, and destroying a node is the only way to release it
//! together with its descendants.
//!
//! # Ownership
//!
//! - A parent owns its children through its [`ChildrenStore`].
//! - A child refers back to its parent by [`WidgetHandle`], which never owns.
//! - The back-reference and the parent's store always agree; operations that
//!   would break that agreement fail before mutating either side.
//!
//! # Validity
//!
//! Every entry point taking a [`WidgetHandle`] first checks that the handle
//! still names a live node. Using a destroyed handle is a programming error
//! and panics; use [`WidgetTree::is_valid`] when a handle may be stale.
//!
//! # Example
//!
//! ```
//! use arbor_widget::widgets::{Dialog, InputField, Label};
//! use arbor_widget::WidgetTree;
//!
//! let mut tree = WidgetTree::new();
//! let dialog = tree.create(Dialog::new(), None).unwrap();
//! let label = tree.create(Label::new("&Name:"), Some(dialog)).unwrap();
//! let input = tree.create(InputField::new("Name"), Some(dialog)).unwrap();
//!
//! assert_eq!(tree.node(dialog).children().as_slice(), &[label, input]);
//!
//! tree.destroy(dialog);
//! assert!(!tree.is_valid(input));
//! ```

use crate::children::{AddRejected, ChildrenPolicy, ChildrenStore};
use crate::config::TreeConfig;
use crate::error::{WidgetError, WidgetRef, WidgetResult};
use crate::handle::{BackendHandle, WidgetHandle};
use crate::node::WidgetNode;
use crate::property::{PropertyError, PropertyValue, names};
use crate::widget::Widget;
use arbor_core::alloc::Arena;
use arbor_core::profiling::profile_function;

/// Owner of every widget node.
pub struct WidgetTree {
    nodes: Arena<WidgetNode>,
    config: TreeConfig,
}

impl WidgetTree {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            nodes: Arena::new(),
            config,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `handle` still names a live node.
    pub fn is_valid(&self, handle: WidgetHandle) -> bool {
        self.nodes.contains(handle.slot())
    }

    /// Live nodes without a parent, in creation-slot order.
    pub fn roots(&self) -> impl Iterator<Item = WidgetHandle> + '_ {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(slot, _)| WidgetHandle::from_slot(slot))
    }

    /// The node behind `handle`.
    ///
    /// # Panics
    ///
    /// If the widget was destroyed.
    pub fn node(&self, handle: WidgetHandle) -> &WidgetNode {
        match self.nodes.try_get(handle.slot()) {
            Some(node) => node,
            None => panic!("use of destroyed widget {}", handle),
        }
    }

    /// Mutable access to the node behind `handle`.
    ///
    /// # Panics
    ///
    /// If the widget was destroyed.
    pub fn node_mut(&mut self, handle: WidgetHandle) -> &mut WidgetNode {
        match self.nodes.try_get_mut(handle.slot()) {
            Some(node) => node,
            None => panic!("use of destroyed widget {}", handle),
        }
    }

    pub fn try_node(&self, handle: WidgetHandle) -> Option<&WidgetNode> {
        self.nodes.try_get(handle.slot())
    }

    /// The widget kind behind `handle` as `T`.
    pub fn widget<T: Widget>(&self, handle: WidgetHandle) -> Option<&T> {
        self.node(handle).downcast::<T>()
    }

    pub fn widget_mut<T: Widget>(&mut self, handle: WidgetHandle) -> Option<&mut T> {
        self.node_mut(handle).downcast_mut::<T>()
    }

    /// Class and handle of a live widget, for error reporting.
    pub fn widget_ref(&self, handle: WidgetHandle) -> WidgetRef {
        WidgetRef {
            class: self.node(handle).widget_class(),
            handle,
        }
    }

    pub fn parent(&self, handle: WidgetHandle) -> Option<WidgetHandle> {
        self.node(handle).parent()
    }

    pub fn children(&self, handle: WidgetHandle) -> &[WidgetHandle] {
        self.node(handle).children().as_slice()
    }

    /// Bind or unbind the backend's token for `handle`.
    pub fn set_backend(&mut self, handle: WidgetHandle, backend: Option<BackendHandle>) {
        self.node_mut(handle).set_backend(backend);
    }

    pub fn backend(&self, handle: WidgetHandle) -> Option<BackendHandle> {
        self.node(handle).backend()
    }

    /// Whether `ancestor` appears on the parent chain of `handle`.
    pub fn is_ancestor(&self, ancestor: WidgetHandle, handle: WidgetHandle) -> bool {
        let mut current = self.node(handle).parent();
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.node(parent).parent();
        }
        false
    }

    // Lifecycle

    /// Create a widget, optionally as the last child of `parent`.
    ///
    /// Fails without leaving a node behind if the parent is being destroyed
    /// or its children store does not accept another child.
    ///
    /// # Panics
    ///
    /// If `parent` was destroyed.
    pub fn create<W: Widget>(
        &mut self,
        widget: W,
        parent: Option<WidgetHandle>,
    ) -> WidgetResult<WidgetHandle> {
        self.create_boxed(Box::new(widget), parent)
    }

    pub fn create_boxed(
        &mut self,
        widget: Box<dyn Widget>,
        parent: Option<WidgetHandle>,
    ) -> WidgetResult<WidgetHandle> {
        if let Some(parent) = parent {
            self.check_can_adopt(parent)?;
        }

        let handle = WidgetHandle::from_slot(self.nodes.push(WidgetNode::new(widget, parent)));

        if let Some(parent) = parent
            && let Err(err) = self.add_child(parent, handle)
        {
            self.nodes.remove(handle.slot());
            return Err(err);
        }

        tracing::debug!("Created {}", self.display(handle));
        Ok(handle)
    }

    /// Attach a parentless widget as the last child of `parent`.
    ///
    /// A widget's parent is set once. Giving a widget that already has a
    /// parent a different one fails with [`WidgetError::AlreadyHasParent`],
    /// and repeating the same parent fails with [`WidgetError::DuplicateChild`].
    /// Neither side changes on failure.
    pub fn set_parent(&mut self, child: WidgetHandle, parent: WidgetHandle) -> WidgetResult<()> {
        let child_ref = self.widget_ref(child);
        let parent_ref = self.widget_ref(parent);

        if let Some(current) = self.node(child).parent()
            && current != parent
        {
            self.dump_dialog_tree(child);
            tracing::warn!(
                "Reparenting {} from {} to {}",
                self.display(child),
                self.display(current),
                self.display(parent)
            );
            return Err(WidgetError::AlreadyHasParent {
                child: child_ref,
                parent: self.widget_ref(current),
            });
        }

        if self.node(child).parent() == Some(parent) {
            tracing::error!(
                "{} already contains {}",
                self.display(parent),
                self.display(child)
            );
            return Err(WidgetError::DuplicateChild {
                parent: parent_ref,
                child: child_ref,
            });
        }

        if child == parent || self.is_ancestor(child, parent) {
            return Err(WidgetError::WouldCreateCycle {
                child: child_ref,
                parent: parent_ref,
            });
        }

        self.add_child(parent, child)?;
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Replace the children store with an empty one of another policy.
    ///
    /// Only allowed while the current store is empty; the old store is dropped.
    pub fn set_children_policy(
        &mut self,
        handle: WidgetHandle,
        policy: ChildrenPolicy,
    ) -> WidgetResult<()> {
        let node = self.node(handle);
        if node.has_children() {
            return Err(WidgetError::ChildrenStoreInUse {
                widget: self.widget_ref(handle),
                children: node.child_count(),
            });
        }
        self.node_mut(handle).children = ChildrenStore::new(policy);
        Ok(())
    }

    /// Destroy a widget and all its descendants.
    ///
    /// Children go first, depth-first. The widget then leaves its parent's
    /// store (unless the parent is itself being torn down), drops its id and
    /// its handle becomes invalid.
    ///
    /// # Panics
    ///
    /// If the widget was already destroyed.
    pub fn destroy(&mut self, handle: WidgetHandle) {
        profile_function!();
        tracing::debug!("Destroying {}", self.display(handle));

        let node = self.node_mut(handle);
        node.being_destroyed = true;
        let children = node.children.as_slice().to_vec();

        for child in children {
            if self.is_valid(child) {
                self.destroy(child);
            }
        }

        let node = self.node_mut(handle);
        node.children.clear();
        let parent = node.parent;

        if let Some(parent) = parent {
            self.remove_child(parent, handle);
        }

        self.node_mut(handle).id = None;
        self.nodes.remove(handle.slot());
    }

    fn check_can_adopt(&self, parent: WidgetHandle) -> WidgetResult<()> {
        let node = self.node(parent);
        if node.being_destroyed {
            return Err(WidgetError::ParentBeingDestroyed {
                parent: self.widget_ref(parent),
            });
        }
        node.children
            .can_add()
            .map_err(|rejected| self.rejection_error(parent, rejected))
    }

    fn add_child(&mut self, parent: WidgetHandle, child: WidgetHandle) -> WidgetResult<()> {
        self.check_can_adopt(parent)?;

        if self.config.check_duplicate_children && self.node(parent).children.contains(child) {
            tracing::error!(
                "{} already contains {}",
                self.display(parent),
                self.display(child)
            );
            return Err(WidgetError::DuplicateChild {
                parent: self.widget_ref(parent),
                child: self.widget_ref(child),
            });
        }

        if let Err(rejected) = self.node_mut(parent).children.add(child) {
            return Err(self.rejection_error(parent, rejected));
        }
        Ok(())
    }

    fn remove_child(&mut self, parent: WidgetHandle, child: WidgetHandle) {
        if let Some(node) = self.nodes.try_get_mut(parent.slot())
            && !node.being_destroyed
        {
            node.children.remove(child);
        }
    }

    fn rejection_error(&self, parent: WidgetHandle, rejected: AddRejected) -> WidgetError {
        let parent = self.widget_ref(parent);
        match rejected {
            AddRejected::Rejected => WidgetError::ChildrenRejected { parent },
            AddRejected::Full { limit } => WidgetError::TooManyChildren { parent, limit },
        }
    }

    // Properties

    /// Read a property through the widget kind, falling back to the base properties.
    pub fn get_property(&self, handle: WidgetHandle, name: &str) -> WidgetResult<PropertyValue> {
        let node = self.node(handle);
        node.widget
            .property_set()
            .check(name)
            .map_err(|err| err.for_widget(name, self.widget_ref(handle)))?;

        if let Some(value) = node.widget.get_property(name) {
            return Ok(value);
        }

        let value = match name {
            names::ENABLED => PropertyValue::Bool(node.is_enabled()),
            names::NOTIFY => PropertyValue::Bool(node.notify()),
            names::WIDGET_CLASS => PropertyValue::from(node.widget_class()),
            names::WIDGET_NAME => PropertyValue::from(node.widget_name()),
            names::HELP_TEXT => PropertyValue::from(node.help_text()),
            names::DEBUG_LABEL => PropertyValue::String(self.debug_label(handle)),
            _ => return Err(self.unimplemented_property(handle, name)),
        };
        Ok(value)
    }

    /// Write a property through the widget kind, falling back to the base properties.
    ///
    /// Unknown names, mismatched value types and read-only properties are
    /// rejected before anything is modified.
    pub fn set_property(
        &mut self,
        handle: WidgetHandle,
        name: &str,
        value: PropertyValue,
    ) -> WidgetResult<()> {
        let widget = self.widget_ref(handle);
        self.node(handle)
            .widget
            .property_set()
            .check_writable(name, &value)
            .map_err(|err| err.for_widget(name, widget))?;

        let node = self.node_mut(handle);
        if node.widget.set_property(name, &value) {
            return Ok(());
        }

        match (name, value) {
            (names::ENABLED, PropertyValue::Bool(enabled)) => node.set_enabled(enabled),
            (names::NOTIFY, PropertyValue::Bool(notify)) => node.set_notify(notify),
            (names::WIDGET_NAME, PropertyValue::String(widget_name)) => {
                node.set_widget_name(widget_name)
            }
            (names::HELP_TEXT, PropertyValue::String(text)) => node.set_help_text(text),
            _ => return Err(self.unimplemented_property(handle, name)),
        }
        Ok(())
    }

    fn unimplemented_property(&self, handle: WidgetHandle, name: &str) -> WidgetError {
        let widget = self.widget_ref(handle);
        tracing::error!(
            "{} declares property \"{}\" but does not implement it",
            widget,
            name
        );
        PropertyError::NotFound.for_widget(name, widget)
    }

    // Widget kind hooks

    /// Pass a new shortcut label to the widget kind.
    pub fn set_shortcut_string(&mut self, handle: WidgetHandle, shortcut: &str) {
        let node = self.node_mut(handle);
        if !node.widget.set_shortcut_string(shortcut) {
            tracing::error!(
                "Default set_shortcut_string() called - this should be reimplemented in {}",
                node.widget_class()
            );
        }
    }

    /// Ask the widget to take the keyboard focus.
    pub fn set_keyboard_focus(&mut self, handle: WidgetHandle) -> bool {
        let accepted = self.node_mut(handle).widget.set_keyboard_focus();
        if !accepted {
            tracing::warn!("{} cannot accept the keyboard focus", self.display(handle));
        }
        accepted
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}
