//! Recursive algorithms over a widget's descendants.

use crate::error::{WidgetError, WidgetResult};
use crate::handle::WidgetHandle;
use crate::id::WidgetId;
use crate::recorder::MacroRecorder;
use crate::tree::WidgetTree;
use arbor_core::profiling::profile_function;

impl WidgetTree {
    /// Find the first descendant of `from` carrying `id`, in pre-order.
    ///
    /// `from` itself is not a candidate. With `must_find` a miss is
    /// [`WidgetError::WidgetNotFound`], otherwise `Ok(None)`.
    pub fn find_by_id(
        &self,
        from: WidgetHandle,
        id: &WidgetId,
        must_find: bool,
    ) -> WidgetResult<Option<WidgetHandle>> {
        profile_function!();

        for &child in self.node(from).children() {
            let node = self.node(child);

            if node.id() == Some(id) {
                return Ok(Some(child));
            }

            if node.has_children()
                && let Some(found) = self.find_by_id(child, id, false)?
            {
                return Ok(Some(found));
            }
        }

        if must_find {
            Err(WidgetError::WidgetNotFound { id: id.to_string() })
        } else {
            Ok(None)
        }
    }

    /// Enable or disable every descendant of `from`; `from` keeps its own state.
    ///
    /// A container's subtree is updated before the container itself.
    pub fn set_children_enabled(&mut self, from: WidgetHandle, enabled: bool) {
        profile_function!();

        let children = self.node(from).children().as_slice().to_vec();
        for child in children {
            if self.node(child).has_children() {
                self.set_children_enabled(child, enabled);
            }
            self.node_mut(child).set_enabled(enabled);
        }
    }

    /// Report the user-input property of `from` and its descendants to `recorder`.
    ///
    /// Leaves without an id are skipped: a replayed macro could not address them.
    pub fn capture_user_input(&self, from: WidgetHandle, recorder: &mut dyn MacroRecorder) {
        profile_function!();

        let node = self.node(from);
        if let Some(property) = node.widget().user_input_property() {
            recorder.record_widget_property(self, from, property);
        }

        for &child in node.children() {
            let child_node = self.node(child);
            if child_node.has_children() || child_node.has_id() {
                self.capture_user_input(child, recorder);
            }
        }
    }

    /// The nearest dialog on the parent chain, starting at `from` itself.
    pub fn find_dialog(&self, from: WidgetHandle) -> Option<WidgetHandle> {
        let mut current = Some(from);
        while let Some(handle) = current {
            let node = self.node(handle);
            if node.widget().is_dialog() {
                return Some(handle);
            }
            current = node.parent();
        }
        None
    }
}
