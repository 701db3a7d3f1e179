//! Macro recorder interface.
//!
//! [`WidgetTree::capture_user_input`](crate::WidgetTree::capture_user_input)
//! walks a dialog and reports every widget holding user input. What the
//! recorder does with it (serialise, replay later) is up to the recorder.

use crate::handle::WidgetHandle;
use crate::tree::WidgetTree;

pub trait MacroRecorder {
    /// Record `property` of `widget`.
    ///
    /// The recorder reads the value itself through `tree`, usually with
    /// [`WidgetTree::get_property`], and keys it by the widget's id.
    fn record_widget_property(
        &mut self,
        tree: &WidgetTree,
        widget: WidgetHandle,
        property: &'static str,
    );
}
