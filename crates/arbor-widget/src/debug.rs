//! Human-readable widget descriptions and tree dumps for logs.

use crate::handle::WidgetHandle;
use crate::shortcut::clean_shortcut_string;
use crate::tree::WidgetTree;
use arbor_core::geometry::Dimension;
use std::fmt;

/// Receiver of tree dump lines.
pub trait DumpSink {
    fn line(&mut self, line: &str);
}

impl DumpSink for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Writes every dump line as an `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DumpSink for TracingSink {
    fn line(&mut self, line: &str) {
        tracing::info!("{}", line);
    }
}

/// [`Display`](fmt::Display) adapter returned by [`WidgetTree::display`].
pub struct WidgetDisplay<'a> {
    tree: &'a WidgetTree,
    handle: WidgetHandle,
}

impl fmt::Display for WidgetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(node) = self.tree.try_node(self.handle) else {
            return f.write_str("<destroyed widget>");
        };

        let label = self.tree.debug_label(self.handle);
        f.write_str(node.widget_class())?;

        if !label.is_empty() {
            write!(f, " \"{}\"", label)?;
        } else if let Some(id) = node.id() {
            write!(f, " ID: \"{}\"", id)?;
        }

        write!(f, " at {}", self.handle)?;

        if self.tree.config().log_backend_handles
            && let Some(backend) = node.backend()
        {
            write!(f, " backend {:#x}", backend)?;
        }
        Ok(())
    }
}

impl WidgetTree {
    /// Label text for diagnostics: shortcut markers removed, long labels
    /// shortened with `...`, line breaks flattened.
    pub fn debug_label(&self, handle: WidgetHandle) -> String {
        let raw = self.node(handle).widget().shortcut_string();
        let mut label = clean_shortcut_string(raw);

        let max_len = self.config().max_debug_label_len;
        if let Some((cut, _)) = label.char_indices().nth(max_len) {
            label.truncate(cut);
            label.push_str("...");
        }

        label.replace('\n', " ")
    }

    /// A printable description of `handle`, valid or not.
    pub fn display(&self, handle: WidgetHandle) -> WidgetDisplay<'_> {
        WidgetDisplay { tree: self, handle }
    }

    /// Write `from` and its descendants to `sink`, one line per widget.
    pub fn dump_tree(&self, from: WidgetHandle, level: usize, sink: &mut dyn DumpSink) {
        self.dump_widget(from, level, sink);

        for &child in self.node(from).children() {
            if self.node(child).has_children() {
                self.dump_tree(child, level + 1, sink);
            } else {
                self.dump_widget(child, level + 1, sink);
            }
        }
    }

    /// [`dump_tree`](Self::dump_tree) into the log.
    pub fn dump_tree_logged(&self, from: WidgetHandle, level: usize) {
        self.dump_tree(from, level, &mut TracingSink);
    }

    /// Log the whole dialog containing `from`, or the tree below `from` when
    /// it is not inside a dialog.
    pub fn dump_dialog_tree(&self, from: WidgetHandle) {
        let root = self.find_dialog(from).unwrap_or(from);
        self.dump_tree_logged(root, 0);
    }

    fn dump_widget(&self, handle: WidgetHandle, level: usize, sink: &mut dyn DumpSink) {
        let node = self.node(handle);
        let indent = " ".repeat(level * self.config().dump_indent_width);
        let mut line = format!("Widget tree: {}{}", indent, self.display(handle));

        if let Some(backend) = node.backend() {
            line.push_str(&format!(" (widgetRep: {:#x})", backend));
        }

        let stretch: Vec<&str> = Dimension::ALL
            .into_iter()
            .filter(|dim| node.stretchable(*dim))
            .map(|dim| match dim {
                Dimension::Horizontal => "hstretch",
                Dimension::Vertical => "vstretch",
            })
            .collect();
        if !stretch.is_empty() {
            line.push_str(&format!(" ( {} ) ", stretch.join(" ")));
        }

        sink.line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreeConfig;
    use crate::handle::BackendHandle;
    use crate::widgets::{Container, Label};

    #[test]
    fn test_debug_label_cleans_and_truncates() {
        let mut tree = WidgetTree::new();
        let short = tree.create(Label::new("&Save && Exit"), None).unwrap();
        let long = tree.create(Label::new(&"x".repeat(60)), None).unwrap();
        let multi = tree.create(Label::new("one\ntwo"), None).unwrap();

        assert_eq!(tree.debug_label(short), "Save & Exit");
        assert_eq!(tree.debug_label(long), format!("{}...", "x".repeat(50)));
        assert_eq!(tree.debug_label(multi), "one two");
    }

    #[test]
    fn test_display_variants() {
        let mut tree = WidgetTree::new();
        let labelled = tree.create(Label::new("Name"), None).unwrap();
        let with_id = tree.create(Container::new(), None).unwrap();
        tree.node_mut(with_id).set_id("box");
        let bare = tree.create(Container::new(), None).unwrap();

        assert_eq!(
            tree.display(labelled).to_string(),
            format!("Label \"Name\" at {}", labelled)
        );
        assert_eq!(
            tree.display(with_id).to_string(),
            format!("Container ID: \"box\" at {}", with_id)
        );
        assert_eq!(
            tree.display(bare).to_string(),
            format!("Container at {}", bare)
        );

        tree.destroy(bare);
        assert_eq!(tree.display(bare).to_string(), "<destroyed widget>");
    }

    #[test]
    fn test_display_with_backend_handle() {
        let mut tree = WidgetTree::with_config(TreeConfig {
            log_backend_handles: true,
            ..TreeConfig::default()
        });
        let label = tree.create(Label::new("a"), None).unwrap();
        tree.node_mut(label).set_backend(BackendHandle::from_raw(0x1f));

        assert!(tree.display(label).to_string().ends_with(" backend 0x1f"));
    }

    #[test]
    fn test_dump_tree_format() {
        let mut tree = WidgetTree::new();
        let root = tree.create(Container::new(), None).unwrap();
        let inner = tree.create(Container::new(), Some(root)).unwrap();
        let leaf = tree.create(Label::new("leaf"), Some(inner)).unwrap();
        tree.node_mut(leaf).set_stretchable(Dimension::Horizontal, true);
        tree.node_mut(leaf).set_backend(BackendHandle::from_raw(0xab));

        let mut lines: Vec<String> = Vec::new();
        tree.dump_tree(root, 0, &mut lines);

        assert_eq!(
            lines,
            vec![
                format!("Widget tree: Container at {}", root),
                format!("Widget tree:     Container at {}", inner),
                format!(
                    "Widget tree:         Label \"leaf\" at {} (widgetRep: 0xab) ( hstretch ) ",
                    leaf
                ),
            ]
        );
    }
}
