//! Integration tests for widget descriptions and tree dumps.

use arbor_core::geometry::Dimension;
use arbor_test_utils::{ProbeWidget, fixtures};
use arbor_widget::widgets::{Container, Dialog, Label};
use arbor_widget::{BackendHandle, TreeConfig, WidgetTree};

#[test]
fn test_dump_sample_tree() {
    let sample = fixtures::sample_tree();
    let mut lines: Vec<String> = Vec::new();

    sample.tree.dump_tree(sample.root, 0, &mut lines);

    assert_eq!(
        lines,
        vec![
            format!("Widget tree: Root at {}", sample.root),
            format!("Widget tree:     A ID: \"a\" at {}", sample.a),
            format!("Widget tree:         C ID: \"c\" at {}", sample.c),
            format!("Widget tree:     B ID: \"b\" at {}", sample.b),
        ]
    );
}

#[test]
fn test_dump_respects_indent_width_and_start_level() {
    let mut tree = WidgetTree::with_config(TreeConfig {
        dump_indent_width: 2,
        ..TreeConfig::default()
    });
    let root = tree.create(Container::new(), None).unwrap();
    let leaf = tree.create(Label::new("leaf"), Some(root)).unwrap();
    tree.set_backend(leaf, BackendHandle::from_raw(0x10));
    tree.node_mut(leaf).set_stretchable(Dimension::Horizontal, true);
    tree.node_mut(leaf).set_stretchable(Dimension::Vertical, true);

    let mut lines: Vec<String> = Vec::new();
    tree.dump_tree(root, 1, &mut lines);

    assert_eq!(lines[0], format!("Widget tree:   Container at {}", root));
    assert_eq!(
        lines[1],
        format!(
            "Widget tree:     Label \"leaf\" at {} (widgetRep: 0x10) ( hstretch vstretch ) ",
            leaf
        )
    );
}

#[test]
fn test_dump_dialog_tree_and_logged_dump_do_not_panic() {
    arbor_test_utils::init_logging();
    let mut tree = WidgetTree::new();
    let dialog = tree.create(Dialog::new(), None).unwrap();
    let leaf = tree
        .create(ProbeWidget::new("Probe").with_label("&Probe"), Some(dialog))
        .unwrap();

    tree.dump_dialog_tree(leaf);
    tree.dump_tree_logged(dialog, 0);

    assert_eq!(tree.display(leaf).to_string(), format!("Probe \"Probe\" at {}", leaf));
}

#[test]
fn test_debug_label_honours_configured_length() {
    let mut tree = WidgetTree::with_config(TreeConfig {
        max_debug_label_len: 5,
        ..TreeConfig::default()
    });
    let label = tree.create(Label::new("&Abcdefgh"), None).unwrap();
    let exact = tree.create(Label::new("Abcde"), None).unwrap();

    assert_eq!(tree.debug_label(label), "Abcde...");
    assert_eq!(tree.debug_label(exact), "Abcde");
}
