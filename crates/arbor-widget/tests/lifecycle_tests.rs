//! Integration tests for widget creation, parenting and destruction.

use arbor_test_utils::{ProbeWidget, fixtures};
use arbor_widget::widgets::{Container, Dialog, Label};
use arbor_widget::{ChildrenPolicy, TreeConfig, WidgetError, WidgetId, WidgetTree};

#[test]
fn test_destroy_root_releases_every_node() {
    let (mut tree, root) = fixtures::balanced_tree(3, 4);
    assert_eq!(tree.len(), 1 + 4 + 16 + 64);

    let leaves: Vec<_> = tree
        .children(tree.children(root)[0])
        .iter()
        .copied()
        .collect();

    tree.destroy(root);

    assert!(tree.is_empty());
    assert!(!tree.is_valid(root));
    assert!(leaves.iter().all(|leaf| !tree.is_valid(*leaf)));
}

#[test]
fn test_parent_and_children_agree() {
    let (tree, root) = fixtures::balanced_tree(3, 3);

    let mut pending = vec![root];
    while let Some(handle) = pending.pop() {
        for &child in tree.children(handle) {
            assert_eq!(tree.parent(child), Some(handle));
            pending.push(child);
        }
        if let Some(parent) = tree.parent(handle) {
            let occurrences = tree
                .children(parent)
                .iter()
                .filter(|c| **c == handle)
                .count();
            assert_eq!(occurrences, 1);
        }
    }
}

#[test]
fn test_destroy_subtree_detaches_from_parent() {
    let mut sample = fixtures::sample_tree();
    let tree = &mut sample.tree;

    tree.destroy(sample.a);

    assert_eq!(tree.children(sample.root), &[sample.b]);
    assert!(!tree.is_valid(sample.c));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_destroy_then_create_reuses_slot_with_new_generation() {
    let mut tree = WidgetTree::new();
    let first = tree.create(Label::new("first"), None).unwrap();
    tree.destroy(first);
    let second = tree.create(Label::new("second"), None).unwrap();

    assert_eq!(first.index(), second.index());
    assert_ne!(first, second);
    assert!(!tree.is_valid(first));
    assert!(tree.is_valid(second));
}

#[test]
fn test_rejector_refuses_children_and_stays_empty() {
    let mut tree = WidgetTree::new();
    let label = tree.create(Label::new("static"), None).unwrap();
    let orphan = tree.create(Label::new("orphan"), None).unwrap();

    let err = tree.set_parent(orphan, label).unwrap_err();

    assert!(matches!(err, WidgetError::ChildrenRejected { .. }));
    assert!(err.is_structural());
    assert!(tree.node(label).children().is_empty());
    assert!(!tree.node(orphan).has_parent());
}

#[test]
fn test_reparent_is_refused() {
    let mut tree = WidgetTree::new();
    let first = tree.create(Container::new(), None).unwrap();
    let second = tree.create(Container::new(), None).unwrap();
    let child = tree.create(Label::new("child"), Some(first)).unwrap();

    let err = tree.set_parent(child, second).unwrap_err();

    match err {
        WidgetError::AlreadyHasParent { child: c, parent } => {
            assert_eq!(c.handle, child);
            assert_eq!(parent.handle, first);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(tree.parent(child), Some(first));
    assert_eq!(tree.children(first), &[child]);
    assert!(tree.children(second).is_empty());
}

#[test]
fn test_set_parent_twice_is_duplicate() {
    let mut tree = WidgetTree::new();
    let parent = tree.create(Container::new(), None).unwrap();
    let child = tree.create(Label::new("child"), None).unwrap();

    tree.set_parent(child, parent).unwrap();
    let err = tree.set_parent(child, parent).unwrap_err();

    assert!(matches!(err, WidgetError::DuplicateChild { .. }));
    assert_eq!(tree.children(parent), &[child]);
}

#[test]
fn test_repeated_parent_is_refused_without_store_scan() {
    let mut tree = WidgetTree::with_config(TreeConfig {
        check_duplicate_children: false,
        ..TreeConfig::default()
    });
    let parent = tree.create(Container::new(), None).unwrap();
    let child = tree.create(Label::new("child"), None).unwrap();

    tree.set_parent(child, parent).unwrap();
    let err = tree.set_parent(child, parent).unwrap_err();

    assert!(matches!(err, WidgetError::DuplicateChild { .. }));
    assert_eq!(tree.children(parent), &[child]);
}

#[test]
fn test_destroyed_child_leaves_no_listing_without_store_scan() {
    let mut tree = WidgetTree::with_config(TreeConfig {
        check_duplicate_children: false,
        ..TreeConfig::default()
    });
    let parent = tree.create(Container::new(), None).unwrap();
    let child = tree.create(Label::new("child"), None).unwrap();
    tree.set_parent(child, parent).unwrap();
    let _ = tree.set_parent(child, parent);

    tree.destroy(child);

    assert!(tree.children(parent).is_empty());
    assert_eq!(
        tree.find_by_id(parent, &WidgetId::name("x"), false).unwrap(),
        None
    );
    tree.set_children_enabled(parent, false);
}

#[test]
fn test_set_parent_refuses_cycles() {
    let mut tree = WidgetTree::new();
    let outer = tree.create(Container::new(), None).unwrap();
    let inner = tree.create(Container::new(), Some(outer)).unwrap();

    let err = tree.set_parent(outer, inner).unwrap_err();
    assert!(matches!(err, WidgetError::WouldCreateCycle { .. }));

    let err = tree.set_parent(outer, outer).unwrap_err();
    assert!(matches!(err, WidgetError::WouldCreateCycle { .. }));
    assert!(tree.node(outer).children().contains(inner));
}

#[test]
fn test_single_store_holds_one_child() {
    let mut tree = WidgetTree::new();
    let frame = tree
        .create(ProbeWidget::new("Frame").with_policy(ChildrenPolicy::Single), None)
        .unwrap();
    let first = tree.create(ProbeWidget::new("Leaf"), Some(frame)).unwrap();

    let err = tree.create(ProbeWidget::new("Leaf"), Some(frame)).unwrap_err();

    assert!(matches!(err, WidgetError::TooManyChildren { limit: 1, .. }));
    assert_eq!(tree.children(frame), &[first]);
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_roots_lists_parentless_widgets() {
    let mut tree = WidgetTree::new();
    let dialog = tree.create(Dialog::new(), None).unwrap();
    tree.create(Label::new("inside"), Some(dialog)).unwrap();
    let popup = tree.create(Dialog::new(), None).unwrap();

    assert_eq!(tree.roots().collect::<Vec<_>>(), vec![dialog, popup]);
}

#[test]
#[should_panic(expected = "destroyed widget")]
fn test_destroying_twice_panics() {
    let mut tree = WidgetTree::new();
    let label = tree.create(Label::new("once"), None).unwrap();
    tree.destroy(label);
    tree.destroy(label);
}

#[test]
#[should_panic(expected = "destroyed widget")]
fn test_creating_under_destroyed_parent_panics() {
    let mut tree = WidgetTree::new();
    let parent = tree.create(Container::new(), None).unwrap();
    tree.destroy(parent);
    let _ = tree.create(Label::new("late"), Some(parent));
}
