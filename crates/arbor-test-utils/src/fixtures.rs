//! Prebuilt trees shared by tests and benches.

use crate::probe::ProbeWidget;
use arbor_widget::{WidgetHandle, WidgetTree};

/// `root -> [a, b]`, `a -> [c]`, with ids `"a"`, `"b"`, `"c"` and user input
/// on `a`, `b` and `c`.
pub struct SampleTree {
    pub tree: WidgetTree,
    pub root: WidgetHandle,
    pub a: WidgetHandle,
    pub b: WidgetHandle,
    pub c: WidgetHandle,
}

pub fn sample_tree() -> SampleTree {
    let mut tree = WidgetTree::new();
    let root = create(&mut tree, ProbeWidget::container("Root"), None);
    let a = create(
        &mut tree,
        ProbeWidget::container("A").with_user_input("a-value"),
        Some(root),
    );
    let b = create(
        &mut tree,
        ProbeWidget::new("B").with_user_input("b-value"),
        Some(root),
    );
    let c = create(
        &mut tree,
        ProbeWidget::new("C").with_user_input("c-value"),
        Some(a),
    );

    tree.node_mut(a).set_id("a");
    tree.node_mut(b).set_id("b");
    tree.node_mut(c).set_id("c");

    SampleTree {
        tree,
        root,
        a,
        b,
        c,
    }
}

/// A balanced tree of `depth` levels below `root`, each inner node with
/// `fanout` children. Leaves get numeric ids in creation order.
pub fn balanced_tree(depth: usize, fanout: usize) -> (WidgetTree, WidgetHandle) {
    let mut tree = WidgetTree::new();
    let root = create(&mut tree, ProbeWidget::container("Root"), None);
    let mut next_id = 0i64;
    grow(&mut tree, root, depth, fanout, &mut next_id);
    (tree, root)
}

fn grow(
    tree: &mut WidgetTree,
    parent: WidgetHandle,
    depth: usize,
    fanout: usize,
    next_id: &mut i64,
) {
    for _ in 0..fanout {
        if depth <= 1 {
            let leaf = create(tree, ProbeWidget::new("Leaf").with_user_input(""), Some(parent));
            tree.node_mut(leaf).set_id(*next_id);
            *next_id += 1;
        } else {
            let inner = create(tree, ProbeWidget::container("Inner"), Some(parent));
            grow(tree, inner, depth - 1, fanout, next_id);
        }
    }
}

fn create(tree: &mut WidgetTree, probe: ProbeWidget, parent: Option<WidgetHandle>) -> WidgetHandle {
    match tree.create(probe, parent) {
        Ok(handle) => handle,
        Err(err) => panic!("fixture widget rejected: {}", err),
    }
}
