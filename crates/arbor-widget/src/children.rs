//! Children stores.
//!
//! A widget owns exactly one [`ChildrenStore`], chosen from its kind's
//! [`ChildrenPolicy`] when the widget is created. The store only keeps the
//! ordered list of child handles; the nodes themselves live in the tree's
//! arena and are released by [`WidgetTree::destroy`].
//!
//! [`WidgetTree::destroy`]: crate::WidgetTree::destroy

use crate::handle::WidgetHandle;

/// How many direct children a widget kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChildrenPolicy {
    /// No children at all (labels, input fields, ...).
    #[default]
    Rejector,
    /// At most one child (frames, alignments, ...).
    Single,
    /// Any number of children (dialogs, layout boxes, ...).
    Multi,
}

/// Why a store refused a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRejected {
    /// The store accepts no children.
    Rejected,
    /// The store is full.
    Full { limit: usize },
}

/// Ordered list of a widget's direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildrenStore {
    Rejector,
    Single(Option<WidgetHandle>),
    Multi(Vec<WidgetHandle>),
}

impl ChildrenStore {
    pub fn new(policy: ChildrenPolicy) -> Self {
        match policy {
            ChildrenPolicy::Rejector => ChildrenStore::Rejector,
            ChildrenPolicy::Single => ChildrenStore::Single(None),
            ChildrenPolicy::Multi => ChildrenStore::Multi(Vec::new()),
        }
    }

    pub fn policy(&self) -> ChildrenPolicy {
        match self {
            ChildrenStore::Rejector => ChildrenPolicy::Rejector,
            ChildrenStore::Single(_) => ChildrenPolicy::Single,
            ChildrenStore::Multi(_) => ChildrenPolicy::Multi,
        }
    }

    /// Whether [`add`](Self::add) would currently succeed.
    pub fn can_add(&self) -> Result<(), AddRejected> {
        match self {
            ChildrenStore::Rejector => Err(AddRejected::Rejected),
            ChildrenStore::Single(Some(_)) => Err(AddRejected::Full { limit: 1 }),
            ChildrenStore::Single(None) | ChildrenStore::Multi(_) => Ok(()),
        }
    }

    /// Append a child. The store is left untouched on failure.
    ///
    /// Duplicate detection is the caller's job; see
    /// [`TreeConfig::check_duplicate_children`](crate::TreeConfig::check_duplicate_children).
    pub fn add(&mut self, child: WidgetHandle) -> Result<(), AddRejected> {
        match self {
            ChildrenStore::Rejector => return Err(AddRejected::Rejected),
            ChildrenStore::Single(Some(_)) => return Err(AddRejected::Full { limit: 1 }),
            ChildrenStore::Single(slot) => *slot = Some(child),
            ChildrenStore::Multi(list) => list.push(child),
        }
        Ok(())
    }

    /// Remove a child, keeping the order of the others. Returns whether it was present.
    pub fn remove(&mut self, child: WidgetHandle) -> bool {
        match self {
            ChildrenStore::Rejector => false,
            ChildrenStore::Single(slot) => {
                if *slot == Some(child) {
                    *slot = None;
                    true
                } else {
                    false
                }
            }
            ChildrenStore::Multi(list) => match list.iter().position(|c| *c == child) {
                Some(pos) => {
                    list.remove(pos);
                    true
                }
                None => false,
            },
        }
    }

    pub fn clear(&mut self) {
        match self {
            ChildrenStore::Rejector => {}
            ChildrenStore::Single(slot) => *slot = None,
            ChildrenStore::Multi(list) => list.clear(),
        }
    }

    pub fn contains(&self, child: WidgetHandle) -> bool {
        self.as_slice().contains(&child)
    }

    /// Children in insertion order.
    pub fn as_slice(&self) -> &[WidgetHandle] {
        match self {
            ChildrenStore::Rejector | ChildrenStore::Single(None) => &[],
            ChildrenStore::Single(Some(child)) => std::slice::from_ref(child),
            ChildrenStore::Multi(list) => list,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WidgetHandle> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn first(&self) -> Option<WidgetHandle> {
        self.as_slice().first().copied()
    }

    pub fn last(&self) -> Option<WidgetHandle> {
        self.as_slice().last().copied()
    }
}

impl<'a> IntoIterator for &'a ChildrenStore {
    type Item = &'a WidgetHandle;
    type IntoIter = std::slice::Iter<'a, WidgetHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
