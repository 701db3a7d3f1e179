//! Arbor widget core - backend-independent widget tree
//!
//! This crate provides the part of a UI toolkit every backend shares:
//! - Generational widget handles over an arena-owned tree
//! - Children stores that reject, hold one or hold many children
//! - Typed, named properties with a per-kind registry
//! - Tree algorithms: id lookup, bulk enable, input capture, dialog lookup
//! - Diagnostic labels and tree dumps
//!
//! Rendering, layout, event delivery and shortcut assignment belong to
//! backends and are not part of this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor_widget::property::{names, PropertyValue};
//! use arbor_widget::widgets::{CheckBox, Dialog, InputField};
//! use arbor_widget::{WidgetId, WidgetTree};
//!
//! let mut tree = WidgetTree::new();
//! let dialog = tree.create(Dialog::new(), None)?;
//! let name = tree.create(InputField::new("&Name"), Some(dialog))?;
//! tree.node_mut(name).set_id("name");
//! tree.create(CheckBox::new("&Remember"), Some(dialog))?;
//!
//! let found = tree.find_by_id(dialog, &WidgetId::name("name"), true)?;
//! assert_eq!(found, Some(name));
//!
//! tree.set_property(name, names::VALUE, PropertyValue::from("Ada"))?;
//! tree.set_children_enabled(dialog, false);
//! assert!(!tree.node(name).is_enabled());
//!
//! tree.destroy(dialog);
//! assert!(tree.is_empty());
//! # Ok::<(), arbor_widget::WidgetError>(())
//! ```

pub mod children;
pub mod config;
pub mod debug;
pub mod error;
pub mod handle;
pub mod id;
pub mod node;
pub mod property;
pub mod recorder;
pub mod shortcut;
pub mod traverse;
pub mod tree;
pub mod widget;
pub mod widgets;

pub use children::{ChildrenPolicy, ChildrenStore};
pub use config::TreeConfig;
pub use debug::{DumpSink, TracingSink, WidgetDisplay};
pub use error::{WidgetError, WidgetRef, WidgetResult};
pub use handle::{BackendHandle, WidgetHandle};
pub use id::WidgetId;
pub use node::{WidgetFlags, WidgetNode};
pub use property::{Property, PropertySet, PropertyType, PropertyValue};
pub use recorder::MacroRecorder;
pub use tree::WidgetTree;
pub use widget::Widget;
