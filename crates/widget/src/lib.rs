//! The built-in widgets of `mdc_ui`.
//!
//! Every widget here is a parent or a child. Parents own the authoritative
//! state and keep a [`Registry`] of their children. Children register a small
//! set of controls on mount, call up into their parent on interaction and
//! mirror whatever the parent pushes back down.
//!
//! All the controls exchanged between widgets are weak: once a widget is
//! gone, calling into it does nothing.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use mdc_ui_core as core;
pub use mdc_ui_runtime as runtime;

pub mod dropdown;
pub mod list;
pub mod menu;
pub mod menu_bar;
pub mod registry;
pub mod selection;
pub mod tab_bar;

mod shared;

#[cfg(test)]
mod test_utils;

pub use dropdown::Dropdown;
pub use list::List;
pub use menu::Menu;
pub use menu_bar::MenuBar;
pub use registry::Registry;
pub use selection::Selection;
pub use tab_bar::TabBar;
