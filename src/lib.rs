//! `mdc_ui` coordinates the open and selected state of dropdowns, menus,
//! menu bars, lists and tab bars, and places floating panels against their
//! triggers.
//!
//! Rendering is left to the host. It implements [`Element`] for whatever it
//! draws, hands a [`Scheduler`] to the widgets that wait for layout, and
//! flushes it once per rendered frame.
//!
//! ```
//! use std::rc::Rc;
//!
//! use mdc_ui::runtime::Frames;
//! use mdc_ui::{Menu, MenuBar};
//!
//! let frames = Frames::new();
//! let bar = MenuBar::new();
//! let file = Menu::new(Rc::new(frames.clone())).bar(bar.controls());
//!
//! assert!(!file.is_open());
//! assert!(bar.is_empty());
//! ```
//!
//! [`Element`]: crate::core::Element
//! [`Scheduler`]: crate::runtime::Scheduler
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use mdc_ui_core as core;
pub use mdc_ui_runtime as runtime;
pub use mdc_ui_widget as widget;

pub use crate::core::position::{self, Options};
pub use crate::core::{
    Element, Error, Event, Handle, Horizontal, Position, Rectangle, Size, Vertical,
};
pub use crate::widget::dropdown::{self, Dropdown};
pub use crate::widget::menu::{self, Menu};
pub use crate::widget::menu_bar::{self, MenuBar};
pub use crate::widget::{list, selection, tab_bar};
