//! Events dispatched by widgets.
use std::fmt;

use crate::Handle;

/// An event fired by a widget through its element.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The kind of event.
    pub name: Name,
    /// The payload of the event.
    pub detail: Detail,
}

impl Event {
    /// Creates a new [`Event`].
    pub fn new(name: Name, id: impl Into<String>, status: Status) -> Self {
        Self {
            name,
            detail: Detail {
                id: id.into(),
                status,
            },
        }
    }
}

/// The name of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Name {
    /// The widget has mounted its element.
    Init,

    /// The widget has changed its open or disabled state.
    StatusChange,
}

impl Name {
    /// Returns the name of the event, as seen by listeners.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::StatusChange => "statuschange",
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    /// The markup id of the element that fired the event.
    pub id: String,
    /// The state of the widget after the change.
    pub status: Status,
}

/// The state carried by an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The state of a dropdown or menu.
    Dropdown {
        /// Whether the content is shown.
        open: bool,
        /// Whether the dropdown ignores open requests.
        disabled: bool,
    },

    /// The state of a menu bar.
    MenuBar {
        /// The menu that was opened or closed.
        menu_item: Handle,
        /// Whether any menu of the bar is open.
        open: bool,
    },
}

impl Status {
    /// Returns whether the widget is open.
    pub fn is_open(&self) -> bool {
        match self {
            Self::Dropdown { open, .. } | Self::MenuBar { open, .. } => *open,
        }
    }
}
