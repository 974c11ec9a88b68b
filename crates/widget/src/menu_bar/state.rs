//! Menu bar state management

use std::rc::Rc;

use crate::core::Element;
use crate::menu_bar::MenuItem;
use crate::registry::Registry;

/// Inner state data for the menu bar
#[derive(Default)]
pub(crate) struct State {
    pub(crate) element: Option<Rc<dyn Element>>,
    pub(crate) items: Registry<Rc<dyn MenuItem>>,
    /// Whether one of the menus is open
    pub(crate) open: bool,
}

impl State {
    pub(crate) fn reset(&mut self) {
        self.element = None;
        self.items.clear();
        self.open = false;
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("element", &self.element)
            .field("items", &self.items)
            .field("open", &self.open)
            .finish()
    }
}
