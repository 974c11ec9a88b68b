//! A bar of tabs selected by clicking them.
//!
//! Clicking a tab only selects that tab. Deselecting the previous one is up
//! to the caller, usually by listening to the click and calling
//! [`TabBar::select_item`] with `false`.
use std::rc::Rc;

use crate::core::{Element, Handle, Ripple};
use crate::selection::{self, Click, Selection};

/// A bar of tabs.
#[derive(Debug, Clone, Default)]
pub struct TabBar {
    selection: Selection,
}

impl TabBar {
    /// Creates an empty [`TabBar`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects or deselects one tab.
    pub fn select_item(&self, handle: Handle, selected: bool) {
        self.selection.select_item(handle, selected);
    }

    /// Returns whether a tab is registered.
    pub fn contains(&self, handle: Handle) -> bool {
        self.selection.contains(handle)
    }

    /// Returns the number of registered tabs.
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// Returns whether no tab is registered.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Returns the controls the tabs of the [`TabBar`] use.
    pub fn controls(&self) -> selection::Controls {
        self.selection.controls()
    }

    /// Forgets every tab.
    pub fn destroy(&self) {
        log::debug!("tab-bar::destroy");
        self.selection.clear();
    }
}

/// A tab of a [`TabBar`].
#[derive(Debug, Clone)]
pub struct Tab {
    raw: selection::Item,
}

impl Tab {
    /// Creates a [`Tab`] talking to its bar through `controls`.
    pub fn new(controls: selection::Controls) -> Self {
        Self {
            raw: selection::Item::new("tab-bar-tab", Click::Select, controls),
        }
    }

    /// Sets the touch feedback of the [`Tab`].
    #[must_use]
    pub fn ripple(self, ripple: Box<dyn Ripple>) -> Self {
        self.raw.set_ripple(ripple);
        self
    }

    /// Registers with the bar, selecting the tab if its element carries the
    /// `selected` attribute.
    pub fn mount(&self, element: Rc<dyn Element>) {
        self.raw.mount(element);
    }

    /// Selects the [`Tab`].
    pub fn on_click(&self) {
        self.raw.on_click();
    }

    /// Re-syncs the ripple with the `disabled` attribute.
    pub fn on_attribute_mutation(&self) {
        self.raw.on_attribute_mutation();
    }

    /// Returns whether the bar last marked the [`Tab`] as selected.
    pub fn is_selected(&self) -> bool {
        self.raw.is_selected()
    }

    /// Returns the mounted element, if any.
    pub fn element(&self) -> Option<Rc<dyn Element>> {
        self.raw.element()
    }

    /// Leaves the bar.
    pub fn destroy(&self) {
        self.raw.destroy();
    }
}
