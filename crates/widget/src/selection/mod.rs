//! Track the selectable items of a list or a tab bar.
//!
//! A [`Selection`] only dispatches: selecting an item never deselects its
//! siblings. Keeping a single item selected is up to the caller, which
//! deselects the previous item itself.
mod item;

pub(crate) use item::{Click, Item};

use std::rc::Rc;

use crate::core::Handle;
use crate::registry::Registry;
use crate::shared::{RcWrapper, WeakWrapper};

/// The controls an item hands to its [`Selection`] when registering.
pub trait Select {
    /// Marks the item as selected or not.
    fn select(&self, selected: bool);
}

/// The selectable items of a parent, keyed by element.
#[derive(Clone, Default)]
pub struct Selection {
    items: RcWrapper<Registry<Rc<dyn Select>>>,
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.items.with_data(|items| {
            f.debug_struct("Selection").field("items", items).finish()
        })
    }
}

impl Selection {
    /// Creates an empty [`Selection`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the controls of an item, or removes the item when
    /// `register` is `false`.
    pub fn register_item(&self, handle: Handle, controls: Rc<dyn Select>, register: bool) {
        log::debug!("selection::register_item: {handle} {register}");

        self.items.with_data_mut(|items| {
            if register {
                let _ = items.register(handle, controls);
            } else if items.unregister(handle).is_none() {
                log::debug!("selection::register_item: item not registered: {handle}");
            }
        });
    }

    /// Selects or deselects a single item.
    pub fn select_item(&self, handle: Handle, selected: bool) {
        log::debug!("selection::select_item: {handle} {selected}");

        let Some(controls) = self.items.with_data(|items| items.get(handle).cloned()) else {
            log::debug!("selection::select_item: item not registered: {handle}");
            return;
        };

        controls.select(selected);
    }

    /// Returns whether an item is registered.
    pub fn contains(&self, handle: Handle) -> bool {
        self.items.with_data(|items| items.contains(handle))
    }

    /// Returns the number of registered items.
    pub fn len(&self) -> usize {
        self.items.with_data(Registry::len)
    }

    /// Returns whether no item is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the [`Controls`] items use to talk to the [`Selection`].
    pub fn controls(&self) -> Controls {
        Controls {
            items: self.items.downgrade(),
        }
    }

    /// Forgets every item.
    pub fn clear(&self) {
        self.items.with_data_mut(Registry::clear);
    }
}

/// The controls a [`Selection`] hands to its items.
///
/// Every call is a no-op once the parent is gone.
#[derive(Clone)]
pub struct Controls {
    items: WeakWrapper<Registry<Rc<dyn Select>>>,
}

impl std::fmt::Debug for Controls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controls")
            .field("alive", &self.items.upgrade().is_some())
            .finish()
    }
}

impl Controls {
    fn selection(&self) -> Option<Selection> {
        self.items.upgrade().map(|items| Selection { items })
    }

    /// See [`Selection::register_item`].
    pub fn register_item(&self, handle: Handle, controls: Rc<dyn Select>, register: bool) {
        if let Some(selection) = self.selection() {
            selection.register_item(handle, controls, register);
        }
    }

    /// See [`Selection::select_item`].
    pub fn select_item(&self, handle: Handle, selected: bool) {
        if let Some(selection) = self.selection() {
            selection.select_item(handle, selected);
        }
    }
}
