use std::rc::Rc;

use crate::core::{Element, Ripple, ripple};
use crate::selection::{Controls, Select};
use crate::shared::{RcWrapper, WeakWrapper};

/// What a click on an [`Item`] asks of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Click {
    /// Flip the selection of the item.
    Toggle,
    /// Select the item.
    Select,
}

/// A selectable child of a [`Selection`](crate::selection::Selection).
///
/// The item mirrors the `selected` state its parent last dispatched.
pub(crate) struct Item {
    state: RcWrapper<State>,
}

struct State {
    name: &'static str,
    click: Click,
    controls: Controls,
    element: Option<Rc<dyn Element>>,
    ripple: Option<Box<dyn Ripple>>,
    selected: bool,
}

impl Clone for Item {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.state.with_data(|state| {
            f.debug_struct(state.name)
                .field("element", &state.element)
                .field("selected", &state.selected)
                .finish()
        })
    }
}

impl Item {
    pub(crate) fn new(name: &'static str, click: Click, controls: Controls) -> Self {
        Self {
            state: RcWrapper::new(State {
                name,
                click,
                controls,
                element: None,
                ripple: None,
                selected: false,
            }),
        }
    }

    pub(crate) fn set_ripple(&self, ripple: Box<dyn Ripple>) {
        self.state.with_data_mut(|state| state.ripple = Some(ripple));
    }

    pub(crate) fn mount(&self, element: Rc<dyn Element>) {
        let (name, controls) = self.state.with_data_mut(|state| {
            state.element = Some(Rc::clone(&element));
            (state.name, state.controls.clone())
        });

        log::debug!("{name}::mount: {element:?}");

        self.sync_ripple();

        let handle = element.handle();
        controls.register_item(handle, self.as_select(), true);

        if element.has_attribute("selected") {
            controls.select_item(handle, true);
        }
    }

    pub(crate) fn on_click(&self) {
        let Some((name, controls, handle, selected)) = self.state.with_data(|state| {
            let element = state.element.as_ref()?;
            let selected = match state.click {
                Click::Toggle => !state.selected,
                Click::Select => true,
            };

            Some((state.name, state.controls.clone(), element.handle(), selected))
        }) else {
            return;
        };

        log::debug!("{name}::on_click: {selected}");

        controls.select_item(handle, selected);
    }

    pub(crate) fn on_attribute_mutation(&self) {
        if self.state.with_data(|state| state.element.is_none()) {
            return;
        }

        self.sync_ripple();
    }

    pub(crate) fn is_selected(&self) -> bool {
        self.state.with_data(|state| state.selected)
    }

    pub(crate) fn element(&self) -> Option<Rc<dyn Element>> {
        self.state.with_data(|state| state.element.clone())
    }

    pub(crate) fn destroy(&self) {
        let Some((name, controls, element)) = self.state.with_data_mut(|state| {
            let element = state.element.take()?;
            let _ = state.ripple.take();

            Some((state.name, state.controls.clone(), element))
        }) else {
            return;
        };

        log::debug!("{name}::destroy");

        controls.register_item(element.handle(), self.as_select(), false);
    }

    fn sync_ripple(&self) {
        self.state.with_data(|state| {
            let disabled = state
                .element
                .as_ref()
                .is_some_and(|element| element.is_disabled());

            ripple::sync(state.ripple.as_deref(), disabled);
        });
    }

    fn as_select(&self) -> Rc<dyn Select> {
        Rc::new(ItemSelect {
            state: self.state.downgrade(),
        })
    }
}

struct ItemSelect {
    state: WeakWrapper<State>,
}

impl Select for ItemSelect {
    fn select(&self, selected: bool) {
        let Some(state) = self.state.upgrade() else {
            return;
        };

        state.with_data_mut(|state| {
            log::debug!("{}::select: {selected}", state.name);
            state.selected = selected;
        });
    }
}
