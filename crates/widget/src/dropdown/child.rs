use std::rc::Rc;

use crate::core::Element;
use crate::dropdown::{Child, Controls, Part, Status};
use crate::shared::{RcWrapper, WeakWrapper};

/// The state shared by every child of a dropdown: it mirrors whatever the
/// dropdown last broadcast.
pub(super) struct Mirror {
    state: RcWrapper<MirrorState>,
}

pub(super) struct MirrorState {
    part: Part,
    controls: Rc<dyn Controls>,
    element: Option<Rc<dyn Element>>,
    status: Option<Status>,
}

impl Clone for Mirror {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl Mirror {
    pub(super) fn new(part: Part, controls: Rc<dyn Controls>) -> Self {
        Self {
            state: RcWrapper::new(MirrorState {
                part,
                controls,
                element: None,
                status: None,
            }),
        }
    }

    pub(super) fn mount(&self, element: Rc<dyn Element>) {
        let (part, controls) = self.state.with_data_mut(|state| {
            state.element = Some(element);
            (state.part, Rc::clone(&state.controls))
        });

        controls.register(part, self.as_child(), true);
    }

    pub(super) fn destroy(&self) {
        let (part, controls) = self.state.with_data_mut(|state| {
            state.element = None;
            (state.part, Rc::clone(&state.controls))
        });

        controls.register(part, self.as_child(), false);
    }

    pub(super) fn controls(&self) -> Rc<dyn Controls> {
        self.state.with_data(|state| Rc::clone(&state.controls))
    }

    pub(super) fn element(&self) -> Option<Rc<dyn Element>> {
        self.state.with_data(|state| state.element.clone())
    }

    pub(super) fn status(&self) -> Option<Status> {
        self.state.with_data(|state| state.status.clone())
    }

    pub(super) fn is_open(&self) -> bool {
        self.state
            .with_data(|state| state.status.as_ref().is_some_and(|status| status.open))
    }

    fn as_child(&self) -> Rc<dyn Child> {
        Rc::new(MirrorChild {
            state: self.state.downgrade(),
        })
    }
}

struct MirrorChild {
    state: WeakWrapper<MirrorState>,
}

impl Child for MirrorChild {
    fn element(&self) -> Option<Rc<dyn Element>> {
        self.state
            .upgrade()?
            .with_data(|state| state.element.clone())
    }

    fn set_dropdown_status(&self, status: &Status) {
        let Some(state) = self.state.upgrade() else {
            return;
        };

        state.with_data_mut(|state| {
            log::debug!("dropdown::{:?}::set_dropdown_status: {status:?}", state.part);
            state.status = Some(status.clone());
        });
    }
}
