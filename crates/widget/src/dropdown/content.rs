use std::rc::Rc;

use super::child::Mirror;
use crate::core::position::{Options, Position};
use crate::core::{Element, Error};
use crate::dropdown::{Controls, Part, Status};

/// The floating panel of a dropdown.
#[derive(Clone)]
pub struct Content {
    mirror: Mirror,
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Content")
            .field("status", &self.mirror.status())
            .finish()
    }
}

impl Content {
    /// Creates a [`Content`] talking to its dropdown through `controls`.
    pub fn new(controls: Rc<dyn Controls>) -> Self {
        Self {
            mirror: Mirror::new(Part::Content, controls),
        }
    }

    /// Stores the element and registers with the dropdown.
    pub fn mount(&self, element: Rc<dyn Element>) {
        log::debug!("dropdown-content::mount: {element:?}");
        self.mirror.mount(element);
    }

    /// Asks the dropdown where the panel goes and moves the element there.
    ///
    /// Resolves to the applied [`Position`], or `None` if the trigger or the
    /// panel is not mounted.
    pub async fn reposition(&self, options: Options) -> Result<Option<Position>, Error> {
        let Some(position) = self.mirror.controls().calc_content_position(options).await? else {
            return Ok(None);
        };

        let Some(element) = self.mirror.element() else {
            return Ok(None);
        };

        element.set_position(position);

        Ok(Some(position))
    }

    /// Returns the last [`Status`] received from the dropdown.
    pub fn status(&self) -> Option<Status> {
        self.mirror.status()
    }

    /// Returns whether the panel should be shown.
    pub fn is_open(&self) -> bool {
        self.mirror.is_open()
    }

    /// Unregisters from the dropdown and forgets the element.
    pub fn destroy(&self) {
        log::debug!("dropdown-content::destroy");
        self.mirror.destroy();
    }
}
