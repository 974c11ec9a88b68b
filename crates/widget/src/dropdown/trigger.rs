use std::rc::Rc;

use super::child::Mirror;
use crate::core::Element;
use crate::dropdown::{Controls, Part, Status};

/// The element opening a dropdown.
#[derive(Clone)]
pub struct Trigger {
    mirror: Mirror,
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger")
            .field("status", &self.mirror.status())
            .finish()
    }
}

impl Trigger {
    /// Creates a [`Trigger`] talking to its dropdown through `controls`.
    pub fn new(controls: Rc<dyn Controls>) -> Self {
        Self {
            mirror: Mirror::new(Part::Trigger, controls),
        }
    }

    /// Stores the element and registers with the dropdown.
    pub fn mount(&self, element: Rc<dyn Element>) {
        log::debug!("dropdown-trigger::mount: {element:?}");
        self.mirror.mount(element);
    }

    /// Handles the interaction that opens the dropdown (a click, or a hover
    /// inside an open menu bar).
    pub fn on_trigger_event(&self) {
        log::debug!("dropdown-trigger::on_trigger_event");
        self.mirror.controls().open();
    }

    /// Handles a click landing outside of the trigger, closing the dropdown
    /// if it is open.
    pub fn not_on_click(&self) {
        log::debug!("dropdown-trigger::not_on_click");

        if self.mirror.element().is_none() || !self.is_open() {
            return;
        }

        self.mirror.controls().close();
    }

    /// Returns the last [`Status`] received from the dropdown.
    pub fn status(&self) -> Option<Status> {
        self.mirror.status()
    }

    /// Returns whether the dropdown was open when it last broadcast.
    pub fn is_open(&self) -> bool {
        self.mirror.is_open()
    }

    /// Unregisters from the dropdown and forgets the element.
    pub fn destroy(&self) {
        log::debug!("dropdown-trigger::destroy");
        self.mirror.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dropdown::Dropdown;
    use crate::runtime::Frames;
    use crate::test_utils::MockElement;

    fn mounted() -> (Dropdown, Trigger) {
        let dropdown = Dropdown::new(Rc::new(Frames::new()));
        dropdown.mount(MockElement::new("dropdown"));

        let trigger = Trigger::new(dropdown.controls());
        trigger.mount(MockElement::new("trigger"));

        (dropdown, trigger)
    }

    #[test]
    fn mirrors_the_dropdown() {
        let (dropdown, trigger) = mounted();

        assert_eq!(
            trigger.status(),
            Some(Status {
                id: String::from("dropdown"),
                disabled: false,
                open: false,
            })
        );

        trigger.on_trigger_event();

        assert!(dropdown.is_open());
        assert!(trigger.is_open());
    }

    #[test]
    fn clicks_elsewhere_close_an_open_dropdown() {
        let (dropdown, trigger) = mounted();

        trigger.not_on_click();
        assert!(!dropdown.is_open());

        dropdown.open();
        trigger.not_on_click();

        assert!(!dropdown.is_open());
        assert!(!trigger.is_open());
    }

    #[test]
    fn unmounted_trigger_ignores_clicks_elsewhere() {
        let (dropdown, trigger) = mounted();
        dropdown.open();

        trigger.destroy();
        trigger.not_on_click();

        assert!(dropdown.is_open());
    }
}
