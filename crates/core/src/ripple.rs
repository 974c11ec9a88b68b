//! Touch feedback toggled by widgets.
/// The touch feedback attached to an interactive element.
///
/// Widgets only toggle it; drawing the effect is up to the host.
pub trait Ripple {
    /// Enables the feedback.
    fn activate(&self);

    /// Disables the feedback.
    fn deactivate(&self);
}

/// Activates or deactivates a [`Ripple`] to match the disabled state of its
/// element.
pub fn sync(ripple: Option<&dyn Ripple>, disabled: bool) {
    let Some(ripple) = ripple else {
        return;
    };

    if disabled {
        ripple.deactivate();
    } else {
        ripple.activate();
    }
}
