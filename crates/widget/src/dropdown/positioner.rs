use std::fmt;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::core::position::{self, Options, Position};
use crate::core::{Element, Error, Rectangle};
use crate::runtime::Scheduler;

/// A strategy placing the content of a dropdown against its trigger.
pub trait Positioner {
    /// Computes the [`Position`] of `content` relative to `trigger`.
    fn position(
        &self,
        trigger: Rc<dyn Element>,
        content: Rc<dyn Element>,
        options: Options,
    ) -> LocalBoxFuture<'static, Result<Position, Error>>;
}

/// The default [`Positioner`].
///
/// Measures both elements and runs [`position::compute`]. When the content
/// must match the trigger width, it is resized first and measured only after
/// two frames, once its height has settled.
pub struct Calculator {
    scheduler: Rc<dyn Scheduler>,
}

impl Calculator {
    /// Creates a [`Calculator`] waiting for layout on the given [`Scheduler`].
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self { scheduler }
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator").finish_non_exhaustive()
    }
}

impl Positioner for Calculator {
    fn position(
        &self,
        trigger: Rc<dyn Element>,
        content: Rc<dyn Element>,
        options: Options,
    ) -> LocalBoxFuture<'static, Result<Position, Error>> {
        let scheduler = Rc::clone(&self.scheduler);

        async move {
            options.validate()?;

            let trigger_bounds = trigger.bounds();

            if options.match_trigger_width {
                content.set_width(trigger_bounds.width);

                scheduler.next_frame().await;
                scheduler.next_frame().await;
            }

            let content_bounds = content.bounds();

            position::compute(trigger_bounds.size(), content_bounds.size(), &options)
        }
        .boxed_local()
    }
}

/// A [`Positioner`] computing positions synchronously with a closure.
///
/// Created with [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a [`Positioner`] from a closure receiving the bounds of the trigger
/// and the content.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(Rectangle, Rectangle, &Options) -> Result<Position, Error>,
{
    FromFn { f }
}

impl<F> Positioner for FromFn<F>
where
    F: Fn(Rectangle, Rectangle, &Options) -> Result<Position, Error>,
{
    fn position(
        &self,
        trigger: Rc<dyn Element>,
        content: Rc<dyn Element>,
        options: Options,
    ) -> LocalBoxFuture<'static, Result<Position, Error>> {
        future::ready((self.f)(trigger.bounds(), content.bounds(), &options)).boxed_local()
    }
}
