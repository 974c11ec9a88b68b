//! Defer work until the host has rendered.
use futures::future::LocalBoxFuture;
use slotmap::new_key_type;

new_key_type! {
    /// A handle to a scheduled [`Task`], used to cancel it.
    pub struct Id;
}

/// A unit of work to run once.
pub type Task = Box<dyn FnOnce()>;

/// A source of "after render" yield points.
pub trait Scheduler {
    /// Schedules the [`Task`] to run once the current render has settled.
    fn schedule_once(&self, task: Task) -> Id;

    /// Cancels a scheduled [`Task`].
    ///
    /// Returns `false` if the task already ran or was cancelled before.
    fn cancel(&self, id: Id) -> bool;

    /// Returns a future that resolves once the next frame has been rendered.
    fn next_frame(&self) -> LocalBoxFuture<'static, ()>;
}
