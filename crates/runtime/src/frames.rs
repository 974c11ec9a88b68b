//! An after-render queue driven by the host.
use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll, Waker};

use futures::future::{FutureExt, LocalBoxFuture};
use slotmap::SlotMap;

use crate::scheduler::{Id, Scheduler, Task};

/// A [`Scheduler`] flushed by the host once per rendered frame.
///
/// Tasks scheduled during a flush run on the next one.
#[derive(Debug, Clone, Default)]
pub struct Frames {
    inner: Rc<RefCell<Queue>>,
}

#[derive(Default)]
struct Queue {
    tasks: SlotMap<Id, Task>,
    order: VecDeque<Id>,
    frame: u64,
    waiters: Vec<Waker>,
}

impl std::fmt::Debug for Queue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("pending", &self.tasks.len())
            .field("frame", &self.frame)
            .field("waiters", &self.waiters.len())
            .finish()
    }
}

impl Frames {
    /// Creates an empty [`Frames`] queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the end of a frame.
    ///
    /// Runs every pending task, in scheduling order, and wakes every future
    /// waiting for the next frame. Returns the number of tasks that ran.
    pub fn flush(&self) -> usize {
        let (tasks, waiters) = {
            let mut queue = self.inner.borrow_mut();
            queue.frame += 1;

            let order = std::mem::take(&mut queue.order);
            let tasks: Vec<Task> = order
                .into_iter()
                .filter_map(|id| queue.tasks.remove(id))
                .collect();

            (tasks, std::mem::take(&mut queue.waiters))
        };

        let ran = tasks.len();
        log::debug!("frames::flush: running {ran} task(s)");

        for task in tasks {
            task();
        }

        for waker in waiters {
            waker.wake();
        }

        ran
    }

    /// Returns the number of tasks waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Returns the number of frames flushed so far.
    pub fn frame(&self) -> u64 {
        self.inner.borrow().frame
    }
}

impl Scheduler for Frames {
    fn schedule_once(&self, task: Task) -> Id {
        let mut queue = self.inner.borrow_mut();
        let id = queue.tasks.insert(task);
        queue.order.push_back(id);
        id
    }

    fn cancel(&self, id: Id) -> bool {
        let mut queue = self.inner.borrow_mut();

        if queue.tasks.remove(id).is_none() {
            return false;
        }

        if let Some(index) = queue.order.iter().position(|pending| *pending == id) {
            let _ = queue.order.remove(index);
        }

        true
    }

    fn next_frame(&self) -> LocalBoxFuture<'static, ()> {
        NextFrame {
            queue: Rc::downgrade(&self.inner),
            target: self.inner.borrow().frame + 1,
        }
        .boxed_local()
    }
}

/// Resolves once the queue has been flushed past `target`.
///
/// A dropped queue resolves immediately; nothing will ever flush it again.
struct NextFrame {
    queue: Weak<RefCell<Queue>>,
    target: u64,
}

impl Future for NextFrame {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Some(queue) = self.queue.upgrade() else {
            return Poll::Ready(());
        };

        let mut queue = queue.borrow_mut();

        if queue.frame >= self.target {
            Poll::Ready(())
        } else {
            queue.waiters.push(cx.waker().clone());
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    #[test]
    fn runs_tasks_in_order_on_flush() {
        let frames = Frames::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let log = log.clone();
            let _ = frames.schedule_once(Box::new(move || log.borrow_mut().push(i)));
        }

        assert!(log.borrow().is_empty());
        assert_eq!(frames.flush(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(frames.flush(), 0);
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let frames = Frames::new();
        let ran = Rc::new(Cell::new(false));

        let id = {
            let ran = ran.clone();
            frames.schedule_once(Box::new(move || ran.set(true)))
        };

        assert!(frames.cancel(id));
        assert!(!frames.cancel(id));
        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.flush(), 0);
        assert!(!ran.get());
    }

    #[test]
    fn tasks_scheduled_during_flush_wait_for_the_next_one() {
        let frames = Frames::new();
        let ran = Rc::new(Cell::new(0));

        {
            let inner = frames.clone();
            let ran = ran.clone();

            let _ = frames.schedule_once(Box::new(move || {
                ran.set(ran.get() + 1);

                let ran = ran.clone();
                let _ = inner.schedule_once(Box::new(move || ran.set(ran.get() + 1)));
            }));
        }

        assert_eq!(frames.flush(), 1);
        assert_eq!(ran.get(), 1);
        assert_eq!(frames.flush(), 1);
        assert_eq!(ran.get(), 2);
    }

    #[test]
    fn next_frame_resolves_after_flush() {
        let frames = Frames::new();
        let mut pool = LocalPool::new();
        let done = Rc::new(Cell::new(false));

        {
            let frames = frames.clone();
            let done = done.clone();

            pool.spawner()
                .spawn_local(async move {
                    frames.next_frame().await;
                    frames.next_frame().await;
                    done.set(true);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert!(!done.get());

        let _ = frames.flush();
        pool.run_until_stalled();
        assert!(!done.get());

        let _ = frames.flush();
        pool.run_until_stalled();
        assert!(done.get());
        assert_eq!(frames.frame(), 2);
    }
}
