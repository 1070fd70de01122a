//! Deferred-task seam for the batch append strategy.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub type Task = Box<dyn FnOnce()>;

/// Zero-delay deferred execution.
///
/// `defer` returns immediately; the task runs on a later turn of the host's
/// cooperative event queue, in FIFO order relative to other deferred tasks.
/// There is no cancellation: a scheduled task always runs.
pub trait Scheduler {
    fn defer(&self, task: Task);
}

/// Runs deferred tasks on the spot. Stands in for the event queue on hosts
/// that have none, which collapses batching into per-call insertion.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
    fn defer(&self, task: Task) {
        task();
    }
}

/// Hand-stepped task queue; the test double for the event loop.
///
/// Clones share one queue, so a copy handed to a registry backend can still
/// be stepped from the test.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<Task>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs queued tasks in FIFO order until the queue drains, including
    /// tasks queued while running. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let task = self.queue.borrow_mut().pop_front();
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, task: Task) {
        self.queue.borrow_mut().push_back(task);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn manual_scheduler_runs_fifo() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let scheduler = ManualScheduler::new();
        for i in 0..3 {
            let order = order.clone();
            scheduler.defer(Box::new(move || order.borrow_mut().push(i)));
        }

        assert_eq!(scheduler.pending(), 3);
        assert_eq!(scheduler.run_pending(), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn tasks_queued_while_running_also_run() {
        let scheduler = ManualScheduler::new();
        let hit = Rc::new(RefCell::new(false));
        {
            let inner = scheduler.clone();
            let hit = hit.clone();
            scheduler.defer(Box::new(move || {
                inner.defer(Box::new(move || *hit.borrow_mut() = true));
            }));
        }

        assert_eq!(scheduler.run_pending(), 2);
        assert!(*hit.borrow());
    }
}
