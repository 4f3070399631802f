//! Logical clock that only moves when told to.
//!
//! Stands in for a browser interval so the countdown can be driven tick by tick
//! in tests and replays, without waiting on wall-clock time.

use alloc::{
    collections::BTreeMap,
    rc::{Rc, Weak},
};
use core::{cell::RefCell, time::Duration};

use crate::*;

/// Smallest period accepted, keeps `advance` from spinning on a zero period.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Default)]
struct ClockInner {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<u64, Periodic>,
}

#[derive(Debug)]
struct Periodic {
    period: Duration,
    next_due: Duration,
}

/// Shared handle, clones observe and drive the same time.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn active_tasks(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Fires the earliest task due at or before `deadline`, moving the clock to its due time.
    ///
    /// Returns `false` once nothing else is due.
    /// The clock is then left where the last firing happened.
    pub(crate) fn fire_next(&self, deadline: Duration) -> bool {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let due = inner
            .tasks
            .values_mut()
            .filter(|task| task.next_due <= deadline)
            .min_by_key(|task| task.next_due);

        match due {
            Some(task) => {
                inner.now = task.next_due;
                task.next_due += task.period;
                true
            }
            None => false,
        }
    }

    pub(crate) fn settle(&self, deadline: Duration) {
        let mut inner = self.inner.borrow_mut();
        inner.now = inner.now.max(deadline);
    }
}

impl Scheduler for VirtualClock {
    type Task = VirtualTask;

    fn schedule_every(&mut self, period: Duration) -> VirtualTask {
        let period = period.max(MIN_PERIOD);
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let next_due = inner.now + period;
        inner.tasks.insert(id, Periodic { period, next_due });
        log::trace!("Scheduled task {} every {:?}", id, period);

        VirtualTask {
            id,
            clock: Rc::downgrade(&self.inner),
        }
    }
}

/// Periodic task on a [`VirtualClock`], cancelled when dropped.
#[derive(Debug)]
pub struct VirtualTask {
    id: u64,
    clock: Weak<RefCell<ClockInner>>,
}

impl TimerTask for VirtualTask {
    fn cancel(&mut self) {
        if let Some(inner) = self.clock.upgrade() {
            inner.borrow_mut().tasks.remove(&self.id);
        }
    }
}

impl Drop for VirtualTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<G: PatternGenerator> GameEngine<VirtualClock, G> {
    /// Moves the clock forward by `by`, delivering every tick that falls due on the way.
    ///
    /// Returns how many ticks were delivered.
    pub fn advance<K: GameSink + ?Sized>(&mut self, by: Duration, sink: &mut K) -> u32 {
        let clock = self.scheduler().clone();
        let deadline = clock.now() + by;
        let mut fired = 0;
        while clock.fire_next(deadline) {
            fired += 1;
            self.dispatch(Command::Tick, sink);
        }
        clock.settle(deadline);
        fired
    }
}
