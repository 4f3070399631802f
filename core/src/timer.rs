use core::time::Duration;

use crate::*;

/// Interval between two countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a periodic task handed out by a [`Scheduler`].
///
/// Cancelling must be immediate and safe to repeat.
/// Implementations are expected to cancel on drop as well.
pub trait TimerTask {
    fn cancel(&mut self);
}

/// Source of periodic tasks.
///
/// Each firing is expected to be delivered back to the engine as [`Command::Tick`].
pub trait Scheduler {
    type Task: TimerTask;

    fn schedule_every(&mut self, period: Duration) -> Self::Task;
}

/// Outcome of a single timer tick
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No timer running, the tick is stale and was ignored
    Idle,
    /// Remaining seconds after the tick
    Ticked(Seconds),
    /// Reached zero, the timer stopped itself
    Expired,
}

impl TickOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            Idle => false,
            Ticked(_) => true,
            Expired => true,
        }
    }
}

/// Countdown bound to at most one live scheduled task.
pub struct RoundTimer<S: Scheduler> {
    scheduler: S,
    task: Option<S::Task>,
    duration: Seconds,
    remaining: Seconds,
}

impl<S: Scheduler> RoundTimer<S> {
    pub fn new(scheduler: S, duration: Seconds) -> Self {
        Self {
            scheduler,
            task: None,
            duration,
            remaining: duration,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn remaining(&self) -> Seconds {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Restart from the full duration, replacing any running task.
    pub fn start(&mut self) {
        self.cancel();
        self.remaining = self.duration;
        self.task = Some(self.scheduler.schedule_every(TICK_PERIOD));
        log::debug!("Timer started with {}s", self.remaining);
    }

    /// Stop without expiring, returns whether a task was running.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(mut task) => {
                task.cancel();
                log::debug!("Timer cancelled with {}s left", self.remaining);
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.task.is_none() {
            log::trace!("Ignoring tick, no timer running");
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        log::trace!("Tick, {}s left", self.remaining);
        if self.remaining == 0 {
            if let Some(mut task) = self.task.take() {
                task.cancel();
            }
            log::debug!("Timer expired");
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked(self.remaining)
        }
    }
}
