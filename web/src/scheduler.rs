use std::{cell::Cell, rc::Rc, time::Duration};

use gloo::timers::callback::Interval;
use slotmatch_core::{Scheduler, TimerTask};
use yew::html::Scope;

use crate::game::{GameView, Msg};

/// Schedules round timer ticks as browser intervals that post [`Msg::Tick`] to the game view.
///
/// Every tick carries the generation of the interval that sent it, so a tick
/// that was already queued when its interval got replaced is told apart.
pub(crate) struct IntervalScheduler {
    link: Scope<GameView>,
    generation: Rc<Cell<u64>>,
}

impl IntervalScheduler {
    pub(crate) fn new(link: Scope<GameView>) -> Self {
        Self {
            link,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

pub(crate) struct IntervalTask(Option<Interval>);

impl TimerTask for IntervalTask {
    fn cancel(&mut self) {
        if let Some(interval) = self.0.take() {
            drop(interval.cancel());
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Task = IntervalTask;

    fn schedule_every(&mut self, period: Duration) -> IntervalTask {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        log::debug!("interval {} every {}ms", generation, millis);

        let link = self.link.clone();
        IntervalTask(Some(Interval::new(millis, move || {
            link.send_message(Msg::Tick(generation))
        })))
    }
}
