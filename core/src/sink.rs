use alloc::vec::Vec;

use crate::*;

/// Receiver for everything the engine wants shown.
pub trait GameSink {
    /// Snapshot of the slots, sent whenever they change.
    fn render(&mut self, slots: &[Slot]);

    fn feedback(&mut self, feedback: &Feedback);

    /// Only sent when a search succeeds.
    fn highlight(&mut self, window: MatchWindow);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkEvent {
    Render(Vec<Slot>),
    Feedback(Feedback),
    Highlight(MatchWindow),
}

/// Records events in order, handy for replaying or inspecting a round.
impl GameSink for Vec<SinkEvent> {
    fn render(&mut self, slots: &[Slot]) {
        self.push(SinkEvent::Render(slots.to_vec()));
    }

    fn feedback(&mut self, feedback: &Feedback) {
        self.push(SinkEvent::Feedback(feedback.clone()));
    }

    fn highlight(&mut self, window: MatchWindow) {
        self.push(SinkEvent::Highlight(window));
    }
}
