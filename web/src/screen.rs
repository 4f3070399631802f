use slotmatch_core::{CellView, Feedback, GameSink, MatchWindow, Seconds, Slot, render_cells};

/// Everything the view shows, kept up to date by the engine through [`GameSink`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Screen {
    round_secs: Seconds,
    slots: Vec<Slot>,
    highlight: Option<MatchWindow>,
    status: String,
    rejected: bool,
    time: String,
}

impl Screen {
    pub(crate) fn new(round_secs: Seconds) -> Self {
        Self {
            round_secs,
            slots: Vec::new(),
            highlight: None,
            status: String::new(),
            rejected: false,
            time: Feedback::Time(round_secs).to_string(),
        }
    }

    pub(crate) fn cells(&self) -> Vec<CellView> {
        render_cells(&self.slots, self.highlight)
    }

    pub(crate) fn status(&self) -> &str {
        &self.status
    }

    /// Whether the status line is showing a rejected input.
    pub(crate) fn rejected(&self) -> bool {
        self.rejected
    }

    pub(crate) fn time(&self) -> &str {
        &self.time
    }
}

impl GameSink for Screen {
    fn render(&mut self, slots: &[Slot]) {
        self.slots.clear();
        self.slots.extend_from_slice(slots);
        // fresh cells lose their highlight
        self.highlight = None;
    }

    fn feedback(&mut self, feedback: &Feedback) {
        use Feedback::*;
        match feedback {
            Time(_) => self.time = feedback.to_string(),
            FindPattern(_) | FindHidden | Reset => {
                self.time = Time(self.round_secs).to_string();
                self.status = feedback.to_string();
                self.rejected = false;
            }
            _ => {
                self.status = feedback.to_string();
                self.rejected = feedback.is_rejection();
            }
        }
    }

    fn highlight(&mut self, window: MatchWindow) {
        self.highlight = Some(window);
    }
}
