use alloc::{boxed::Box, string::String, vec};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Active (init)
/// - Active -> Won (pattern found)
/// - Active -> Expired (timer reached zero)
/// - any -> Active (init or reset)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Ready,
    Active,
    Won,
    Expired,
}

impl RoundState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Expired)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Control inputs accepted by [`GameEngine::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Init,
    Insert { index: usize, value: Digit },
    Delete { index: usize },
    Search(String),
    Reset,
    /// One firing of the round timer task
    Tick,
}

/// Owns the slot row, the secret and the countdown of a single round.
pub struct GameEngine<S: Scheduler, G: PatternGenerator = RandomPatternGenerator> {
    config: GameConfig,
    slots: Box<[Slot]>,
    secret: SecretPattern,
    state: RoundState,
    timer: RoundTimer<S>,
    generator: G,
    last_match: Option<MatchWindow>,
}

impl<S: Scheduler> GameEngine<S> {
    pub fn with_seed(config: GameConfig, scheduler: S, seed: u64) -> Self {
        Self::new(config, scheduler, RandomPatternGenerator::new(seed))
    }
}

impl<S: Scheduler, G: PatternGenerator> GameEngine<S, G> {
    /// The round does not start until [`init`](Self::init), until then the secret is all zeros.
    pub fn new(config: GameConfig, scheduler: S, generator: G) -> Self {
        Self {
            slots: vec![Slot::Empty; config.slots].into_boxed_slice(),
            secret: SecretPattern::blank(config.pattern_len),
            state: Default::default(),
            timer: RoundTimer::new(scheduler, config.round_secs),
            generator,
            last_match: None,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn secret(&self) -> &SecretPattern {
        &self.secret
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn remaining_secs(&self) -> Seconds {
        self.timer.remaining()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn last_match(&self) -> Option<MatchWindow> {
        self.last_match
    }

    pub fn scheduler(&self) -> &S {
        self.timer.scheduler()
    }

    /// First-time setup, also usable to start over.
    pub fn init(&mut self) -> Feedback {
        self.start_round();
        if self.config.reveal_target {
            Feedback::FindPattern(self.secret.clone())
        } else {
            Feedback::FindHidden
        }
    }

    /// Start over from any state with empty slots, a new secret and a full timer.
    pub fn reset(&mut self) -> Feedback {
        self.start_round();
        Feedback::Reset
    }

    pub fn generate_secret_pattern(&mut self) -> &SecretPattern {
        self.secret = self.generator.generate(self.config.pattern_len);
        &self.secret
    }

    /// Shift `index..` right by one and place `value` at `index`.
    ///
    /// The last slot is dropped even when it is empty.
    pub fn insert(&mut self, index: usize, value: Digit) -> Result<Feedback> {
        self.check_active()?;
        let index = self.validate_index(index)?;
        if value > MAX_DIGIT {
            return Err(GameError::InvalidDigit);
        }

        let dropped = self.slots[self.slots.len() - 1];
        self.slots[index..].rotate_right(1);
        self.slots[index] = Slot::Digit(value);
        log::debug!("Inserted {} at {}, dropped {:?}", value, index, dropped);

        Ok(Feedback::Inserted { value, index })
    }

    /// Shift `index + 1..` left by one and empty the last slot.
    pub fn delete_at(&mut self, index: usize) -> Result<Feedback> {
        self.check_active()?;
        let index = self.validate_index(index)?;

        self.slots[index..].rotate_left(1);
        let last = self.slots.len() - 1;
        self.slots[last] = Slot::Empty;
        log::debug!("Deleted slot {}", index);

        Ok(Feedback::Deleted { index })
    }

    /// A match ends the round as won and stops the timer.
    pub fn search(&mut self, text: &str) -> Result<SearchOutcome> {
        self.check_active()?;
        let pattern = Pattern::parse(text)?;

        let secret_only = matches!(self.config.search_mode, SearchMode::SecretOnly);
        if secret_only && !pattern.is_secret(&self.secret) {
            return Err(GameError::NotTarget);
        }

        match pattern.find_in(&self.slots) {
            Some(window) => {
                self.timer.cancel();
                self.state = RoundState::Won;
                self.last_match = Some(window);
                log::debug!("Round won, match at {:?}", window);
                Ok(SearchOutcome::Found(window))
            }
            None => Ok(SearchOutcome::NotFound),
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        if matches!(outcome, TickOutcome::Expired) {
            self.state = RoundState::Expired;
            log::debug!("Round expired");
        }
        outcome
    }

    /// Run a command and report every resulting change to `sink`, errors included.
    ///
    /// Returns whether anything was reported, stale ticks report nothing.
    pub fn dispatch<K: GameSink + ?Sized>(&mut self, command: Command, sink: &mut K) -> bool {
        match command {
            Command::Init => {
                let feedback = self.init();
                sink.render(&self.slots);
                sink.feedback(&feedback);
            }
            Command::Insert { index, value } => {
                let result = self.insert(index, value);
                self.report_change(result, sink);
            }
            Command::Delete { index } => {
                let result = self.delete_at(index);
                self.report_change(result, sink);
            }
            Command::Search(text) => match self.search(&text) {
                Ok(SearchOutcome::Found(window)) => {
                    sink.highlight(window);
                    sink.feedback(&Feedback::Found);
                }
                Ok(SearchOutcome::NotFound) => sink.feedback(&Feedback::NotFound),
                Err(err) => sink.feedback(&err.into()),
            },
            Command::Reset => {
                let feedback = self.reset();
                sink.render(&self.slots);
                sink.feedback(&feedback);
            }
            Command::Tick => {
                let outcome = self.tick();
                match outcome {
                    TickOutcome::Idle => {}
                    TickOutcome::Ticked(remaining) => sink.feedback(&Feedback::Time(remaining)),
                    TickOutcome::Expired => {
                        sink.feedback(&Feedback::Time(0));
                        sink.feedback(&Feedback::Expired);
                    }
                }
                return outcome.has_update();
            }
        }
        true
    }

    /// Like [`dispatch`](Self::dispatch) for commands built from raw input.
    ///
    /// Parse errors are reported as feedback.
    pub fn dispatch_input<K: GameSink + ?Sized>(
        &mut self,
        input: Result<Command>,
        sink: &mut K,
    ) -> bool {
        match input {
            Ok(command) => self.dispatch(command, sink),
            Err(err) => {
                log::debug!("Rejected input: {}", err);
                sink.feedback(&err.into());
                true
            }
        }
    }

    fn report_change<K: GameSink + ?Sized>(&self, result: Result<Feedback>, sink: &mut K) {
        match result {
            Ok(feedback) => {
                sink.feedback(&feedback);
                sink.render(&self.slots);
            }
            Err(err) => sink.feedback(&err.into()),
        }
    }

    fn start_round(&mut self) {
        self.slots.fill(Slot::Empty);
        self.generate_secret_pattern();
        self.last_match = None;
        self.state = RoundState::Active;
        self.timer.start();
        log::debug!("Round started");
    }

    fn validate_index(&self, index: usize) -> Result<usize> {
        if index < self.slots.len() {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfBounds)
        }
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_active() {
            Ok(())
        } else if self.state.is_finished() {
            Err(GameError::RoundOver)
        } else {
            Err(GameError::NotStarted)
        }
    }
}
