use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// What the player is looking at.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    /// Entry prompt asking for the round size.
    Menu,
    Round(Round),
}

impl Screen {
    pub fn is_menu(&self) -> bool {
        matches!(self, Self::Menu)
    }
}

/// Drives rounds from the menu to their outcome and back.
///
/// Timers are not owned here: every operation that needs one takes the [`Scheduler`] that will
/// later feed [`Task`]s back through [`Controller::run`].
#[derive(Debug)]
pub struct Controller {
    config: GameConfig,
    messages: Messages,
    rng: SmallRng,
    screen: Screen,
    notices: VecDeque<MessageId>,
}

impl Controller {
    pub fn new(config: GameConfig, messages: Messages, seed: u64) -> Self {
        Self {
            config,
            messages,
            rng: SmallRng::seed_from_u64(seed),
            screen: Screen::Menu,
            notices: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn message(&self, id: MessageId) -> &str {
        self.messages.get(id)
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn round(&self) -> Option<&Round> {
        match &self.screen {
            Screen::Menu => None,
            Screen::Round(round) => Some(round),
        }
    }

    /// Starts a round from the menu input. Invalid input queues [`MessageId::Limits`] and keeps the
    /// menu up.
    pub fn submit(
        &mut self,
        input: &str,
        viewport: Viewport,
        scheduler: &mut impl Scheduler,
    ) -> Result<RoundSize> {
        if let Screen::Round(round) = &self.screen {
            return Err(GameError::WrongPhase(round.state()));
        }

        let size = match RoundSize::parse(input) {
            Ok(size) => size,
            Err(err) => {
                log::debug!("rejected round size input {:?}: {}", input, err);
                self.notices.push_back(MessageId::Limits);
                return Err(err);
            }
        };

        let mut round = Round::new(size, viewport, self.config.metrics, &mut self.rng);
        round.begin_shuffle()?;
        scheduler.repeat(Task::Shuffle, self.config.shuffle_period_ms);
        self.screen = Screen::Round(round);
        log::info!("new round with {} buttons", size);
        Ok(size)
    }

    /// Runs a task delivered by the scheduler. Returns whether the screen changed.
    pub fn run(&mut self, task: Task, viewport: Viewport, scheduler: &mut impl Scheduler) -> bool {
        let Screen::Round(round) = &mut self.screen else {
            log::trace!("{:?} fired without a round, ignoring", task);
            return false;
        };

        match task {
            Task::Shuffle => match round.shuffle_step(viewport, self.config.metrics, &mut self.rng) {
                Ok(ShuffleOutcome::Repositioned) => true,
                Ok(ShuffleOutcome::Finished) => {
                    scheduler.cancel(Task::Shuffle);
                    true
                }
                Err(err) => {
                    log::warn!("stray shuffle: {}", err);
                    scheduler.cancel(Task::Shuffle);
                    false
                }
            },
            Task::Validate => {
                let was_finished = round.is_finished();
                match round.validate() {
                    Verdict::Pending => false,
                    _ if was_finished => false,
                    Verdict::Won => {
                        self.notices.push_back(MessageId::Winner);
                        self.back_to_menu(scheduler);
                        true
                    }
                    Verdict::Lost => {
                        self.notices.push_back(MessageId::Loser);
                        scheduler.cancel(Task::Validate);
                        true
                    }
                }
            }
        }
    }

    /// Forwards a click on an element, scheduling validation when it counted.
    pub fn click(&mut self, id: ElementId, scheduler: &mut impl Scheduler) -> Result<ClickOutcome> {
        let Screen::Round(round) = &mut self.screen else {
            return Ok(ClickOutcome::Ignored);
        };

        let outcome = round.click(id)?;
        if outcome.has_update() {
            scheduler.once(Task::Validate, self.config.validation_delay_ms);
        }
        Ok(outcome)
    }

    /// Abandons whatever is on screen and shows the menu again.
    pub fn restart(&mut self, scheduler: &mut impl Scheduler) {
        log::debug!("restart");
        self.back_to_menu(scheduler);
    }

    /// Drains notices raised since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<MessageId> {
        self.notices.drain(..).collect()
    }

    fn back_to_menu(&mut self, scheduler: &mut impl Scheduler) {
        scheduler.cancel_all();
        self.screen = Screen::Menu;
    }
}
