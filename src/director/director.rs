//! The game director: owns the cups and drives the round lifecycle.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle -> Shuffling -> AwaitingSelection -> (score) -> Pausing
//!      -> LoweringRevealedCup -> (new correct cup) -> SettlingBeforeShuffle
//!      -> Shuffling -> ...
//! ```
//!
//! Every animation is plain state advanced by [`GameDirector::update`], so a
//! test can drive a full round with a loop of fixed frame times.
//!
//! ## Usage
//!
//! ```
//! use shell_game::core::{GameRng, ShellGameConfig};
//! use shell_game::director::{GameDirector, RoundPhase};
//! use shell_game::score::ScoreTracker;
//!
//! let mut score = ScoreTracker::unbound();
//! let mut director = GameDirector::new(ShellGameConfig::default(), GameRng::new(7)).unwrap();
//!
//! director.start();
//! assert!(director.is_shuffling());
//!
//! while director.is_shuffling() {
//!     director.update(1.0 / 60.0);
//! }
//! assert_eq!(director.phase(), RoundPhase::AwaitingSelection);
//!
//! let pick = director.correct_index();
//! assert!(director.pointer_click(pick, &mut score));
//! assert_eq!(score.total(), 10);
//! ```

use im::Vector;
use smallvec::SmallVec;

use super::events::GameEvent;
use super::round::{Round, RoundPhase, RoundRecord};
use super::shuffle::{ShuffleRun, SwapAnimation, SwapStep};
use super::snapshot::{CupSnapshot, DirectorSnapshot};
use crate::core::{ConfigError, CupId, GameRng, ShellGameConfig, Vec3};
use crate::cups::{Cup, Highlight, MotionFinished};
use crate::score::ScoreTracker;

/// Phase plus the timers and shuffle state that belong to it.
#[derive(Clone, Debug)]
enum Phase {
    Idle,
    Shuffling(ShuffleRun),
    AwaitingSelection,
    Pausing { remaining: f32 },
    Lowering { cup: CupId },
    Settling { remaining: f32 },
}

impl Phase {
    fn kind(&self) -> RoundPhase {
        match self {
            Phase::Idle => RoundPhase::Idle,
            Phase::Shuffling(_) => RoundPhase::Shuffling,
            Phase::AwaitingSelection => RoundPhase::AwaitingSelection,
            Phase::Pausing { .. } => RoundPhase::Pausing,
            Phase::Lowering { .. } => RoundPhase::LoweringRevealedCup,
            Phase::Settling { .. } => RoundPhase::SettlingBeforeShuffle,
        }
    }
}

/// Owns the cups, the hidden correct cup and the round lifecycle.
pub struct GameDirector {
    config: ShellGameConfig,
    cups: SmallVec<[Cup; 4]>,
    round: Round,
    phase: Phase,
    /// Draws correct cups.
    rng: GameRng,
    /// Draws swap pairs; kept separate so forcing the correct cup does not
    /// change the shuffle sequence.
    shuffle_rng: GameRng,
    history: Vector<RoundRecord>,
    events: Vec<GameEvent>,
}

impl GameDirector {
    /// Validate `config` and lay the cups out on their slots.
    ///
    /// The round is not started; call [`start`](Self::start) or
    /// [`start_round`](Self::start_round).
    pub fn new(config: ShellGameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let cups = config
            .slots
            .iter()
            .enumerate()
            .map(|(i, &slot)| Cup::new(CupId::from_index(i), slot))
            .collect();
        let shuffle_rng = rng.for_context("shuffle");

        Ok(Self {
            config,
            cups,
            round: Round::new(0, CupId::new(0)),
            phase: Phase::Idle,
            rng,
            shuffle_rng,
            history: Vector::new(),
            events: Vec::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &ShellGameConfig {
        &self.config
    }

    #[must_use]
    pub fn cups(&self) -> &[Cup] {
        &self.cups
    }

    #[must_use]
    pub fn cup(&self, id: CupId) -> Option<&Cup> {
        self.cups.get(id.index())
    }

    #[must_use]
    pub fn cup_count(&self) -> usize {
        self.cups.len()
    }

    /// Current cup positions, in cup order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vec3> {
        self.cups.iter().map(Cup::position).collect()
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase.kind()
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round.number
    }

    #[must_use]
    pub fn is_shuffling(&self) -> bool {
        self.round.shuffling
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<CupId> {
        self.round.selected
    }

    pub fn set_selected_index(&mut self, selected: Option<CupId>) {
        self.round.selected = selected;
    }

    /// The cup hiding the prize. Hosts need this to draw it on reveal.
    #[must_use]
    pub fn correct_index(&self) -> CupId {
        self.round.correct
    }

    /// Put the prize under `cup` for the current round.
    ///
    /// Returns `false` (and changes nothing) if `cup` does not exist.
    pub fn force_correct_index(&mut self, cup: CupId) -> bool {
        if cup.index() >= self.cups.len() {
            return false;
        }
        self.round.correct = cup;
        true
    }

    /// The revealed cup, if any. There is never more than one.
    #[must_use]
    pub fn revealed_cup(&self) -> Option<CupId> {
        self.cups.iter().find(|c| c.is_revealed()).map(Cup::id)
    }

    /// All resolved selections, oldest first. O(1) to clone.
    #[must_use]
    pub fn history(&self) -> Vector<RoundRecord> {
        self.history.clone()
    }

    /// Take everything reported since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn snapshot(&self) -> DirectorSnapshot {
        DirectorSnapshot {
            phase: self.phase(),
            round: self.round.number,
            shuffling: self.round.shuffling,
            selected: self.round.selected,
            cups: self
                .cups
                .iter()
                .map(|c| CupSnapshot {
                    id: c.id(),
                    position: c.position(),
                    revealed: c.is_revealed(),
                    highlight: c.highlight(),
                })
                .collect(),
            resolved_selections: self.history.len(),
            rng: self.rng.state(),
            shuffle_rng: self.shuffle_rng.state(),
        }
    }

    // === Round lifecycle ===

    /// Put every cup back on its slot and draw a new correct cup.
    ///
    /// Cancels any shuffle or pending reshuffle; the phase returns to `Idle`.
    pub fn start_round(&mut self) {
        for (cup, &slot) in self.cups.iter_mut().zip(self.config.slots.iter()) {
            *cup = Cup::new(cup.id(), slot);
        }

        let correct = self.draw_correct();
        self.round = Round::new(self.round.number + 1, correct);
        self.set_phase(Phase::Idle);
        self.events.push(GameEvent::RoundStarted { round: self.round.number });
        log::debug!("Round {} started", self.round.number);
    }

    /// Start a round and immediately shuffle.
    pub fn start(&mut self) {
        self.start_round();
        self.shuffle(self.config.shuffle_count);
    }

    /// Manual shuffle request (the "shuffle" key).
    ///
    /// Returns `true` if a shuffle started.
    pub fn request_shuffle(&mut self) -> bool {
        self.shuffle(self.config.shuffle_count)
    }

    /// Perform `count` animated swaps.
    ///
    /// No-op while already shuffling, and while a selection is still
    /// being shown or lowered. Returns `true` if a shuffle started.
    pub fn shuffle(&mut self, count: u32) -> bool {
        if self.round.shuffling {
            log::debug!("Shuffle ignored: already shuffling");
            return false;
        }
        if self.phase.kind().is_resolving() {
            log::debug!("Shuffle ignored: selection of {:?} still resolving", self.round.selected);
            return false;
        }

        self.round.shuffling = true;
        self.events.push(GameEvent::ShuffleStarted { swaps: count });
        let mut run = ShuffleRun::new(count);
        self.start_next_swap(&mut run);
        self.set_phase(Phase::Shuffling(run));
        if count == 0 {
            self.finish_shuffle();
        }
        true
    }

    /// Record a selection and score it.
    ///
    /// Awards `points_per_correct` when `cup` is the correct cup, then
    /// schedules the reshuffle sequence. Ignored (returns `None`) for
    /// unknown cups, while shuffling, or while another selection is still
    /// resolving. Otherwise returns whether the pick was correct.
    pub fn check_selection(&mut self, cup: CupId, score: &mut ScoreTracker) -> Option<bool> {
        if cup.index() >= self.cups.len() || self.round.shuffling || self.phase.kind().is_resolving() {
            log::debug!("Selection of {} ignored in phase {:?}", cup, self.phase());
            return None;
        }

        self.round.selected = Some(cup);
        let correct = cup == self.round.correct;
        let points = if correct { self.config.points_per_correct } else { 0 };

        self.events.push(GameEvent::SelectionChecked { cup, correct });
        if correct {
            let total = score.add_score(points);
            self.events.push(GameEvent::ScoreChanged { total });
            log::info!("Correct! {} earned {} points", cup, points);
        } else {
            log::info!("Wrong! {} was empty, the prize was under {}", cup, self.round.correct);
        }

        self.history.push_back(RoundRecord {
            round: self.round.number,
            selected: cup,
            correct,
            points,
        });

        self.set_phase(Phase::Pausing {
            remaining: self.config.wait_before_shuffle,
        });
        Some(correct)
    }

    // === Input ===

    pub fn pointer_enter(&mut self, cup: CupId) {
        let gate = self.round.gate();
        let Some(target) = self.cups.get_mut(cup.index()) else {
            log::debug!("Pointer enter on unknown {}", cup);
            return;
        };
        if let Some(mode) = target.on_pointer_enter(gate) {
            self.events.push(GameEvent::HighlightChanged { cup, mode });
        }
    }

    pub fn pointer_exit(&mut self, cup: CupId) {
        let gate = self.round.gate();
        let Some(target) = self.cups.get_mut(cup.index()) else {
            log::debug!("Pointer exit on unknown {}", cup);
            return;
        };
        if let Some(mode) = target.on_pointer_exit(gate) {
            self.events.push(GameEvent::HighlightChanged { cup, mode });
        }
    }

    /// Reveal `cup` and check it, if it can be interacted with.
    ///
    /// Returns `true` when the click was accepted.
    pub fn pointer_click(&mut self, cup: CupId, score: &mut ScoreTracker) -> bool {
        if self.phase.kind().is_resolving() {
            log::debug!("Click on {} ignored while resolving", cup);
            return false;
        }
        let gate = self.round.gate();
        let (height, speed) = (self.config.reveal_height, self.config.reveal_speed);
        let Some(target) = self.cups.get_mut(cup.index()) else {
            log::debug!("Click on unknown {}", cup);
            return false;
        };
        if !target.on_pointer_click(gate, height, speed) {
            log::debug!("Click on {} ignored", cup);
            return false;
        }

        self.events.push(GameEvent::CupRevealed { cup });
        self.check_selection(cup, score);
        true
    }

    // === Frame update ===

    /// Advance every animation and timer by `dt` seconds.
    ///
    /// Negative or non-finite frame times count as zero.
    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.advance_cups(dt);

        match &mut self.phase {
            Phase::Idle | Phase::AwaitingSelection | Phase::Lowering { .. } => {}
            Phase::Shuffling(_) => self.advance_shuffle(dt),
            Phase::Pausing { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.lower_revealed();
                }
            }
            Phase::Settling { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.shuffle(self.config.shuffle_count);
                }
            }
        }
    }

    fn advance_cups(&mut self, dt: f32) {
        let epsilon = self.config.snap_epsilon;
        let mut lowered = None;

        for cup in self.cups.iter_mut() {
            match cup.advance(dt, epsilon) {
                Some(MotionFinished::Raised) => {
                    self.events.push(GameEvent::CupRaised { cup: cup.id() });
                }
                Some(MotionFinished::Lowered) => lowered = Some(cup.id()),
                None => {}
            }
        }

        if let Some(cup) = lowered {
            self.on_lowered(cup);
        }
    }

    fn on_lowered(&mut self, cup: CupId) {
        self.round.selected = None;
        let gate = self.round.gate();
        if let Some(mode) = self.cups[cup.index()].set_highlight(Highlight::SilhouetteOnly, gate) {
            self.events.push(GameEvent::HighlightChanged { cup, mode });
        }
        self.events.push(GameEvent::CupLowered { cup });

        if matches!(self.phase, Phase::Lowering { cup: lowering } if lowering == cup) {
            self.reassign_and_settle();
        }
    }

    /// End of the pause: lower the revealed cup, or skip straight to the
    /// reassignment when nothing is up.
    fn lower_revealed(&mut self) {
        match self.revealed_cup() {
            Some(id) => {
                self.cups[id.index()].lower(self.config.reveal_speed);
                self.events.push(GameEvent::LoweringStarted { cup: id });
                self.set_phase(Phase::Lowering { cup: id });
            }
            None => {
                self.round.selected = None;
                self.reassign_and_settle();
            }
        }
    }

    fn reassign_and_settle(&mut self) {
        self.round.correct = self.draw_correct();
        self.round.number += 1;
        self.events.push(GameEvent::CorrectCupReassigned { round: self.round.number });
        self.set_phase(Phase::Settling {
            remaining: self.config.settle_before_shuffle,
        });
    }

    fn advance_shuffle(&mut self, dt: f32) {
        let Phase::Shuffling(mut run) = self.phase.clone() else {
            return;
        };

        let scaled = dt * self.config.shuffle_speed;
        let (duration, height, axis) = (
            self.config.shuffle_duration,
            self.config.arc_height,
            self.config.arc_axis,
        );

        if let Some(swap) = run.current.as_mut() {
            match swap.advance(scaled, duration, height, axis) {
                SwapStep::Moving(a, b) => {
                    self.cups[swap.first.index()].set_position(a);
                    self.cups[swap.second.index()].set_position(b);
                }
                SwapStep::Done(a, b) => {
                    self.cups[swap.first.index()].set_position(a);
                    self.cups[swap.second.index()].set_position(b);
                    self.events.push(GameEvent::SwapFinished {
                        first: swap.first,
                        second: swap.second,
                    });
                    run.current = None;
                    run.completed += 1;
                    self.start_next_swap(&mut run);
                }
            }
        }

        let complete = run.is_complete();
        self.phase = Phase::Shuffling(run);
        if complete {
            self.finish_shuffle();
        }
    }

    fn start_next_swap(&mut self, run: &mut ShuffleRun) {
        if run.completed >= run.total {
            return;
        }
        let (first, second) = self.shuffle_rng.distinct_pair(self.cups.len());
        let (first, second) = (CupId::from_index(first), CupId::from_index(second));
        run.current = Some(SwapAnimation::new(
            first,
            second,
            self.cups[first.index()].position(),
            self.cups[second.index()].position(),
        ));
        self.events.push(GameEvent::SwapStarted { first, second });
    }

    fn finish_shuffle(&mut self) {
        self.round.shuffling = false;
        self.events.push(GameEvent::ShuffleFinished);
        self.set_phase(Phase::AwaitingSelection);
    }

    fn draw_correct(&mut self) -> CupId {
        CupId::from_index(self.rng.gen_index(self.cups.len()))
    }

    fn set_phase(&mut self, phase: Phase) {
        let (from, to) = (self.phase.kind(), phase.kind());
        self.phase = phase;
        if from != to {
            log::debug!("Phase {:?} -> {:?}", from, to);
            self.events.push(GameEvent::PhaseChanged { from, to });
        }
    }
}

impl std::fmt::Debug for GameDirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameDirector")
            .field("phase", &self.phase())
            .field("round", &self.round.number)
            .field("shuffling", &self.round.shuffling)
            .field("selected", &self.round.selected)
            .field("cups", &self.cups.len())
            .finish()
    }
}
