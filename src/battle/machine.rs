//! The battle state machine.
//!
//! ## Phase flow
//!
//! ```text
//! SelectingCharacter
//!     --select_character--> RoundIntro(1)
//! RoundIntro(n)  --intro window--> [PowerEffect] --> PlayerTurn
//! PlayerTurn     --answer/timeout--> [PowerEffect] --> EnemyTurn
//! EnemyTurn      --think time/timeout--> [PowerEffect] --> PlayerTurn
//!                \-- enemy HP 0 --> RoundVictory(n) | GameOver(won: true)
//!                \-- player HP 0 --> GameOver(won: false)
//! RoundVictory(n) --victory window--> RoundIntro(n+1)
//! GameOver(won)   terminal
//! ```
//!
//! ## Clock model
//!
//! The machine is single-threaded and event-driven. Time enters only
//! through [`tick`](BattleMachine::tick), which advances a logical clock:
//! the turn countdown and at most one piece of scheduled work (the end of
//! a display window, or the enemy's answer after its think time). The
//! loop always consumes time up to the next deadline before crossing it,
//! so a coarse `tick(16)` driver and a `tick(10_000)` test see identical
//! transition order.
//!
//! Scheduled work carries the generation it was created under; any
//! transition bumps the generation and cancels it, so a callback armed
//! for a turn the battle has left can never fire.
//!
//! ## Failure semantics
//!
//! Events in an illegal phase are rejected with
//! [`BattleError::InvalidTransition`] and leave state untouched. Nothing
//! here panics on driver input.

use tracing::{debug, warn};

use crate::combat::{damage, enemy_damage, DamageModifier, TimerTick};
use crate::core::{BattleConfig, BattleError, BattleRng, BattleRngState, Combatant};
use crate::powers::{Character, EffectKind, TriggerCue};
use crate::questions::{Concept, ConceptProvider, Question, QuestionBank, OPTION_COUNT};
use crate::rounds::{Round, RoundManager};
use crate::score::{answer_points, AwardReceipt, AwardRequest, PointsLedger, ScoreKeeper};

use super::event::{Absorption, BattleEvent, Events};
use super::phase::Phase;
use super::state::{BattleSnapshot, BattleState};

/// Work that fires once a delay elapses on the tick clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scheduled {
    kind: ScheduledKind,
    remaining_ms: u32,
    /// Generation the work was armed under; it is dropped unfired if the
    /// battle has transitioned since.
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScheduledKind {
    /// Close the current display phase (round intro, power effect
    /// window, or victory banner).
    AdvancePhase,
    /// Resolve the enemy's answer after its think time.
    ResolveEnemy,
}

/// Builder for a [`BattleMachine`].
///
/// ## Example
///
/// ```
/// use quiz_clash::battle::BattleBuilder;
/// use quiz_clash::core::BattleConfig;
/// use quiz_clash::questions::{Concept, ConceptId};
///
/// let concepts: Vec<Concept> = (0..6)
///     .map(|i| Concept::new(ConceptId::new(i), format!("term {i}"), format!("definition {i}")))
///     .collect();
///
/// let machine = BattleBuilder::new(concepts)
///     .config(BattleConfig::default().with_turn_time_ms(15_000))
///     .build(42)
///     .unwrap();
/// assert!(machine.snapshot().is_none());
/// ```
pub struct BattleBuilder {
    concepts: Vec<Concept>,
    config: BattleConfig,
    rounds: RoundManager,
    scorer: ScoreKeeper,
}

impl BattleBuilder {
    /// Start a builder over the given concept pool.
    #[must_use]
    pub fn new(concepts: Vec<Concept>) -> Self {
        Self {
            concepts,
            config: BattleConfig::default(),
            rounds: RoundManager::default(),
            scorer: ScoreKeeper::default(),
        }
    }

    /// Replace the tuning constants.
    #[must_use]
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the enemy difficulty curve.
    #[must_use]
    pub fn rounds(mut self, rounds: RoundManager) -> Self {
        self.rounds = rounds;
        self
    }

    /// Replace the settlement identifiers.
    #[must_use]
    pub fn score_keeper(mut self, scorer: ScoreKeeper) -> Self {
        self.scorer = scorer;
        self
    }

    /// Validate the concept pool and build the machine.
    ///
    /// Fails with [`BattleError::InsufficientConcepts`] before any battle
    /// state exists if the pool cannot fill four distinct options.
    pub fn build(self, seed: u64) -> Result<BattleMachine, BattleError> {
        assert!(self.config.turn_time_ms > 0, "Turn time must be positive");

        let bank = QuestionBank::new(self.concepts)?;
        let root = BattleRng::new(seed);

        Ok(BattleMachine {
            config: self.config,
            rounds: self.rounds,
            scorer: self.scorer,
            bank,
            question_rng: root.for_context("questions"),
            enemy_rng: root.for_context("enemy"),
            battle: None,
            pending: None,
            window_queued: false,
        })
    }
}

/// The battle engine.
///
/// Owns all mutable battle state and the deterministic RNG streams.
/// Drivers push events in (`select_character`, `submit_answer`, `tick`)
/// and read [`BattleSnapshot`]s and [`BattleEvent`]s out.
#[derive(Debug)]
pub struct BattleMachine {
    config: BattleConfig,
    rounds: RoundManager,
    scorer: ScoreKeeper,
    bank: QuestionBank,
    /// Stream for question generation.
    question_rng: BattleRng,
    /// Stream for enemy accuracy and damage rolls.
    enemy_rng: BattleRng,
    /// Live battle, `None` while selecting a character.
    battle: Option<BattleState>,
    /// At most one piece of scheduled work at a time.
    pending: Option<Scheduled>,
    /// A power fired during the current resolution; show its display
    /// window at the next sub-turn boundary.
    window_queued: bool,
}

impl BattleMachine {
    /// Machine with default config, difficulty, and scoring.
    pub fn new(concepts: Vec<Concept>, seed: u64) -> Result<Self, BattleError> {
        BattleBuilder::new(concepts).build(seed)
    }

    /// Machine over a provider's reviewed concepts.
    pub fn from_provider(
        provider: &impl ConceptProvider,
        user_id: &str,
        notebook_id: &str,
        seed: u64,
    ) -> Result<Self, BattleError> {
        Self::new(provider.reviewed_concepts(user_id, notebook_id), seed)
    }

    /// Current phase. `SelectingCharacter` before a battle starts.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.battle.as_ref().map_or(Phase::SelectingCharacter, |state| state.phase)
    }

    /// Rendering snapshot, `None` before a character is picked.
    #[must_use]
    pub fn snapshot(&self) -> Option<BattleSnapshot> {
        self.battle.as_ref().map(BattleState::snapshot)
    }

    /// The live question, if a turn is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.battle.as_ref().and_then(|state| state.question.as_ref())
    }

    /// Full battle state, read-only.
    #[must_use]
    pub fn state(&self) -> Option<&BattleState> {
        self.battle.as_ref()
    }

    /// The tuning constants this machine runs on.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// RNG stream states for deterministic replay.
    #[must_use]
    pub fn rng_checkpoint(&self) -> (BattleRngState, BattleRngState) {
        (self.question_rng.state(), self.enemy_rng.state())
    }

    /// Restore the RNG streams from a checkpoint.
    pub fn restore_rng(&mut self, checkpoint: &(BattleRngState, BattleRngState)) {
        self.question_rng = BattleRng::from_state(&checkpoint.0);
        self.enemy_rng = BattleRng::from_state(&checkpoint.1);
    }

    /// Pick a character and start the battle.
    ///
    /// Only legal while selecting. Enters `RoundIntro(1)` with both sides
    /// at full HP; round-start powers (Dragon) fire during the intro, so
    /// their damage lands before the first question is shown.
    pub fn select_character(&mut self, character: Character) -> Result<Events, BattleError> {
        if let Some(state) = &self.battle {
            warn!("select_character rejected in {}", state.phase);
            return Err(BattleError::InvalidTransition {
                phase: state.phase.label(),
                event: "select_character",
            });
        }

        debug!("battle started as {}", character);
        let mut events = Events::new();
        events.push(BattleEvent::BattleStarted { character });

        let mut state = BattleState::new(character, self.config.max_hp);
        self.enter_round_intro(&mut state, Round::FIRST, &mut events);
        self.battle = Some(state);
        Ok(events)
    }

    /// Resolve an answer for whichever side's turn is live.
    ///
    /// During `EnemyTurn` this is the manual-resolution hook (the
    /// scheduled think-time callback goes through the same path), so
    /// damage is applied exactly once per answer either way.
    pub fn submit_answer(&mut self, index: usize) -> Result<Events, BattleError> {
        let Some(mut state) = self.battle.take() else {
            warn!("submit_answer rejected before battle start");
            return Err(BattleError::InvalidTransition {
                phase: Phase::SelectingCharacter.label(),
                event: "submit_answer",
            });
        };
        let result = self.submit_answer_inner(&mut state, index);
        self.battle = Some(state);
        result
    }

    /// Advance the logical clock by `delta_ms`.
    ///
    /// Drives the turn countdown, display windows, and the enemy's
    /// delayed resolution. A single large delta crosses deadlines in
    /// order, so transition sequence never depends on tick granularity.
    pub fn tick(&mut self, delta_ms: u32) -> Result<Events, BattleError> {
        let Some(mut state) = self.battle.take() else {
            return Err(BattleError::InvalidTransition {
                phase: Phase::SelectingCharacter.label(),
                event: "tick",
            });
        };
        let result = self.tick_inner(&mut state, delta_ms);
        self.battle = Some(state);
        result
    }

    /// Grant a one-time shield to `side`.
    ///
    /// Shields come from outside the battle (review rewards); the next
    /// hit on that side is fully negated and consumes the shield.
    pub fn grant_shield(&mut self, side: Combatant) -> Result<Events, BattleError> {
        let Some(state) = self.battle.as_mut() else {
            return Err(BattleError::InvalidTransition {
                phase: Phase::SelectingCharacter.label(),
                event: "grant_shield",
            });
        };
        if state.phase.is_terminal() {
            warn!("grant_shield rejected in {}", state.phase);
            return Err(BattleError::InvalidTransition {
                phase: state.phase.label(),
                event: "grant_shield",
            });
        }

        debug!("shield granted to {}", side);
        state.shields[side] = true;
        let mut events = Events::new();
        events.push(BattleEvent::ShieldGranted { side });
        Ok(events)
    }

    /// Discard the battle and return to character selection.
    ///
    /// An abandoned battle is never settled.
    pub fn abandon(&mut self) {
        if self.battle.is_some() {
            debug!("battle abandoned");
        }
        self.battle = None;
        self.pending = None;
        self.window_queued = false;
    }

    /// Produce the settlement request for a finished battle.
    ///
    /// `Some` exactly once after `GameOver`; `None` while the battle is
    /// running and on every call after the first.
    pub fn settle(&mut self) -> Option<AwardRequest> {
        let state = self.battle.as_mut()?;
        self.scorer.settle(state, &self.config)
    }

    /// Settle and hand the award to the points ledger in one step.
    pub fn award(&mut self, ledger: &mut impl PointsLedger) -> Option<AwardReceipt> {
        let request = self.settle()?;
        Some(ledger.award(&request))
    }

    // === Event resolution ===

    fn submit_answer_inner(
        &mut self,
        state: &mut BattleState,
        index: usize,
    ) -> Result<Events, BattleError> {
        let Some(actor) = state.phase.actor() else {
            warn!("submit_answer rejected in {}", state.phase);
            return Err(BattleError::InvalidTransition {
                phase: state.phase.label(),
                event: "submit_answer",
            });
        };
        if index >= OPTION_COUNT {
            warn!("answer index {} out of range", index);
            return Err(BattleError::InvalidOption { index, option_count: OPTION_COUNT });
        }

        let mut events = Events::new();
        self.resolve_answer(state, actor, index, &mut events);
        Ok(events)
    }

    fn resolve_answer(
        &mut self,
        state: &mut BattleState,
        actor: Combatant,
        index: usize,
        events: &mut Events,
    ) {
        let Some(question) = state.question.take() else {
            warn!("no live question to resolve for {}", actor);
            return;
        };
        let correct = question.is_correct(index);
        debug!("{} answered option {} ({})", actor, index, if correct { "correct" } else { "wrong" });

        match actor {
            Combatant::Player => self.resolve_player_answer(state, index, correct, events),
            Combatant::Enemy => self.resolve_enemy_answer(state, index, correct, events),
        }
    }

    fn resolve_player_answer(
        &mut self,
        state: &mut BattleState,
        index: usize,
        correct: bool,
        events: &mut Events,
    ) {
        if correct {
            state.record_correct();
        } else {
            state.record_incorrect();
        }
        events.push(BattleEvent::AnswerJudged {
            actor: Combatant::Player,
            option: index,
            correct,
            combo: state.combo,
        });

        if correct {
            state.score += answer_points(self.config.answer_points, state.combo);

            // Streak triggers are evaluated before the damage roll, so
            // the activating answer itself benefits from the modifier.
            let cue = TriggerCue::AnswerResolved {
                consecutive_correct: state.consecutive_correct,
            };
            if let Some(effect) = state.power.try_fire(&cue) {
                self.power_fired(state, effect, events);
            }

            let modifier = state.power.attack_multiplier().map(DamageModifier::new);
            let amount = damage(true, state.combo, modifier);
            if state.power.consume_single_shot() {
                events.push(BattleEvent::PowerExpired { character: state.character });
            }
            self.deal_damage(state, Combatant::Enemy, amount, events);

            if state.is_defeated(Combatant::Enemy) {
                self.round_won(state, events);
                return;
            }
        }

        self.finish_sub_turn(state, Combatant::Enemy, events);
    }

    fn resolve_enemy_answer(
        &mut self,
        state: &mut BattleState,
        index: usize,
        correct: bool,
        events: &mut Events,
    ) {
        events.push(BattleEvent::AnswerJudged {
            actor: Combatant::Enemy,
            option: index,
            correct,
            combo: state.combo,
        });

        if correct {
            let amount = enemy_damage(
                &mut self.enemy_rng,
                self.config.enemy_damage_base,
                self.config.enemy_damage_spread,
            );

            // Ward triggers see the raw hit before any absorption, and a
            // fresh activation absorbs the very hit that triggered it.
            if let Some(effect) = state.power.try_fire(&TriggerCue::IncomingDamage { amount }) {
                self.power_fired(state, effect, events);
            }

            let landed = self.deal_damage(state, Combatant::Player, amount, events);

            if self.rounds.is_battle_lost(state) {
                self.game_over(state, false, events);
                return;
            }

            // Low-HP triggers react to the HP actually changing; an
            // absorbed hit cues nothing.
            if landed {
                let cue = TriggerCue::HpChanged { player_hp: state.hp[Combatant::Player] };
                if let Some(effect) = state.power.try_fire(&cue) {
                    self.power_fired(state, effect, events);
                }
            }
        }

        self.finish_sub_turn(state, Combatant::Player, events);
    }

    /// Resolve the enemy's turn from the scheduled think-time callback:
    /// roll accuracy, pick an option, and run the shared answer path.
    fn resolve_enemy_turn(&mut self, state: &mut BattleState, events: &mut Events) {
        let Some(question) = &state.question else {
            warn!("enemy turn with no live question; forfeiting");
            self.finish_sub_turn(state, Combatant::Player, events);
            return;
        };

        let profile = self.rounds.profile(state.round);
        let correct = self.enemy_rng.gen_bool(profile.accuracy);
        let index = if correct {
            question.correct
        } else {
            // Uniform over the three wrong options.
            let offset = self.enemy_rng.gen_range_usize(0..OPTION_COUNT - 1);
            offset + usize::from(offset >= question.correct)
        };

        self.resolve_answer(state, Combatant::Enemy, index, events);
    }

    // === Damage and power plumbing ===

    /// Apply a hit through the absorption chain. Returns whether any HP
    /// was actually lost.
    fn deal_damage(
        &mut self,
        state: &mut BattleState,
        target: Combatant,
        amount: i64,
        events: &mut Events,
    ) -> bool {
        if target == Combatant::Player && state.power.immunity_active() {
            debug!("{} damage to player absorbed by {}", amount, state.character.power_name());
            events.push(BattleEvent::DamageAbsorbed {
                target,
                amount,
                absorption: Absorption::Immunity,
            });
            return false;
        }
        if state.shields[target] {
            debug!("{} damage to {} absorbed by shield", amount, target);
            state.shields[target] = false;
            events.push(BattleEvent::DamageAbsorbed {
                target,
                amount,
                absorption: Absorption::Shield,
            });
            return false;
        }

        state.apply_damage(target, amount);
        debug!("{} takes {} damage ({} hp left)", target, amount, state.hp[target]);
        events.push(BattleEvent::DamageDealt { target, amount });
        true
    }

    /// Bookkeeping for a power that just fired: emit the activation,
    /// queue its display window, and apply instant effects.
    fn power_fired(&mut self, state: &mut BattleState, effect: EffectKind, events: &mut Events) {
        let character = state.character;
        debug!("{} activated {}", character, character.power_name());
        events.push(BattleEvent::PowerActivated { character });
        self.window_queued = true;

        match effect {
            EffectKind::Heal { amount } => {
                let healed = state.apply_heal(Combatant::Player, amount, self.config.max_hp);
                debug!("player healed {} ({} hp)", healed, state.hp[Combatant::Player]);
                events.push(BattleEvent::Healed { target: Combatant::Player, amount: healed });
            }
            EffectKind::InstantDamage { amount } => {
                self.deal_damage(state, Combatant::Enemy, amount, events);
            }
            // Lingering modifiers apply through the damage pipeline
            // while the power stays active.
            EffectKind::DamageMultiplier { .. } | EffectKind::DamageImmunity => {}
        }
    }

    // === Transitions ===

    /// Move to `phase`: bumps the generation and cancels scheduled work.
    fn transition(&mut self, state: &mut BattleState, phase: Phase) {
        debug!("{} -> {}", state.phase, phase);
        state.phase = phase;
        state.generation += 1;
        self.pending = None;
    }

    fn schedule(&mut self, state: &BattleState, kind: ScheduledKind, delay_ms: u32) {
        self.pending = Some(Scheduled {
            kind,
            remaining_ms: delay_ms,
            generation: state.generation,
        });
    }

    fn enter_round_intro(&mut self, state: &mut BattleState, round: Round, events: &mut Events) {
        self.rounds.start_round(state, round, self.config.max_hp);
        self.transition(state, Phase::RoundIntro { round });
        state.timer.clear();
        debug!("{} started", round);
        events.push(BattleEvent::RoundStarted { round });

        // Round-start powers fire behind the intro banner.
        if let Some(effect) = state.power.try_fire(&TriggerCue::RoundStart) {
            self.power_fired(state, effect, events);
            if state.is_defeated(Combatant::Enemy) {
                self.round_won(state, events);
                return;
            }
        }

        self.schedule(state, ScheduledKind::AdvancePhase, self.config.intro_ms);
    }

    fn begin_turn(&mut self, state: &mut BattleState, actor: Combatant, events: &mut Events) {
        let phase = match actor {
            Combatant::Player => Phase::PlayerTurn,
            Combatant::Enemy => Phase::EnemyTurn,
        };
        self.transition(state, phase);

        state.question = Some(self.bank.next(&mut self.question_rng));
        state.timer.start(self.config.turn_time_ms);
        events.push(BattleEvent::TurnStarted { actor });

        if actor == Combatant::Enemy {
            let profile = self.rounds.profile(state.round);
            self.schedule(state, ScheduledKind::ResolveEnemy, profile.think_time_ms);
        }
    }

    /// Close out a sub-turn and hand control to `next`, detouring
    /// through a power display window if one was queued.
    fn finish_sub_turn(&mut self, state: &mut BattleState, next: Combatant, events: &mut Events) {
        state.question = None;

        // A full turn cycle ends when control returns to the player.
        if next == Combatant::Player && state.power.end_cycle() {
            debug!("{} expired", state.character.power_name());
            events.push(BattleEvent::PowerExpired { character: state.character });
        }

        if self.window_queued {
            self.window_queued = false;
            self.enter_power_effect(state, next, events);
        } else {
            self.begin_turn(state, next, events);
        }
    }

    fn enter_power_effect(&mut self, state: &mut BattleState, then: Combatant, _events: &mut Events) {
        self.transition(state, Phase::PowerEffect { then });
        state.timer.suspend();
        self.schedule(state, ScheduledKind::AdvancePhase, self.config.power_effect_ms);
    }

    fn round_won(&mut self, state: &mut BattleState, events: &mut Events) {
        debug!("{} won with {} hp left", state.round, state.hp[Combatant::Player]);
        events.push(BattleEvent::RoundWon { round: state.round });
        state.timer.clear();
        self.window_queued = false;

        if self.rounds.is_battle_won(state) {
            self.game_over(state, true, events);
        } else {
            let round = state.round;
            self.transition(state, Phase::RoundVictory { round });
            self.schedule(state, ScheduledKind::AdvancePhase, self.config.victory_ms);
        }
    }

    fn game_over(&mut self, state: &mut BattleState, won: bool, events: &mut Events) {
        debug!("battle over (won: {}, score: {})", won, state.score);
        self.transition(state, Phase::GameOver { won });
        state.timer.clear();
        state.question = None;
        self.window_queued = false;
        events.push(BattleEvent::GameOver { won });
    }

    // === Clock ===

    fn tick_inner(&mut self, state: &mut BattleState, delta_ms: u32) -> Result<Events, BattleError> {
        if state.phase.is_terminal() {
            return Err(BattleError::InvalidTransition {
                phase: state.phase.label(),
                event: "tick",
            });
        }

        let mut events = Events::new();
        let mut remaining = delta_ms;

        loop {
            // Fire anything already due before consuming more time, so
            // zero-delay display windows collapse within one call.
            if self.fire_due_work(state, &mut events) {
                continue;
            }
            if state.timer.is_running() && state.timer.remaining_ms() == 0 {
                self.handle_timeout(state, &mut events);
                continue;
            }
            if remaining == 0 || state.phase.is_terminal() {
                break;
            }

            // Step to the nearest deadline, never across it.
            let mut step = remaining;
            if let Some(pending) = &self.pending {
                step = step.min(pending.remaining_ms);
            }
            if state.timer.is_running() {
                step = step.min(state.timer.remaining_ms());
            }
            remaining -= step;

            let work_due = match &mut self.pending {
                Some(pending) => {
                    pending.remaining_ms -= step;
                    pending.remaining_ms == 0
                }
                None => false,
            };

            // The countdown advances for this step either way, but due
            // work owns the instant: on an exact tie the enemy resolves
            // (or the window closes) instead of the turn expiring, and
            // whatever turn follows brings its own fresh countdown.
            let expired = matches!(state.timer.tick(step), TimerTick::Expired);
            if work_due {
                continue;
            }
            if expired {
                self.handle_timeout(state, &mut events);
            }
        }

        Ok(events)
    }

    /// Fire pending work whose delay has elapsed. Returns whether
    /// anything was consumed.
    fn fire_due_work(&mut self, state: &mut BattleState, events: &mut Events) -> bool {
        let due = matches!(&self.pending, Some(pending) if pending.remaining_ms == 0);
        if !due {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if pending.generation != state.generation {
            debug!("dropped stale {:?} from generation {}", pending.kind, pending.generation);
            return true;
        }

        match (pending.kind, state.phase) {
            (ScheduledKind::AdvancePhase, Phase::RoundIntro { .. }) => {
                if self.window_queued {
                    self.window_queued = false;
                    self.enter_power_effect(state, Combatant::Player, events);
                } else {
                    self.begin_turn(state, Combatant::Player, events);
                }
            }
            (ScheduledKind::AdvancePhase, Phase::PowerEffect { then }) => {
                state.timer.resume();
                self.begin_turn(state, then, events);
            }
            (ScheduledKind::AdvancePhase, Phase::RoundVictory { round }) => match round.next() {
                Some(next) => self.enter_round_intro(state, next, events),
                None => self.game_over(state, true, events),
            },
            (ScheduledKind::ResolveEnemy, Phase::EnemyTurn) => {
                self.resolve_enemy_turn(state, events);
            }
            (kind, phase) => {
                warn!("scheduled {:?} does not apply in {}; dropped", kind, phase);
            }
        }
        true
    }

    fn handle_timeout(&mut self, state: &mut BattleState, events: &mut Events) {
        match state.phase {
            Phase::PlayerTurn => {
                debug!("player timed out; counts as a miss");
                events.push(BattleEvent::TimerExpired { actor: Combatant::Player });
                state.record_incorrect();
                self.finish_sub_turn(state, Combatant::Enemy, events);
            }
            Phase::EnemyTurn => {
                debug!("enemy timed out; forfeits the turn");
                events.push(BattleEvent::TimerExpired { actor: Combatant::Enemy });
                self.finish_sub_turn(state, Combatant::Player, events);
            }
            _ => state.timer.clear(),
        }
    }
}
