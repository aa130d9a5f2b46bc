//! Long-running battle simulations.
//!
//! Statistical checks on the scripted enemy, clock edge cases that only
//! show up over many ticks, and a seed sweep proving every battle
//! terminates cleanly.

use quiz_clash::battle::{BattleBuilder, BattleEvent, BattleMachine, Phase};
use quiz_clash::core::{BattleConfig, Combatant};
use quiz_clash::powers::Character;
use quiz_clash::questions::{Concept, ConceptId, OPTION_COUNT};
use quiz_clash::rounds::{EnemyProfile, RoundManager};

fn concepts(n: usize) -> Vec<Concept> {
    (0..n)
        .map(|i| {
            Concept::new(
                ConceptId::new(i as u32),
                format!("term-{i}"),
                format!("definition {i}"),
            )
        })
        .collect()
}

fn answer(machine: &mut BattleMachine, correctly: bool) -> Vec<BattleEvent> {
    let question = machine.current_question().expect("a live question");
    let index = if correctly {
        question.correct
    } else {
        (question.correct + 1) % OPTION_COUNT
    };
    machine.submit_answer(index).unwrap().into_vec()
}

/// Test that the enemy's long-run accuracy tracks its profile. Damage
/// is zeroed out so neither side can die and the sample stays in round
/// one.
#[test]
fn test_enemy_accuracy_tracks_profile() {
    let mut machine = BattleBuilder::new(concepts(10))
        .config(
            BattleConfig::default()
                .with_enemy_damage(0, 0)
                .with_intro_ms(0)
                .with_victory_ms(0)
                .with_power_effect_ms(0),
        )
        .rounds(RoundManager::with_profiles([
            EnemyProfile::new(0.75, 0),
            EnemyProfile::new(0.75, 0),
            EnemyProfile::new(0.75, 0),
        ]))
        .build(42)
        .unwrap();
    machine.select_character(Character::Warrior).unwrap();
    machine.tick(0).unwrap();

    let mut correct = 0usize;
    let trials = 400usize;
    for _ in 0..trials {
        assert_eq!(machine.phase(), Phase::PlayerTurn);
        answer(&mut machine, false);
        let events = machine.tick(1).unwrap();
        correct += events
            .iter()
            .filter(|e| {
                matches!(e, BattleEvent::AnswerJudged { actor: Combatant::Enemy, correct: true, .. })
            })
            .count();
    }

    let rate = correct as f64 / trials as f64;
    assert!(
        (0.65..=0.85).contains(&rate),
        "enemy hit {correct}/{trials} ({rate:.2}); profile says 0.75"
    );
}

/// Test that the turn clock freezes during a power display window and
/// the next turn starts with a full countdown.
#[test]
fn test_clock_freezes_during_power_window() {
    let mut machine = BattleBuilder::new(concepts(10))
        .config(
            BattleConfig::default()
                .with_enemy_damage(30, 0)
                .with_intro_ms(0)
                .with_victory_ms(0)
                .with_power_effect_ms(5_000),
        )
        .rounds(RoundManager::with_profiles([
            EnemyProfile::new(1.0, 2_000),
            EnemyProfile::new(1.0, 2_000),
            EnemyProfile::new(1.0, 2_000),
        ]))
        .build(42)
        .unwrap();
    machine.select_character(Character::Wizard).unwrap();
    machine.tick(0).unwrap();

    // Hand the turn to the enemy and let part of its clock run.
    answer(&mut machine, false);
    machine.tick(1_500).unwrap();
    let snapshot = machine.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::EnemyTurn);
    assert_eq!(snapshot.time_left_ms, 18_500);

    // At 2s the enemy resolves, the 30-damage hit raises the ward, and
    // the display window opens with the clock suspended.
    machine.tick(500).unwrap();
    let snapshot = machine.snapshot().unwrap();
    assert!(matches!(snapshot.phase, Phase::PowerEffect { .. }));
    assert_eq!(snapshot.time_left_ms, 18_000);
    assert_eq!(snapshot.active_power.as_deref(), Some("Arcane Ward"));

    // Mid-window ticks burn window time, not turn time.
    machine.tick(2_000).unwrap();
    assert_eq!(machine.snapshot().unwrap().time_left_ms, 18_000);

    // Window closes; the player's turn starts on a fresh clock.
    machine.tick(3_000).unwrap();
    let snapshot = machine.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::PlayerTurn);
    assert_eq!(snapshot.time_left_ms, 20_000);
}

/// Test the exact tie between enemy think time and turn expiry: the
/// answer resolves and no timeout fires.
#[test]
fn test_enemy_resolution_wins_exact_tie() {
    let mut machine = BattleBuilder::new(concepts(10))
        .config(
            BattleConfig::default()
                .with_enemy_damage(10, 0)
                .with_turn_time_ms(5_000)
                .with_intro_ms(0)
                .with_victory_ms(0)
                .with_power_effect_ms(0),
        )
        .rounds(RoundManager::with_profiles([
            EnemyProfile::new(1.0, 5_000),
            EnemyProfile::new(1.0, 5_000),
            EnemyProfile::new(1.0, 5_000),
        ]))
        .build(42)
        .unwrap();
    machine.select_character(Character::Warrior).unwrap();
    machine.tick(0).unwrap();

    answer(&mut machine, true);
    let events = machine.tick(5_000).unwrap();

    assert!(!events
        .iter()
        .any(|e| matches!(e, BattleEvent::TimerExpired { .. })));
    assert!(events.contains(&BattleEvent::DamageDealt { target: Combatant::Player, amount: 10 }));
    let snapshot = machine.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::PlayerTurn);
    assert_eq!(snapshot.time_left_ms, 5_000);
}

/// Test a seed sweep across every character: battles terminate within
/// bounds, HP never escapes its range, and settlement stays one-shot.
#[test]
fn test_seed_sweep_terminates_cleanly() {
    for seed in 1..=5u64 {
        for character in Character::ALL {
            let mut machine = BattleBuilder::new(concepts(12))
                .config(
                    BattleConfig::default()
                        .with_intro_ms(0)
                        .with_victory_ms(0)
                        .with_power_effect_ms(0),
                )
                .build(seed)
                .unwrap();
            machine.select_character(character).unwrap();

            let mut game_overs = 0usize;
            for step in 0..2_000 {
                let events = match machine.phase() {
                    Phase::PlayerTurn => answer(&mut machine, step % 3 != 2),
                    phase if phase.is_terminal() => break,
                    _ => machine.tick(100).unwrap().into_vec(),
                };
                game_overs += events
                    .iter()
                    .filter(|e| matches!(e, BattleEvent::GameOver { .. }))
                    .count();

                let state = machine.state().unwrap();
                let max = machine.config().max_hp;
                for side in Combatant::both() {
                    assert!(
                        (0..=max).contains(&state.hp[side]),
                        "{side} hp {} escaped 0..={max} (seed {seed}, {character})",
                        state.hp[side]
                    );
                }
            }

            assert!(
                machine.phase().is_terminal(),
                "seed {seed} with {character} never terminated"
            );
            assert_eq!(game_overs, 1, "exactly one game-over per battle");

            let award = machine.settle().expect("terminal battles settle");
            assert!(award.score >= 0);
            assert!(machine.settle().is_none(), "settlement is one-shot");
        }
    }
}
