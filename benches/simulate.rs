//! Performance benchmarks for the battle engine.
//!
//! Run with: cargo bench
//!
//! This will generate HTML reports in target/criterion/

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use quiz_clash::battle::{BattleBuilder, BattleMachine, Phase};
use quiz_clash::combat::{damage, DamageModifier};
use quiz_clash::core::{BattleConfig, BattleRng};
use quiz_clash::powers::Character;
use quiz_clash::questions::{Concept, ConceptId, QuestionBank};
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

/// Play one scripted battle to its terminal phase and return the score.
fn run_battle(character: Character, seed: u64) -> i64 {
    let mut machine = BattleBuilder::new(concepts(10))
        .config(
            BattleConfig::default()
                .with_intro_ms(0)
                .with_victory_ms(0)
                .with_power_effect_ms(0),
        )
        .rounds(RoundManager::with_profiles([
            EnemyProfile::new(0.5, 0),
            EnemyProfile::new(0.5, 0),
            EnemyProfile::new(0.5, 0),
        ]))
        .build(seed)
        .expect("pool is large enough");
    machine.select_character(character).expect("fresh machine");

    for _ in 0..1_000 {
        match machine.phase() {
            Phase::PlayerTurn => {
                let correct = machine.current_question().expect("a live question").correct;
                let _ = machine.submit_answer(correct);
            }
            phase if phase.is_terminal() => break,
            _ => {
                let _ = machine.tick(50);
            }
        }
    }

    machine.state().map_or(0, |state| state.score)
}

fn bench_damage_formula(c: &mut Criterion) {
    c.bench_function("damage_formula", |b| {
        b.iter(|| {
            let mut total = 0i64;
            for combo in 0..16u32 {
                total += damage(
                    black_box(true),
                    black_box(combo),
                    black_box(Some(DamageModifier::new(2))),
                );
            }
            black_box(total)
        });
    });
}

fn bench_question_drawing(c: &mut Criterion) {
    let mut group = c.benchmark_group("question_bank");

    for pool_size in [4, 26, 100].iter() {
        let bank = QuestionBank::new(concepts(*pool_size)).expect("valid pool");
        let mut rng = BattleRng::new(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_concepts", pool_size)),
            pool_size,
            |b, _| {
                b.iter(|| {
                    let question = bank.next(&mut rng);
                    black_box(question)
                });
            },
        );
    }

    group.finish();
}

fn bench_full_battle(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_battle");

    for character in [Character::Warrior, Character::Wizard, Character::Dragon] {
        group.bench_with_input(
            BenchmarkId::from_parameter(character),
            &character,
            |b, &character| {
                b.iter(|| black_box(run_battle(character, black_box(42))));
            },
        );
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut machine = BattleMachine::new(concepts(10), 42).expect("pool is large enough");
    machine.select_character(Character::Warrior).expect("fresh machine");

    c.bench_function("snapshot", |b| {
        b.iter(|| black_box(machine.snapshot()));
    });
}

criterion_group!(
    benches,
    bench_damage_formula,
    bench_question_drawing,
    bench_full_battle,
    bench_snapshot
);
criterion_main!(benches);
