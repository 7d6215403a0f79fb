//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elo_match::{Calculator, MatchResult, Outcome, Player, ScoreWeightedStrategy};

fn bench_outcome_strategy(c: &mut Criterion) {
    let calculator = Calculator::default();
    let result = MatchResult::outcome(Outcome::PlayerOneWin);

    c.bench_function("outcome_strategy_calculate", |b| {
        b.iter(|| black_box(calculator.calculate(black_box(1200.0), black_box(1000.0), &result)))
    });
}

fn bench_score_weighted_strategy(c: &mut Criterion) {
    let calculator = Calculator::builder()
        .with_strategy(ScoreWeightedStrategy)
        .with_score_weight(0.33)
        .build();
    let result = MatchResult::scores(12, 8);

    c.bench_function("score_weighted_strategy_calculate", |b| {
        b.iter(|| black_box(calculator.calculate(black_box(1200.0), black_box(1000.0), &result)))
    });
}

fn bench_match_session(c: &mut Criterion) {
    let calculator = Calculator::default();

    c.bench_function("match_session_play", |b| {
        b.iter(|| {
            let mut p1 = Player::new("player1", 1600.0);
            let mut p2 = Player::new("player2", 1800.0);

            let mut m = calculator.new_match(&mut p1, &mut p2);
            let gain = m.player_one_gain();
            let _ = m.play(&MatchResult::outcome(Outcome::PlayerTwoWin));
            black_box((gain, p1.rating, p2.rating))
        })
    });
}

criterion_group!(
    benches,
    bench_outcome_strategy,
    bench_score_weighted_strategy,
    bench_match_session
);
criterion_main!(benches);
