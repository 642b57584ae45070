use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snakes_ladders::{GameRng, GameSession, TurnDecisions, TurnEngine};

/// Play a full seeded four-player game with no skill use and return the
/// number of turns it took.
fn play_game(engine: &TurnEngine, seed: u64) -> u32 {
    let mut session = GameSession::new(["Ada", "Grace", "Edsger", "Barbara"]).unwrap();
    let mut rng = GameRng::new(seed);

    while !session.is_finished() {
        engine.resolve_turn(&mut session, &mut rng, &TurnDecisions::none());
    }
    session.turn_number()
}

fn bench_full_game(c: &mut Criterion) {
    let engine = TurnEngine::standard();

    c.bench_function("full_game_4_players", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_game(&engine, seed))
        });
    });
}

fn bench_single_turn(c: &mut Criterion) {
    let engine = TurnEngine::standard();

    c.bench_function("resolve_turn", |b| {
        let mut session = GameSession::new(["Ada", "Grace"]).unwrap();
        let mut rng = GameRng::new(42);
        b.iter(|| {
            if session.is_finished() {
                session.reset();
            }
            black_box(engine.resolve_turn(
                &mut session,
                &mut rng,
                &TurnDecisions::none(),
            ))
        });
    });
}

criterion_group!(benches, bench_full_game, bench_single_turn);
criterion_main!(benches);
