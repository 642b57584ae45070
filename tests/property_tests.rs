//! Property tests: engine invariants under arbitrary play.
//!
//! Decisions are generated blind. Most are invalid or meaningless for the
//! state they land on, which is the point: rejected input must never bend
//! an invariant.

use proptest::prelude::*;

use snakes_ladders::{
    BoardMap, GameRng, GameSession, PlayerId, TurnDecisions, TurnEngine, FINAL_CELL, MAX_SKILLS,
};

/// One blind decision bundle per turn.
fn arb_decisions() -> impl Strategy<Value = TurnDecisions> {
    (
        proptest::option::of(0usize..3),
        proptest::option::of(0u8..5),
        proptest::option::of(0u8..9),
        proptest::option::of(0usize..3),
    )
        .prop_map(|(use_skill, target, dice_value, replace)| TurnDecisions {
            use_skill,
            skill_target: target.map(PlayerId::new),
            dice_value,
            replace_skill_on_tile: replace,
        })
}

proptest! {
    #[test]
    fn invariants_hold_over_arbitrary_games(
        seed in any::<u64>(),
        plans in proptest::collection::vec(arb_decisions(), 1..250),
    ) {
        let engine = TurnEngine::standard();
        let mut session = GameSession::new(["Ada", "Grace", "Edsger"]).unwrap();
        let mut rng = GameRng::new(seed);
        let mut won_before = [false; 3];

        for decisions in &plans {
            if session.is_finished() {
                break;
            }
            let outcome = engine.resolve_turn(&mut session, &mut rng, decisions);

            for (index, player) in session.players().iter().enumerate() {
                prop_assert!(player.position() <= FINAL_CELL);
                prop_assert!(player.skills().len() <= MAX_SKILLS);
                // Winning is permanent.
                if won_before[index] {
                    prop_assert!(player.has_won());
                }
                won_before[index] = player.has_won();
            }

            // A skipped turn does nothing but clear the stun.
            if outcome.skipped_stunned {
                prop_assert!(outcome.roll.is_none());
                prop_assert!(outcome.movement.is_none());
                prop_assert!(outcome.skill_use.is_none());
                prop_assert!(outcome.acquisition.is_none());
            }

            // The movement trace agrees with the roll.
            if let (Some(roll), Some(movement)) = (outcome.roll, outcome.movement) {
                prop_assert!((1..=6).contains(&roll.value));
                if movement.overshoot {
                    prop_assert_eq!(movement.settled, movement.start);
                } else {
                    prop_assert_eq!(
                        movement.after_roll,
                        movement.start + roll.value
                    );
                }
            }
        }
    }

    #[test]
    fn teleport_queries_are_pure(cell in 0u8..=FINAL_CELL) {
        let board = BoardMap::standard();
        let first = board.teleport(cell);
        for _ in 0..5 {
            prop_assert_eq!(board.teleport(cell), first);
        }
    }

    #[test]
    fn seeded_games_replay_identically(seed in any::<u64>()) {
        let engine = TurnEngine::standard();

        let run = |seed: u64| {
            let mut session = GameSession::new(["Ada", "Grace"]).unwrap();
            let mut rng = GameRng::new(seed);
            let mut positions = Vec::new();
            for _ in 0..50 {
                if session.is_finished() {
                    break;
                }
                engine.resolve_turn(&mut session, &mut rng, &TurnDecisions::none());
                positions.push(
                    session
                        .players()
                        .iter()
                        .map(|p| p.position())
                        .collect::<Vec<_>>(),
                );
            }
            positions
        };

        prop_assert_eq!(run(seed), run(seed));
    }
}
