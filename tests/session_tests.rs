//! Session lifecycle integration tests: setup validation, snapshots for
//! the rendering layer, and rematch resets.

use snakes_ladders::{
    GameSession, ScriptedRandom, SessionSnapshot, SetupError, TurnDecisions, TurnEngine,
};

#[test]
fn test_roster_bounds() {
    assert!(GameSession::new(["Ada", "Grace"]).is_ok());
    assert!(GameSession::new(["Ada", "Grace", "Edsger", "Barbara"]).is_ok());

    assert_eq!(
        GameSession::new(["Ada"]).unwrap_err(),
        SetupError::InvalidCount(1)
    );
    assert_eq!(
        GameSession::new(["A", "B", "C", "D", "E"]).unwrap_err(),
        SetupError::InvalidCount(5)
    );
    assert_eq!(
        GameSession::new(Vec::<String>::new()).unwrap_err(),
        SetupError::InvalidCount(0)
    );
}

#[test]
fn test_duplicate_names_rejected_ignoring_case() {
    assert_eq!(
        GameSession::new(["Ada", "ada", "Grace"]).unwrap_err(),
        SetupError::DuplicateName("ada".to_string())
    );
}

#[test]
fn test_blank_names_rejected() {
    assert_eq!(
        GameSession::new(["Ada", ""]).unwrap_err(),
        SetupError::EmptyName
    );
    assert_eq!(
        GameSession::new(["Ada", "  \t"]).unwrap_err(),
        SetupError::EmptyName
    );
}

#[test]
fn test_snapshot_reflects_play() {
    let engine = TurnEngine::standard();
    let mut session = GameSession::new(["Ada", "Grace"]).unwrap();
    let mut rng = ScriptedRandom::with_rolls(&[3, 5]);

    engine.resolve_turn(&mut session, &mut rng, &TurnDecisions::none());
    engine.resolve_turn(&mut session, &mut rng, &TurnDecisions::none());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.players[0].name, "Ada");
    assert_eq!(snapshot.players[0].position, 3);
    assert_eq!(snapshot.players[1].position, 5);
    assert_eq!(snapshot.active_index, 0);
    assert_eq!(snapshot.turn_number, 2);
    assert!(!snapshot.finished);
}

#[test]
fn test_snapshot_serializes_for_the_renderer() {
    let session = GameSession::new(["Ada", "Grace"]).unwrap();
    let snapshot = session.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
}

#[test]
fn test_reset_offers_a_rematch() {
    let engine = TurnEngine::standard();
    let mut session = GameSession::new(["Ada", "Grace"]).unwrap();
    let mut rng = ScriptedRandom::with_rolls(&[3, 5, 2]);

    for _ in 0..3 {
        engine.resolve_turn(&mut session, &mut rng, &TurnDecisions::none());
    }

    session.reset();
    let snapshot = session.snapshot();
    assert!(snapshot.players.iter().all(|p| p.position == 0));
    assert!(snapshot.players.iter().all(|p| p.skills.is_empty()));
    assert!(snapshot.players.iter().all(|p| !p.has_won && !p.stunned));
    assert_eq!(snapshot.active_index, 0);
    assert_eq!(snapshot.turn_number, 0);
    assert!(!snapshot.finished);

    // The roster survives a reset.
    assert_eq!(snapshot.players[0].name, "Ada");
    assert_eq!(snapshot.players[1].name, "Grace");
}
