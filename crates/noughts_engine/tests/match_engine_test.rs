//! Behavioural tests for the match engine's public contract.

use noughts_engine::invariants::{InvariantSet, MatchInvariants};
use noughts_engine::{Cell, Mark, MatchEngine, MoveError, MoveOutcome, Outcome, Position};

fn play(engine: &mut MatchEngine, moves: &[usize]) -> MoveOutcome {
    let mut last = None;
    for &index in moves {
        last = Some(engine.play_move(index).expect("legal move"));
    }
    last.expect("at least one move")
}

#[test]
fn test_top_row_win_for_x() {
    let mut engine = MatchEngine::new();
    let outcome = play(&mut engine, &[0, 3, 1, 4, 2]);

    match outcome {
        MoveOutcome::Won { winner, line } => {
            assert_eq!(winner, Mark::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected a win, got {:?}", other),
    }
    assert!(engine.is_over());
    assert_eq!(engine.outcome(), Some(Outcome::Winner(Mark::X)));
}

#[test]
fn test_full_board_draw_when_x_opens() {
    let mut engine = MatchEngine::new();
    // X O X / X O O / O X X
    let outcome = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(outcome, MoveOutcome::Draw);
    assert_eq!(engine.outcome(), Some(Outcome::Draw));
    assert_eq!(*engine.tally().draws(), 1);
}

#[test]
fn test_draw_layout_in_second_match() {
    let mut engine = MatchEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.reset();
    assert_eq!(engine.current_turn(), Mark::O);

    // O opens: fills the board as X,O,X,O,X,O,O,X,O by index.
    let outcome = play(&mut engine, &[1, 0, 3, 2, 5, 4, 6, 7, 8]);
    assert_eq!(outcome, MoveOutcome::Draw);

    use Mark::{O, X};
    let expected = [X, O, X, O, X, O, O, X, O].map(Cell::Marked);
    assert_eq!(engine.snapshot(), expected);
    assert_eq!(engine.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_opener_alternates_between_matches() {
    let mut engine = MatchEngine::new();
    assert_eq!(engine.current_turn(), Mark::X);

    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.reset();
    assert_eq!(engine.current_turn(), Mark::O);

    // O wins the second match on the middle row.
    let outcome = play(&mut engine, &[3, 0, 4, 1, 5]);
    assert!(matches!(outcome, MoveOutcome::Won { winner: Mark::O, .. }));
    engine.reset();
    assert_eq!(engine.current_turn(), Mark::X);

    let tally = engine.tally();
    assert_eq!((*tally.x_wins(), *tally.o_wins(), *tally.draws()), (1, 1, 0));
}

#[test]
fn test_occupied_cell_never_mutates() {
    let mut engine = MatchEngine::new();
    play(&mut engine, &[4, 0]);
    let before = engine.clone();

    for index in [4usize, 0] {
        let err = engine.play_move(index).unwrap_err();
        assert!(matches!(err, MoveError::CellOccupied(_)));
    }
    assert_eq!(engine, before);
}

#[test]
fn test_move_after_game_over_never_mutates() {
    let mut engine = MatchEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.clone();

    for index in 0usize..9 {
        assert_eq!(engine.play_move(index), Err(MoveError::GameOver));
    }
    assert_eq!(engine, before);
}

#[test]
fn test_out_of_range_indices_rejected() {
    let mut engine = MatchEngine::new();
    play(&mut engine, &[4]);
    let before = engine.clone();

    assert!(matches!(engine.play_move(9), Err(MoveError::InvalidIndex(_))));
    assert!(matches!(engine.play_move(-1), Err(MoveError::InvalidIndex(_))));
    assert!(matches!(engine.play_move(i64::MIN), Err(MoveError::InvalidIndex(_))));
    assert!(matches!(engine.play_move(u64::MAX), Err(MoveError::InvalidIndex(_))));
    assert_eq!(engine, before);
}

#[test]
fn test_error_messages() {
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    assert_eq!(
        MoveError::InvalidIndex("-1".into()).to_string(),
        "Invalid index \"-1\" (must be 0-8)"
    );
    assert_eq!(
        MoveError::CellOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
}

#[test]
fn test_reset_always_clears_board() {
    let mut engine = MatchEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    engine.reset();

    assert_eq!(engine.snapshot(), [Cell::Empty; 9]);
    assert!(!engine.is_over());
    assert_eq!(engine.outcome(), None);
    assert_eq!(engine.tally().total(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = MatchEngine::new();
    play(&mut engine, &[4]);
    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    assert!(json.contains("{\"Marked\":\"X\"}"));
    assert!(json.starts_with("[\"Empty\""));
}

#[derive(Default)]
struct Counts {
    games: u32,
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

/// Walks every reachable game from `engine`, checking the move contract at
/// every node.
fn explore(engine: &MatchEngine, moves_played: usize, counts: &mut Counts) {
    assert!(MatchInvariants::check_all(engine).is_ok());
    assert!(engine.board().filled() <= moves_played);

    if engine.is_over() {
        let mut after = engine.clone();
        assert_eq!(after.play_move(0usize), Err(MoveError::GameOver));
        assert_eq!(&after, engine);

        counts.games += 1;
        match engine.outcome() {
            Some(Outcome::Winner(Mark::X)) => counts.x_wins += 1,
            Some(Outcome::Winner(Mark::O)) => counts.o_wins += 1,
            Some(Outcome::Draw) => counts.draws += 1,
            None => unreachable!("over without outcome"),
        }
        return;
    }

    for pos in Position::ALL {
        let mut next = engine.clone();
        if engine.board().is_empty(pos) {
            let sign = engine.current_turn();
            next.play_move(pos.index()).expect("empty square accepts a move");
            assert_eq!(next.board().get(pos), Cell::Marked(sign));
            assert_eq!(next.board().filled(), engine.board().filled() + 1);
            explore(&next, moves_played + 1, counts);
        } else {
            assert_eq!(next.play_move(pos.index()), Err(MoveError::CellOccupied(pos)));
            assert_eq!(&next, engine);
        }
    }
}

#[test]
fn test_every_game_respects_move_contract() {
    let mut counts = Counts::default();
    explore(&MatchEngine::new(), 0, &mut counts);

    assert_eq!(counts.games, 255_168);
    assert_eq!(counts.x_wins, 131_184);
    assert_eq!(counts.o_wins, 77_904);
    assert_eq!(counts.draws, 46_080);
}
