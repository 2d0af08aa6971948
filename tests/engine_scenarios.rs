use std::sync::Arc;

use draughts_core::engine::config::EngineConfig;
use draughts_core::engine::search::AlphaBetaEngine;
use draughts_core::engine::{Difficulty, Searcher};
use draughts_core::logic::board::{Board, Color, Piece, Square};
use draughts_core::logic::game::GameState;
use draughts_core::logic::generator::MoveGenerator;

fn square(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn engine(color: Color, difficulty: Difficulty) -> AlphaBetaEngine {
    AlphaBetaEngine::new(color, difficulty, Arc::new(EngineConfig::default()))
}

#[test]
fn opening_move_is_legal_for_dark() {
    // Standard setup, Dark to move, depth 3: the chosen move must come
    // from a Dark piece and be one of that piece's generated destinations.
    let game = GameState::new();
    let mut engine = engine(Color::Dark, Difficulty::Easy);

    let (mv, stats) = engine.search(&game).expect("Dark has moves");
    assert!(stats.nodes > 1);

    let piece = game.board.get_piece(mv.from).expect("source occupied");
    assert_eq!(piece.color, Color::Dark);

    let destinations = MoveGenerator::new().valid_moves(&game.board, &piece);
    assert_eq!(destinations.get(&mv.to), Some(&mv.captured));
}

#[test]
fn eliminated_opponent_is_terminal_without_recursion() {
    // A single Light piece and no Dark pieces: the winner condition makes
    // the root terminal, so the search visits exactly one node and falls
    // back to a random legal move.
    let mut board = Board::empty();
    board.add_piece(Piece {
        square: square(4, 4),
        color: Color::Light,
        king: false,
    });
    let game = GameState::from_board(board, Color::Light);

    let mut engine = engine(Color::Light, Difficulty::Hard);
    let (mv, stats) = engine.search(&game).expect("fallback move expected");

    assert_eq!(stats.nodes, 1, "terminal root must not recurse");
    assert_eq!(mv.from, square(4, 4));
    assert!(mv.captured.is_empty());
}

#[test]
fn double_jump_is_generated_and_chosen() {
    // Light piece at (2,2), enemies at (3,3) and (5,5) with empty landing
    // squares behind both: (6,6) must carry a two-piece capture chain.
    let mut board = Board::empty();
    board.add_piece(Piece {
        square: square(2, 2),
        color: Color::Light,
        king: false,
    });
    board.add_piece(Piece {
        square: square(3, 3),
        color: Color::Dark,
        king: false,
    });
    board.add_piece(Piece {
        square: square(5, 5),
        color: Color::Dark,
        king: false,
    });

    let piece = board.get_piece(square(2, 2)).unwrap();
    let moves = MoveGenerator::new().valid_moves(&board, &piece);
    let chain = moves.get(&square(6, 6)).expect("double jump destination");
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0].square, square(3, 3));
    assert_eq!(chain[1].square, square(5, 5));

    // The search prefers the full chain over the single jump.
    let game = GameState::from_board(board, Color::Light);
    let mut engine = engine(Color::Light, Difficulty::Easy);
    let (mv, _) = engine.search(&game).unwrap();
    assert_eq!(mv.to, square(6, 6));
    assert_eq!(mv.capture_len(), 2);
}

#[test]
fn engine_move_commits_through_the_select_protocol() {
    // The engine's atomic choice translates to the external two-step
    // select-source / select-destination commit.
    use draughts_core::logic::game::SelectOutcome;

    let mut game = GameState::new();
    let mut engine = engine(Color::Dark, Difficulty::Easy);
    let (mv, _) = engine.search(&game).unwrap();

    assert_eq!(game.select(mv.from), SelectOutcome::PieceSelected);
    assert_eq!(game.select(mv.to), SelectOutcome::MoveMade);
    assert_eq!(game.turn, Color::Light);
    assert_eq!(game.last_move, Some((mv.from, mv.to)));
}

#[test]
fn full_game_between_two_engines_stays_consistent() {
    // Play a bounded number of plies and verify the counter invariants
    // hold after every committed move.
    let mut game = GameState::new();
    let mut dark = engine(Color::Dark, Difficulty::Easy);
    let mut light = engine(Color::Light, Difficulty::Easy);

    for _ in 0..40 {
        if game.winner().is_some() {
            break;
        }
        let result = match game.turn {
            Color::Dark => dark.search(&game),
            Color::Light => light.search(&game),
        };
        let Some((mv, _)) = result else {
            break; // side to move is stuck
        };
        game.make_move(mv.from, mv.to).expect("engine move is legal");

        let light_count =
            u8::try_from(game.board.pieces(Color::Light).len()).unwrap();
        let dark_count = u8::try_from(game.board.pieces(Color::Dark).len()).unwrap();
        assert_eq!(game.board.light_remaining, light_count);
        assert_eq!(game.board.dark_remaining, dark_count);
    }
}
