//! 8x8 checkers (draughts) engine: board model, move generation with
//! multi-jump capture chains, and a depth-limited alpha-beta searcher.
//!
//! Rendering, input handling and networking live outside this crate; the
//! only outward-facing surfaces are [`logic::game::GameState`] for turn
//! state and [`logic::snapshot::BoardSnapshot`] for relaying a board over
//! the wire.

pub mod engine;
pub mod logic;
