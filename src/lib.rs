//! Keypad-driven terminal tic-tac-toe.
//!
//! The library holds the whole game core: the 3x3 board and its rules
//! ([`board`]), the key-to-cell mapping ([`keymap`]), the agents that supply
//! moves for each side ([`agents`]), and the session object the console
//! shell drives ([`session`]). The binary is nothing but prompts, screen
//! clearing, and the input loop.

pub mod agents;
pub mod board;
pub mod keymap;
pub mod session;

pub use agents::{Agent, HeuristicAgent, HumanAgent};
pub use board::{Board, Cell, GameOutcome, MoveError, Player, WINNING_TRIPLES};
pub use session::{GameMode, GameSession, TurnError};
