/// One game from empty board to terminal outcome.
use thiserror::Error;

use crate::agents::{Agent, HeuristicAgent};
use crate::board::{Board, GameOutcome, MoveError, Player};
use crate::keymap;

#[cfg(test)]
use crate::board::Cell::{Empty, Marked};
#[cfg(test)]
use crate::board::Player::{O, X};

/// Who supplies O's moves. Picked once at startup, fixed for the session;
/// the rules engine itself never looks at it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameMode {
    SinglePlayer,
    Multiplayer,
}

impl GameMode {
    /// Map the raw startup selection to a mode. Anything other than "1" or
    /// "2" falls back to single player.
    pub fn from_selection(raw: &str) -> GameMode {
        match raw.trim() {
            "2" => GameMode::Multiplayer,
            _ => GameMode::SinglePlayer,
        }
    }
}

/// Why a submitted key was rejected. Both kinds are recoverable: the board
/// is unchanged and the same player should be prompted again.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TurnError {
    #[error("'{0}' is not one of the nine move keys")]
    InvalidKey(String),
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Owns the board, the turn (inside the board), and the mode. The console
/// shell drives a session through `submit_move` and `request_computer_move`
/// and reads the board back for display.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
}

impl GameSession {
    pub fn new(mode: GameMode) -> GameSession {
        GameSession {
            board: Board::new(),
            mode,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.board.turn()
    }

    /// True when it is the computer's turn to move in this session.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::SinglePlayer && self.board.turn() == Player::O
    }

    /// Translate a raw key through the key map, apply the move for `player`,
    /// and report the resulting outcome. Rejected input leaves the board and
    /// turn untouched so no turn is consumed.
    pub fn submit_move(&mut self, raw_key: &str, player: Player) -> Result<GameOutcome, TurnError> {
        let trimmed = raw_key.trim();
        let mut chars = trimmed.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(key), None) => key,
            _ => return Err(TurnError::InvalidKey(trimmed.to_string())),
        };
        let cell =
            keymap::key_to_cell(key).ok_or_else(|| TurnError::InvalidKey(trimmed.to_string()))?;
        self.board.apply_move(cell, player)?;
        Ok(self.board.evaluate_outcome())
    }

    /// The heuristic's cell for the computer (always O). None only on a full
    /// board, which a caller respecting the outcome never reaches.
    pub fn request_computer_move(&self) -> Option<usize> {
        let mut computer = HeuristicAgent::new(Player::O);
        computer.choose_cell(&self.board)
    }
}

#[test]
fn test_first_move_through_the_key_map() {
    let mut session = GameSession::new(GameMode::Multiplayer);
    assert_eq!(Ok(GameOutcome::InProgress), session.submit_move("e", X));
    assert_eq!(Marked(X), session.board().cell(0));
    assert_eq!(O, session.current_player());
}

#[test]
fn test_unmapped_key_is_rejected_without_consuming_the_turn() {
    let mut session = GameSession::new(GameMode::Multiplayer);
    assert_eq!(
        Err(TurnError::InvalidKey("z".to_string())),
        session.submit_move("z", X)
    );
    assert_eq!(
        Err(TurnError::InvalidKey("ef".to_string())),
        session.submit_move("ef", X)
    );
    assert_eq!(X, session.current_player());
    assert_eq!(9, session.board().empty_cells().len());
}

#[test]
fn test_taken_cell_surfaces_the_move_error() {
    let mut session = GameSession::new(GameMode::Multiplayer);
    assert_eq!(Ok(GameOutcome::InProgress), session.submit_move("f", X));
    assert_eq!(
        Err(TurnError::Move(MoveError::CellTaken(4))),
        session.submit_move("F", O)
    );
    assert_eq!(O, session.current_player());
}

#[test]
fn test_keys_are_case_insensitive() {
    let mut session = GameSession::new(GameMode::Multiplayer);
    assert_eq!(Ok(GameOutcome::InProgress), session.submit_move("E", X));
    assert_eq!(Marked(X), session.board().cell(0));
}

#[test]
fn test_a_full_game_ends_in_a_win() {
    let mut session = GameSession::new(GameMode::Multiplayer);
    // X takes the top row: e r t; O answers on the middle row
    for (key, player) in [("e", X), ("d", O), ("r", X), ("f", O)] {
        assert_eq!(Ok(GameOutcome::InProgress), session.submit_move(key, player));
    }
    assert_eq!(Ok(GameOutcome::Win(X)), session.submit_move("t", X));
    // terminal boards accept nothing further
    assert_eq!(
        Err(TurnError::Move(MoveError::GameOver)),
        session.submit_move("b", O)
    );
}

#[test]
fn test_mode_selection_defaults_to_single_player() {
    assert_eq!(GameMode::SinglePlayer, GameMode::from_selection("1"));
    assert_eq!(GameMode::Multiplayer, GameMode::from_selection("2"));
    assert_eq!(GameMode::SinglePlayer, GameMode::from_selection(""));
    assert_eq!(GameMode::SinglePlayer, GameMode::from_selection("3"));
    assert_eq!(GameMode::SinglePlayer, GameMode::from_selection("nope"));
    assert_eq!(GameMode::Multiplayer, GameMode::from_selection(" 2 "));
}

#[test]
fn test_computer_turn_only_in_single_player_as_o() {
    let mut single = GameSession::new(GameMode::SinglePlayer);
    assert!(!single.is_computer_turn());
    assert_eq!(Ok(GameOutcome::InProgress), single.submit_move("f", X));
    assert!(single.is_computer_turn());

    let mut multi = GameSession::new(GameMode::Multiplayer);
    assert_eq!(Ok(GameOutcome::InProgress), multi.submit_move("f", X));
    assert!(!multi.is_computer_turn());
}

#[test]
fn test_computer_move_blocks_through_the_session() {
    let mut session = GameSession::new(GameMode::SinglePlayer);
    let board = Board::from_cells(
        [
            Marked(X),
            Marked(X),
            Empty,
            Empty,
            Empty,
            Empty,
            Empty,
            Empty,
            Empty,
        ],
        O,
    );
    session.board = board;
    assert_eq!(Some(2), session.request_computer_move());
}
