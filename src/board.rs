/// Board state and rules for 3x3 tic-tac-toe.
use std::fmt;

use thiserror::Error;

use crate::board::Cell::{Empty, Marked};
use crate::board::Player::{O, X};

/// The mark a player places on the board. X always moves first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            X => O,
            O => X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            X => write!(f, "X"),
            O => write!(f, "O"),
        }
    }
}

/// A single cell of the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Marked(Player),
}

/// Result of a game. Derived from the board on demand, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Tie,
}

/// The 8 ways to win: rows, then columns, then the two diagonals. Both
/// outcome evaluation and the computer heuristic scan in this fixed order so
/// their results are deterministic.
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Why a move was rejected. The board and turn are unchanged in every case,
/// so the caller can prompt the same player again.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MoveError {
    #[error("cell index {0} is out of range")]
    OutOfRange(usize),
    #[error("that cell is already marked, try another key")]
    CellTaken(usize),
    #[error("it is not {0}'s turn")]
    NotYourTurn(Player),
    #[error("the game is already over")]
    GameOver,
}

/// The 9 cells in row-major order (row 0: cells 0,1,2) plus whose turn it is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [Cell; 9],
    turn: Player,
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Board {
    /// Return a new empty board with X to move.
    pub fn new() -> Board {
        Board {
            cells: [Empty; 9],
            turn: X,
        }
    }

    /// Build a board from an explicit cell layout, mostly useful for setting
    /// up mid-game positions in tests.
    pub fn from_cells(cells: [Cell; 9], turn: Player) -> Board {
        Board { cells, turn }
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    pub fn cell(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// The player who gets to make the next move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// True if `idx` names a cell that is on the board and still empty.
    /// Pure query, no side effects.
    pub fn is_move_legal(&self, idx: usize) -> bool {
        idx < self.cells.len() && self.cells[idx] == Empty
    }

    /// Indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Mark `idx` for `player` and pass the turn to the other player.
    ///
    /// Rejected moves leave the board untouched: a finished game, an index
    /// off the board, a cell that is already marked, or a player moving out
    /// of turn.
    pub fn apply_move(&mut self, idx: usize, player: Player) -> Result<(), MoveError> {
        if self.evaluate_outcome() != GameOutcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if idx >= self.cells.len() {
            return Err(MoveError::OutOfRange(idx));
        }
        if self.cells[idx] != Empty {
            return Err(MoveError::CellTaken(idx));
        }
        if player != self.turn {
            return Err(MoveError::NotYourTurn(player));
        }

        self.cells[idx] = Marked(player);
        self.turn = player.opponent();
        Ok(())
    }

    /// Scan the winning-triple table for a uniformly marked triple. A board
    /// reached through legal alternating play has at most one, so first-match
    /// order only matters for determinism.
    pub fn evaluate_outcome(&self) -> GameOutcome {
        for [a, b, c] in WINNING_TRIPLES {
            if let Marked(player) = self.cells[a] {
                if self.cells[b] == Marked(player) && self.cells[c] == Marked(player) {
                    return GameOutcome::Win(player);
                }
            }
        }

        if self.cells.iter().any(|&cell| cell == Empty) {
            GameOutcome::InProgress
        } else {
            GameOutcome::Tie
        }
    }
}

/// Lay out 9 glyphs as the 3x3 console grid:
///
/// | X |   | O |
/// -------------
/// |   | X |   |
/// -------------
/// | O |   | X |
pub(crate) fn grid(glyphs: [char; 9]) -> String {
    glyphs
        .chunks(3)
        .map(|row| format!("| {} | {} | {} |", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("\n-------------\n")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = self.cells.map(|cell| match cell {
            Empty => ' ',
            Marked(X) => 'X',
            Marked(O) => 'O',
        });
        write!(f, "{}", grid(glyphs))
    }
}

#[test]
fn test_outcome_stays_in_progress_until_win() {
    let mut board = Board::new();
    // X takes the top row while O marks the middle row
    for (idx, player) in [(0, X), (3, O), (1, X), (4, O)] {
        assert_eq!(Ok(()), board.apply_move(idx, player));
        assert_eq!(GameOutcome::InProgress, board.evaluate_outcome());
    }
    assert_eq!(Ok(()), board.apply_move(2, X));
    assert_eq!(GameOutcome::Win(X), board.evaluate_outcome());
}

#[test]
fn test_every_winning_triple_is_detected() {
    for (n, [a, b, c]) in WINNING_TRIPLES.into_iter().enumerate() {
        let mut cells = [Empty; 9];
        cells[a] = Marked(O);
        cells[b] = Marked(O);
        cells[c] = Marked(O);
        let board = Board::from_cells(cells, X);
        assert_eq!(
            GameOutcome::Win(O),
            board.evaluate_outcome(),
            "triple {} not detected",
            n
        );
    }
}

#[test]
fn test_full_board_without_a_line_is_a_tie() {
    // X O X / O X O / O X O
    let cells = [
        Marked(X),
        Marked(O),
        Marked(X),
        Marked(O),
        Marked(X),
        Marked(O),
        Marked(O),
        Marked(X),
        Marked(O),
    ];
    let board = Board::from_cells(cells, X);
    assert_eq!(GameOutcome::Tie, board.evaluate_outcome());
}

#[test]
fn test_marked_cell_rejects_move_and_keeps_board() {
    let mut board = Board::new();
    assert_eq!(Ok(()), board.apply_move(4, X));
    let before = board.clone();
    assert_eq!(Err(MoveError::CellTaken(4)), board.apply_move(4, O));
    assert_eq!(before, board);
    assert_eq!(O, board.turn());
}

#[test]
fn test_out_of_range_and_out_of_turn_are_rejected() {
    let mut board = Board::new();
    assert_eq!(Err(MoveError::OutOfRange(9)), board.apply_move(9, X));
    assert_eq!(Err(MoveError::NotYourTurn(O)), board.apply_move(0, O));
    assert_eq!(X, board.turn());
    assert!(board.empty_cells().len() == 9);
}

#[test]
fn test_finished_game_accepts_no_more_moves() {
    let mut board = Board::new();
    for (idx, player) in [(0, X), (3, O), (1, X), (4, O), (2, X)] {
        assert_eq!(Ok(()), board.apply_move(idx, player));
    }
    assert_eq!(GameOutcome::Win(X), board.evaluate_outcome());
    assert_eq!(Err(MoveError::GameOver), board.apply_move(5, O));
}

#[test]
fn test_legality_query_has_no_side_effects() {
    let mut board = Board::new();
    assert!(board.is_move_legal(0));
    assert!(!board.is_move_legal(9));
    assert_eq!(Ok(()), board.apply_move(0, X));
    assert!(!board.is_move_legal(0));
    assert!(board.is_move_legal(1));
}
