/// Three-tier move selector for the computer opponent.
///
/// One-ply lookahead only: block an imminent opponent win, otherwise complete
/// an own win, otherwise play a random empty cell. Two simultaneous opponent
/// threats cannot both be answered; the first one in table order gets the
/// block and the other wins next turn. That is a known limit of the design,
/// not a bug.
use rand::seq::IndexedRandom;

use crate::agents::Agent;
use crate::board::{Board, Cell, Player, WINNING_TRIPLES};

#[cfg(test)]
use crate::board::Cell::{Empty, Marked};
#[cfg(test)]
use crate::board::Player::{O, X};

/// Plays one side with the tiered scan.
pub struct HeuristicAgent {
    player: Player,
}

impl HeuristicAgent {
    pub fn new(player: Player) -> HeuristicAgent {
        HeuristicAgent { player }
    }
}

impl Agent for HeuristicAgent {
    /// Pick a cell to mark, or None when the board is full. Callers should
    /// never ask on a full board; the outcome is already Tie or Win at that
    /// point.
    fn choose_cell(&mut self, board: &Board) -> Option<usize> {
        // tier 1: the opponent's marks, not our own, or blocking never triggers
        if let Some(block) = completing_cell(board, self.player.opponent()) {
            return Some(block);
        }
        // tier 2: take a win of our own
        if let Some(win) = completing_cell(board, self.player) {
            return Some(win);
        }
        // tier 3: any empty cell, uniformly at random
        let empties = board.empty_cells();
        empties.choose(&mut rand::rng()).copied()
    }
}

/// The empty third cell of the first triple (table order) in which `player`
/// holds the other two. Triples whose third cell is already marked do not
/// count and scanning continues past them.
fn completing_cell(board: &Board, player: Player) -> Option<usize> {
    for triple in WINNING_TRIPLES {
        let held = triple
            .iter()
            .filter(|&&i| board.cell(i) == Cell::Marked(player))
            .count();
        if held != 2 {
            continue;
        }
        if let Some(&open) = triple.iter().find(|&&i| board.cell(i) == Cell::Empty) {
            return Some(open);
        }
    }
    None
}

#[test]
fn test_blocks_an_imminent_opponent_win() {
    // X threatens the top row; O must take cell 2
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
    let mut computer = HeuristicAgent::new(O);
    assert_eq!(Some(2), computer.choose_cell(&board));
}

#[test]
fn test_blocking_outranks_winning_when_both_are_open() {
    // O could win the top row at 2, but X threatens the middle row at 5;
    // tier 1 fires first, so the block wins
    let board = Board::from_cells(
        [
            Marked(O),
            Marked(O),
            Empty,
            Marked(X),
            Marked(X),
            Empty,
            Empty,
            Empty,
            Empty,
        ],
        O,
    );
    let mut computer = HeuristicAgent::new(O);
    assert_eq!(Some(5), computer.choose_cell(&board));
}

#[test]
fn test_takes_own_win_when_opponent_has_no_threat() {
    // X's only pair (the 0,3,6 column) is dead, its third cell holds an O;
    // O completes the top row instead
    let board = Board::from_cells(
        [
            Marked(O),
            Marked(O),
            Empty,
            Marked(X),
            Empty,
            Empty,
            Marked(X),
            Empty,
            Empty,
        ],
        O,
    );
    assert_eq!(None, completing_cell(&board, X));
    let mut computer = HeuristicAgent::new(O);
    assert_eq!(Some(2), computer.choose_cell(&board));
}

#[test]
fn test_dead_triple_does_not_stop_the_scan() {
    // X's top-row pair is blocked at 2, but the middle-row pair is live;
    // the scan must move past the dead triple and block at 5
    let board = Board::from_cells(
        [
            Marked(X),
            Marked(X),
            Marked(O),
            Marked(X),
            Marked(X),
            Empty,
            Empty,
            Empty,
            Empty,
        ],
        O,
    );
    let mut computer = HeuristicAgent::new(O);
    assert_eq!(Some(5), computer.choose_cell(&board));
}

#[test]
fn test_falls_back_to_a_random_empty_cell() {
    // lone X in the center, no pairs anywhere
    let mut layout = [Empty; 9];
    layout[4] = Marked(X);
    let board = Board::from_cells(layout, O);
    let mut computer = HeuristicAgent::new(O);
    for _ in 0..20 {
        let cell = computer.choose_cell(&board).unwrap();
        assert_eq!(Cell::Empty, board.cell(cell));
        assert_ne!(4, cell);
    }
}

#[test]
fn test_full_board_yields_no_move() {
    let board = Board::from_cells(
        [
            Marked(X),
            Marked(O),
            Marked(X),
            Marked(O),
            Marked(X),
            Marked(O),
            Marked(O),
            Marked(X),
            Marked(O),
        ],
        X,
    );
    let mut computer = HeuristicAgent::new(O);
    assert_eq!(None, computer.choose_cell(&board));
}
