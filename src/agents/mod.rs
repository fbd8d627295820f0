/// Agents that supply moves for a player.
mod heuristic;
pub use heuristic::HeuristicAgent;

use std::io::{self, Write};

use crate::board::{Board, Player};
use crate::keymap;

/// An agent that can pick a cell to mark given the current board. None means
/// the agent has no move to offer: the computer on a full board, or a human
/// who quit at the prompt.
pub trait Agent {
    fn choose_cell(&mut self, board: &Board) -> Option<usize>;
}

/// An agent controlled by the user running the program.
pub struct HumanAgent {
    player: Player,
}

impl HumanAgent {
    pub fn new(player: Player) -> HumanAgent {
        HumanAgent { player }
    }

    /// Print `msg`, flush, and read one line. Ok(None) means stdin hit EOF.
    fn read_input(msg: &str) -> io::Result<Option<String>> {
        print!("{msg}");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl Agent for HumanAgent {
    /// Prompt until the user enters one of the nine move keys. `exit`, EOF,
    /// and read errors all end the session with None. Whether the chosen
    /// cell is still empty is the board's call, not this agent's.
    fn choose_cell(&mut self, _board: &Board) -> Option<usize> {
        loop {
            println!(
                "\n{}'s turn. Enter your move from the key map above (or 'exit' to quit):",
                self.player
            );
            let input = match Self::read_input("> ") {
                Ok(Some(input)) => input,
                Ok(None) | Err(_) => return None,
            };
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("exit") {
                return None;
            }
            let mut chars = trimmed.chars();
            if let (Some(key), None) = (chars.next(), chars.next()) {
                if let Some(cell) = keymap::key_to_cell(key) {
                    return Some(cell);
                }
            }
            println!("\nInvalid input. Choose from: {}", keymap::key_choices());
        }
    }
}
