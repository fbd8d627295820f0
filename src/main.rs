//! Console shell: prompts, screen clearing, and the turn loop. All game
//! rules live in the library; this binary only moves strings around.
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use tictactoe::agents::{Agent, HumanAgent};
use tictactoe::{keymap, GameMode, GameOutcome, GameSession, Player};

/// Cosmetic pacing between turns so screen clears don't eat messages.
const TURN_DELAY: Duration = Duration::from_millis(700);

fn main() -> Result<()> {
    clear_screen();
    println!("Select game mode:\n\n- 1. Single player (vs. computer)\n\n- 2. Multiplayer");
    let answer = match prompt("\n> ")? {
        Some(answer) => answer,
        None => return Ok(()),
    };

    let choice = answer.trim();
    let mode = GameMode::from_selection(choice);
    match choice {
        "1" => println!("\nSingle Player mode! You're X and the computer is O."),
        "2" => println!("\nMultiplayer mode!"),
        _ => println!("\nInvalid mode selection. Defaulting to single player."),
    }
    thread::sleep(TURN_DELAY);

    let mut session = GameSession::new(mode);
    let mut x_human = HumanAgent::new(Player::X);
    let mut o_human = HumanAgent::new(Player::O);
    loop {
        draw(&session);
        let player = session.current_player();

        let cell = if session.is_computer_turn() {
            thread::sleep(TURN_DELAY);
            session
                .request_computer_move()
                .context("computer was asked to move on a full board")?
        } else {
            let human = match player {
                Player::X => &mut x_human,
                Player::O => &mut o_human,
            };
            match human.choose_cell(session.board()) {
                Some(cell) => cell,
                None => {
                    println!("Bye!");
                    return Ok(());
                }
            }
        };

        // every move, human or computer, funnels back through the key map
        let key = keymap::cell_to_key(cell).context("agent chose a cell that is off the board")?;
        match session.submit_move(&key.to_string(), player) {
            Ok(GameOutcome::InProgress) => {
                println!("\n{player} entered: {key}");
                thread::sleep(TURN_DELAY);
            }
            Ok(outcome) => {
                draw(&session);
                match outcome {
                    GameOutcome::Win(winner) => println!("\n{winner} wins! Congrats.\n"),
                    GameOutcome::Tie => println!("\nTIE GAME! No winner.\n"),
                    GameOutcome::InProgress => unreachable!(),
                }
                return Ok(());
            }
            Err(err) => {
                println!("\n{err}");
                thread::sleep(TURN_DELAY);
            }
        }
    }
}

/// Print `msg`, flush, and read one line. Ok(None) means stdin hit EOF.
fn prompt(msg: &str) -> io::Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

/// ESC[2J clears the screen, ESC[0f homes the cursor.
fn clear_screen() {
    print!("\x1B[2J\x1B[0f");
}

fn draw(session: &GameSession) {
    clear_screen();
    println!("KEY MAP\n{}\n", keymap::key_map_grid());
    println!("GAME BOARD\n{}", session.board());
}
