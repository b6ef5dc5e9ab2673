//! Simple interactive CLI mode
//!
//! Text-based Ghost game without TUI

use crate::core::{GameConfig, Letter, Lexicon};
use crate::game::{GameOutcome, GameSession, Participant};
use crate::solver::Strategy;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Win/loss record across games in one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub games: usize,
    pub computer_losses: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the dictionary
/// holds no playable words.
pub fn run_simple<S: Strategy>(
    lexicon: &Lexicon,
    config: GameConfig,
    strategy: &mut S,
) -> Result<Scoreboard, String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_games(&mut stdin.lock(), &mut stdout, lexicon, config, strategy)
}

/// Play games until the input runs out or the user quits
///
/// # Errors
///
/// Returns an error on I/O failure or if the dictionary holds no playable words.
pub fn play_games<R: BufRead, W: Write, S: Strategy>(
    input: &mut R,
    output: &mut W,
    lexicon: &Lexicon,
    config: GameConfig,
    strategy: &mut S,
) -> Result<Scoreboard, String> {
    print_instructions(output, &config).map_err(|e| e.to_string())?;
    let mut scoreboard = Scoreboard::default();

    loop {
        let mut session = GameSession::new(lexicon, config).map_err(|e| e.to_string())?;

        let Some(outcome) = play_one(input, output, &mut session, strategy)? else {
            writeln!(output, "\n👋 Thanks for playing!\n").map_err(|e| e.to_string())?;
            return Ok(scoreboard);
        };

        scoreboard.games += 1;
        if outcome.loser == Participant::Computer {
            scoreboard.computer_losses += 1;
        }
        print_outcome(output, &outcome, &scoreboard).map_err(|e| e.to_string())?;

        let again = read_line(input, output, "Play again? (yes/no)")?;
        if !matches!(again.as_deref(), Some("yes" | "y")) {
            writeln!(output, "\n👋 Thanks for playing!\n").map_err(|e| e.to_string())?;
            return Ok(scoreboard);
        }
        writeln!(output, "\n🔄 New game started!\n").map_err(|e| e.to_string())?;
    }
}

/// Play one game, returning `None` if the user quit halfway
fn play_one<R: BufRead, W: Write, S: Strategy>(
    input: &mut R,
    output: &mut W,
    session: &mut GameSession,
    strategy: &mut S,
) -> Result<Option<GameOutcome>, String> {
    while !session.is_over() {
        if !session.text().is_empty() && session.current_participant() == Participant::Human(1) {
            writeln!(output, "Game progress: {}", session.text().bright_white().bold())
                .map_err(|e| e.to_string())?;
        }

        match session.current_participant() {
            Participant::Computer => {
                let chosen = session.play_computer(strategy).map_err(|e| e.to_string())?;
                if let Some(m) = chosen {
                    writeln!(output, "Computer's turn: {}", m.letter.to_string().cyan().bold())
                        .map_err(|e| e.to_string())?;
                }
            }
            Participant::Human(n) => {
                let Some(letter) = prompt_letter(input, output, n)? else {
                    return Ok(None);
                };
                session.play_human(letter).map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(session.outcome().cloned())
}

/// Prompt until a valid letter arrives, or `None` on quit/end of input
fn prompt_letter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    player: usize,
) -> Result<Option<Letter>, String> {
    let prompt = format!("Player{player}'s turn: Please enter an English letter (a-z)");

    loop {
        let Some(line) = read_line(input, output, &prompt)? else {
            return Ok(None);
        };

        if matches!(line.as_str(), "quit" | "exit") {
            return Ok(None);
        }

        match Letter::parse(&line) {
            Ok(letter) => return Ok(Some(letter)),
            Err(e) => writeln!(output, "❌ {e}. Try again.").map_err(|e| e.to_string())?,
        }
    }
}

fn print_instructions<W: Write>(output: &mut W, config: &GameConfig) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                WELCOME TO THE GAME OF GHOST                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(output, "Players take turns building up an English word from left to right.")?;
    writeln!(output, "Each player adds one letter per turn. The goal is to not complete a word:")?;
    writeln!(
        output,
        "  - if you add a letter that completes a word ({}+ letters), you lose",
        config.min_word_length()
    )?;
    writeln!(
        output,
        "  - if you add a letter that makes a string no word starts with, you lose\n"
    )?;
    writeln!(
        output,
        "{} human player(s) against the computer. Type 'quit' to exit.\n",
        config.human_players()
    )
}

fn print_outcome<W: Write>(
    output: &mut W,
    outcome: &GameOutcome,
    scoreboard: &Scoreboard,
) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    let headline = format!("{} loses: {}.", outcome.loser, outcome.reason);
    if outcome.loser == Participant::Computer {
        writeln!(output, "  {}", headline.bright_green().bold())?;
    } else {
        writeln!(output, "  {}", headline.bright_red().bold())?;
    }
    writeln!(
        output,
        "  Final string: {}",
        outcome.final_string.to_uppercase().bright_white().bold()
    )?;
    writeln!(
        output,
        "  Computer has lost {} of {} games",
        scoreboard.computer_losses, scoreboard.games
    )?;
    writeln!(output, "{}\n", "═".repeat(60).bright_cyan())
}

/// Get user input with a prompt, `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, String> {
    write!(output, "{prompt}: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::OptimalStrategy;
    use std::io::Cursor;

    fn run(words: &[&str], script: &str) -> (Scoreboard, String) {
        let lexicon = Lexicon::from_words(words);
        let mut strategy = OptimalStrategy::seeded(0);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        let scoreboard = play_games(
            &mut input,
            &mut output,
            &lexicon,
            GameConfig::default(),
            &mut strategy,
        )
        .unwrap();
        (scoreboard, String::from_utf8(output).unwrap())
    }

    #[test]
    fn invalid_input_reprompts() {
        let (_, output) = run(&["bath"], "bb\n7\nz\nno\n");

        assert!(output.contains("Please enter only a single letter"));
        assert!(output.contains("Please enter a letter from a-z only"));
        assert!(output.contains("Player1 loses"));
    }

    #[test]
    fn human_loses_with_unknown_letter() {
        let (scoreboard, output) = run(&["bath"], "z\nno\n");

        assert_eq!(scoreboard.games, 1);
        assert_eq!(scoreboard.computer_losses, 0);
        assert!(output.contains("Z"));
    }

    #[test]
    fn computer_forced_to_complete_word() {
        // The computer answers "b" with 'a' and "bat" with 'h', its only letters
        let (scoreboard, output) = run(&["bath"], "b\nt\nno\n");

        assert!(output.contains("Computer's turn"));
        assert!(output.contains("Computer loses"));
        assert_eq!(scoreboard.games, 1);
        assert_eq!(scoreboard.computer_losses, 1);
    }

    #[test]
    fn quit_mid_game() {
        let (scoreboard, output) = run(&["bath"], "quit\n");
        assert_eq!(scoreboard.games, 0);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_stops() {
        let (scoreboard, _) = run(&["bath"], "");
        assert_eq!(scoreboard, Scoreboard::default());
    }

    #[test]
    fn play_again_starts_new_game() {
        let (scoreboard, output) = run(&["bath"], "z\nyes\nq\nno\n");
        assert_eq!(scoreboard.games, 2);
        assert!(output.contains("New game started"));
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let lexicon = Lexicon::new();
        let mut strategy = OptimalStrategy::seeded(0);
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let result = play_games(
            &mut input,
            &mut output,
            &lexicon,
            GameConfig::default(),
            &mut strategy,
        );
        assert!(result.is_err());
    }
}
