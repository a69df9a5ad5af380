use log::debug;
use rpsls_game::{Choice, InvalidSelection};

use crate::{Console, Error, InputError};

/// Case-insensitive words that end the match instead of selecting a choice
pub const QUIT_WORDS: [&str; 3] = ["q", "quit", "salir"];
pub const SELECTION_PROMPT: &str = "Choose your option (1-5, or 'q' to quit): ";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Selection {
    Choice(Choice),
    Quit,
}

pub fn is_quit(raw: &str) -> bool {
    let trimmed = raw.trim();
    QUIT_WORDS.iter().any(|word| trimmed.eq_ignore_ascii_case(word))
}

/// Parses one line of player input. Surrounding whitespace is ignored,
/// anything else that is not a quit word or a whole number is rejected.
pub fn parse(raw: &str) -> Result<Selection, InputError> {
    let trimmed = raw.trim();
    if is_quit(trimmed) {
        return Ok(Selection::Quit);
    }

    let number: i64 = trimmed.parse().map_err(|_| InputError::NotANumber)?;
    Choice::from_number(number)
        .map(Selection::Choice)
        .map_err(|InvalidSelection(n)| InputError::OutOfRange(n))
}

/// Prompts until the player enters a valid choice or a quit word.
/// Rejected input is reported through [`Console::write_error`] and never
/// ends the loop; only console failures are returned as errors.
pub fn read_selection<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<Selection, Error> {
    loop {
        let raw = console.read_line(prompt)?;
        match parse(&raw) {
            Ok(selection) => return Ok(selection),
            Err(err) => {
                debug!("Rejected input {:?}: {:?}", raw.trim(), err);
                console.write_error(&err.to_string())?;
            }
        }
    }
}
