use std::fmt;
use thiserror::Error;

pub const CHOICE_COUNT: usize = 5;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("invalid selection: {0}, must be between 1 and 5")]
pub struct InvalidSelection(pub i64);

/// The five symbols of the game. The discriminant is the number the
/// player types to select it and carries no meaning for the rules.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Choice {
    Rock = 1,
    Paper = 2,
    Scissors = 3,
    Lizard = 4,
    Spock = 5,
}

impl Choice {
    /// Every choice in selection order
    pub const ALL: [Choice; CHOICE_COUNT] = [
        Choice::Rock,
        Choice::Paper,
        Choice::Scissors,
        Choice::Lizard,
        Choice::Spock,
    ];

    pub fn from_number(number: i64) -> Result<Choice, InvalidSelection> {
        match number {
            1 => Ok(Choice::Rock),
            2 => Ok(Choice::Paper),
            3 => Ok(Choice::Scissors),
            4 => Ok(Choice::Lizard),
            5 => Ok(Choice::Spock),
            _ => Err(InvalidSelection(number)),
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
            Choice::Lizard => "Lizard",
            Choice::Spock => "Spock",
        }
    }

    /// Menu line shown next to the selection prompt, e.g. `1. Rock`
    pub fn menu_entry(&self) -> String {
        format!("{}. {}", self.number(), self.name())
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
