mod choice;
mod outcome;
mod rules;

pub use choice::{Choice, InvalidSelection, CHOICE_COUNT};
pub use outcome::Outcome;
pub use rules::*;
