//! ## Core
//! The match engine for Rock, Paper, Scissors, Lizard, Spock.
//! ### Modules
//! - Console (the blocking line-based I/O seam the engine talks through)
//! - Input (turns raw console text into a choice or a quit request)
//! - State (scores, round counter and end-of-match check)
//! - Source (where the computer's choice comes from)
//!
//! ### Example
//! #### Playing out a round by hand
//! ```
//! use rpsls_core::{input, MatchState, Selection};
//! use rpsls_game::{compare, Choice};
//!
//! let mut state = MatchState::new(3).unwrap();
//! state.start();
//! if let Ok(Selection::Choice(user)) = input::parse(" 1 \n") {
//!     state.apply_outcome(compare(user, Choice::Scissors));
//! }
//! assert_eq!(state.user_score(), 1);
//! ```
pub mod console;
mod error;
pub mod input;
pub mod source;
mod state;
pub mod test_util;

pub use console::Console;
pub use error::{Error, InputError};
pub use input::Selection;
pub use source::ChoiceSource;
pub use state::*;
