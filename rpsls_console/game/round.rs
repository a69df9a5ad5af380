use log::info;
use rpsls_core::input::{self, SELECTION_PROMPT};
use rpsls_core::{ChoiceSource, Console, Selection};
use rpsls_game::{compare, Choice, Outcome};

use crate::game::GameSession;
use crate::RpslsError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RoundResult {
    Played {
        user: Choice,
        computer: Choice,
        outcome: Outcome,
    },
    Quit,
}

impl<C: Console, S: ChoiceSource> GameSession<C, S> {
    /// Plays one round: ask the player, draw the computer's choice, resolve
    /// and score it. A quit word short-circuits before anything is scored.
    pub fn play_round(&mut self) -> Result<RoundResult, RpslsError> {
        self.send_round_header()?;
        self.send_menu()?;

        let user = match input::read_selection(&mut self.console, SELECTION_PROMPT)? {
            Selection::Choice(choice) => choice,
            Selection::Quit => {
                info!(
                    "Player quit at round {}",
                    self.state.rounds_played() + 1
                );
                return Ok(RoundResult::Quit);
            }
        };

        let computer = self.source.next_choice();
        let outcome = compare(user, computer);
        self.state.apply_outcome(outcome);

        self.send_round_result(user, computer, outcome)?;

        Ok(RoundResult::Played {
            user,
            computer,
            outcome,
        })
    }
}
