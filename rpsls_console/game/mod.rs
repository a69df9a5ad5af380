use log::{debug, info};
use rpsls_core::{input, ChoiceSource, Console, MatchState};

use crate::RpslsError;

mod round;
mod send;
mod win;

pub use round::RoundResult;
pub use win::{MatchEnd, MatchSummary};

pub const CONTINUE_PROMPT: &str = "Continue? (Enter to continue, 'q' to quit): ";

/// One interactive match between the player at `console` and the
/// computer drawing from `source`.
pub struct GameSession<C, S> {
    console: C,
    source: S,
    state: MatchState,
    ask_to_continue: bool,
}

impl<C: Console, S: ChoiceSource> GameSession<C, S> {
    pub fn new(console: C, source: S, state: MatchState) -> Self {
        Self {
            console,
            source,
            state,
            ask_to_continue: true,
        }
    }

    /// Whether the player is asked to continue between rounds
    pub fn ask_to_continue(mut self, ask: bool) -> Self {
        self.ask_to_continue = ask;
        self
    }

    /// Plays rounds until a side reaches the target score or the player quits,
    /// then reports the summary.
    pub fn run(&mut self) -> Result<MatchSummary, RpslsError> {
        self.state.start();
        info!("Match started, first to {} points", self.state.max_score());
        self.send_welcome()?;

        loop {
            match self.play_round()? {
                RoundResult::Quit => break,
                RoundResult::Played {
                    user,
                    computer,
                    outcome,
                } => debug!(
                    "Round {}: {} vs {} => {:?} ({}-{})",
                    self.state.rounds_played(),
                    user,
                    computer,
                    outcome,
                    self.state.user_score(),
                    self.state.computer_score()
                ),
            }
            if self.state.is_over() {
                break;
            }
            if self.ask_to_continue && !self.confirm_continue()? {
                info!("Player stopped after round {}", self.state.rounds_played());
                break;
            }
        }

        let summary = MatchSummary::from_state(&self.state);
        info!(
            "Match ended: {:?} {}-{} after {} round(s)",
            summary.end, summary.user_score, summary.computer_score, summary.rounds_played
        );
        self.send_summary(&summary)?;
        self.send_farewell()?;
        Ok(summary)
    }

    fn confirm_continue(&mut self) -> Result<bool, RpslsError> {
        let answer = self.console.read_line(CONTINUE_PROMPT)?;
        Ok(!input::is_quit(&answer))
    }
}
