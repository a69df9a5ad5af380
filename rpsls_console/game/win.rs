use rpsls_core::MatchState;
use rpsls_game::Outcome;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchEnd {
    UserVictory,
    ComputerVictory,
    /// The player left before either side reached the target score
    Quit,
}

impl MatchEnd {
    pub fn from_state(state: &MatchState) -> Self {
        match state.winner() {
            Some(Outcome::UserWins) => Self::UserVictory,
            Some(_) => Self::ComputerVictory,
            None => Self::Quit,
        }
    }
}

/// What is reported once a match is over, taken entirely from the final state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub user_score: u32,
    pub computer_score: u32,
    pub rounds_played: u32,
    pub max_score: u32,
    pub end: MatchEnd,
}

impl MatchSummary {
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            user_score: state.user_score(),
            computer_score: state.computer_score(),
            rounds_played: state.rounds_played(),
            max_score: state.max_score(),
            end: MatchEnd::from_state(state),
        }
    }
}
