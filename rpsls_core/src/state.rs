use log::trace;
use rpsls_game::Outcome;

use crate::Error;

pub const MIN_TARGET_SCORE: u32 = 1;
pub const MAX_TARGET_SCORE: u32 = 10;
pub const DEFAULT_TARGET_SCORE: u32 = 3;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// Score keeping for one match. The phase is `Finished` exactly when one
/// side has reached the target score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    user_score: u32,
    computer_score: u32,
    rounds_played: u32,
    max_score: u32,
    phase: Phase,
}

impl MatchState {
    pub fn new(max_score: u32) -> Result<Self, Error> {
        if max_score < MIN_TARGET_SCORE || max_score > MAX_TARGET_SCORE {
            return Err(Error::TargetScore(max_score));
        }

        Ok(Self {
            user_score: 0,
            computer_score: 0,
            rounds_played: 0,
            max_score,
            phase: Phase::NotStarted,
        })
    }

    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::InProgress;
        }
    }

    /// Records a resolved round. Ties only count towards the round total.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::UserWins => self.user_score += 1,
            Outcome::ComputerWins => self.computer_score += 1,
            Outcome::Tie => {}
        }
        self.rounds_played += 1;
        self.phase = if self.is_over() {
            Phase::Finished
        } else {
            Phase::InProgress
        };
        trace!(
            "Round {} => {:?} ({}-{})",
            self.rounds_played,
            outcome,
            self.user_score,
            self.computer_score
        );
    }

    pub fn is_over(&self) -> bool {
        self.user_score >= self.max_score || self.computer_score >= self.max_score
    }

    /// The side that reached the target score, as the outcome that names it.
    /// The user is checked first.
    pub fn winner(&self) -> Option<Outcome> {
        if self.user_score >= self.max_score {
            Some(Outcome::UserWins)
        } else if self.computer_score >= self.max_score {
            Some(Outcome::ComputerWins)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.user_score = 0;
        self.computer_score = 0;
        self.rounds_played = 0;
        self.phase = Phase::NotStarted;
    }

    pub fn phase(&self) -> Phase {
        if self.is_over() {
            Phase::Finished
        } else {
            self.phase
        }
    }

    pub fn user_score(&self) -> u32 {
        self.user_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(max_score: u32) -> MatchState {
        let mut state = MatchState::new(max_score).unwrap();
        state.start();
        state
    }

    #[test]
    fn target_score_range() {
        for max_score in MIN_TARGET_SCORE..=MAX_TARGET_SCORE {
            let state = MatchState::new(max_score).unwrap();
            assert_eq!(state.max_score(), max_score);
            assert_eq!(state.phase(), Phase::NotStarted);
            assert_eq!(state.rounds_played(), 0);
        }
        for max_score in vec![0, 11, 100] {
            match MatchState::new(max_score) {
                Err(Error::TargetScore(n)) => assert_eq!(n, max_score),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn outcomes_update_scores() {
        let mut state = started(5);

        state.apply_outcome(Outcome::Tie);
        assert_eq!((state.user_score(), state.computer_score()), (0, 0));
        assert_eq!(state.rounds_played(), 1);

        state.apply_outcome(Outcome::UserWins);
        assert_eq!((state.user_score(), state.computer_score()), (1, 0));
        assert_eq!(state.rounds_played(), 2);

        state.apply_outcome(Outcome::ComputerWins);
        assert_eq!((state.user_score(), state.computer_score()), (1, 1));
        assert_eq!(state.rounds_played(), 3);
        assert_eq!(state.phase(), Phase::InProgress);
    }

    #[test]
    fn ties_never_end_the_match() {
        let mut state = started(1);
        for _ in 0..50 {
            state.apply_outcome(Outcome::Tie);
            assert!(!state.is_over());
        }
        assert_eq!(state.rounds_played(), 50);
    }

    #[test]
    fn over_exactly_at_target() {
        for max_score in vec![1, 3, 5, 10] {
            let mut state = started(max_score);
            for user in 0..=max_score + 1 {
                for computer in 0..=max_score + 1 {
                    state.user_score = user;
                    state.computer_score = computer;
                    let expected = user >= max_score || computer >= max_score;
                    assert_eq!(state.is_over(), expected, "{}-{} of {}", user, computer, max_score);
                    assert_eq!(state.phase() == Phase::Finished, expected);
                }
            }
        }
    }

    #[test]
    fn winner_follows_scores() {
        let mut state = started(2);
        assert_eq!(state.winner(), None);
        state.apply_outcome(Outcome::ComputerWins);
        state.apply_outcome(Outcome::ComputerWins);
        assert_eq!(state.winner(), Some(Outcome::ComputerWins));

        state.user_score = 7;
        assert_eq!(state.winner(), Some(Outcome::UserWins));
    }

    #[test]
    fn match_to_three() {
        let mut state = started(3);
        let outcomes = vec![
            Outcome::UserWins,
            Outcome::Tie,
            Outcome::UserWins,
            Outcome::ComputerWins,
            Outcome::UserWins,
        ];
        for outcome in outcomes {
            assert!(!state.is_over());
            state.apply_outcome(outcome);
        }

        assert_eq!(state.user_score(), 3);
        assert_eq!(state.computer_score(), 1);
        assert_eq!(state.rounds_played(), 5);
        assert!(state.is_over());
        assert_eq!(state.phase(), Phase::Finished);
    }

    #[test]
    fn reset_from_any_state() {
        let mut fresh = MatchState::new(4).unwrap();
        fresh.reset();
        assert_eq!(fresh, MatchState::new(4).unwrap());

        let mut state = started(4);
        state.apply_outcome(Outcome::UserWins);
        state.apply_outcome(Outcome::Tie);
        state.reset();
        assert_eq!(state, MatchState::new(4).unwrap());

        state.start();
        for _ in 0..4 {
            state.apply_outcome(Outcome::ComputerWins);
        }
        assert_eq!(state.phase(), Phase::Finished);
        state.reset();
        assert_eq!(
            (state.user_score(), state.computer_score(), state.rounds_played()),
            (0, 0, 0)
        );
        assert_eq!(state.phase(), Phase::NotStarted);
    }
}
