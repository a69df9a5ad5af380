use std::fmt;

/// Result of a single round, seen from the user's side.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Outcome {
    UserWins,
    ComputerWins,
    Tie,
}

impl Outcome {
    /// Same round seen from the other side of the table
    pub fn invert(&self) -> Self {
        match self {
            Self::UserWins => Self::ComputerWins,
            Self::ComputerWins => Self::UserWins,
            _ => Self::Tie,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UserWins => "You win!",
            Self::ComputerWins => "Computer wins",
            Self::Tie => "Tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_is_an_involution() {
        for outcome in [Outcome::UserWins, Outcome::ComputerWins, Outcome::Tie].iter() {
            assert_eq!(outcome.invert().invert(), *outcome);
        }
        assert_eq!(Outcome::Tie.invert(), Outcome::Tie);
        assert_eq!(Outcome::UserWins.invert(), Outcome::ComputerWins);
    }
}
