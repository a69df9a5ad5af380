use rpsls_core::{ChoiceSource, Console};
use rpsls_game::{Choice, Outcome};

use crate::display;
use crate::game::{GameSession, MatchSummary};
use crate::RpslsError;

impl<C: Console, S: ChoiceSource> GameSession<C, S> {
    fn send_lines(&mut self, lines: Vec<String>) -> Result<(), RpslsError> {
        for line in lines.iter() {
            self.console.write_line(line)?;
        }
        Ok(())
    }

    pub fn send_welcome(&mut self) -> Result<(), RpslsError> {
        let mut lines = display::banner(self.state.max_score());
        lines.extend(display::rules());
        self.send_lines(lines)
    }

    pub fn send_round_header(&mut self) -> Result<(), RpslsError> {
        let lines = display::round_header(
            self.state.rounds_played() + 1,
            self.state.user_score(),
            self.state.computer_score(),
        );
        self.send_lines(lines)
    }

    pub fn send_menu(&mut self) -> Result<(), RpslsError> {
        self.send_lines(display::menu())
    }

    pub fn send_round_result(
        &mut self,
        user: Choice,
        computer: Choice,
        outcome: Outcome,
    ) -> Result<(), RpslsError> {
        self.send_lines(display::round_result(user, computer, outcome))
    }

    pub fn send_summary(&mut self, summary: &MatchSummary) -> Result<(), RpslsError> {
        self.send_lines(display::summary(summary))
    }

    pub fn send_farewell(&mut self) -> Result<(), RpslsError> {
        self.console.write_line("")?;
        self.console.write_line(&display::farewell())?;
        Ok(())
    }
}
