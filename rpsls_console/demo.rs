use colored::*;
use rpsls_core::{Console, Error};
use rpsls_game::{beats, compare, win_description, Choice, Outcome};

use crate::display;

pub fn print_rules<C: Console>(console: &mut C) -> Result<(), Error> {
    for line in display::rules() {
        console.write_line(&line)?;
    }
    Ok(())
}

/// Every winning combination, then the outcome of all 25 pairings
pub fn run_demo<C: Console>(console: &mut C) -> Result<(), Error> {
    console.write_line(&"DEMO MODE".cyan().bold().to_string())?;
    console.write_line(&"=".repeat(50))?;
    console.write_line(&"Every rule of the game:".yellow().to_string())?;
    console.write_line("")?;

    for winner in Choice::ALL.iter() {
        console.write_line(&format!("{}:", winner).green().to_string())?;
        for loser in Choice::ALL.iter().filter(|x| beats(*winner, **x)) {
            console.write_line(&format!("  • {}", win_description(*winner, *loser)))?;
        }
        console.write_line("")?;
    }

    for line in outcome_table() {
        console.write_line(&line)?;
    }
    console.write_line("")?;
    console.write_line(&"Demo complete! Run without --demo to play.".cyan().to_string())?;
    Ok(())
}

/// Rows are the user's choice, columns the computer's
fn outcome_table() -> Vec<String> {
    let mut lines = Vec::new();
    let mut header = format!("{:<10}", "You \\ CPU");
    for column in Choice::ALL.iter() {
        header.push_str(&format!("{:>10}", column.name()));
    }
    lines.push(header);

    for user in Choice::ALL.iter() {
        let mut row = format!("{:<10}", user.name());
        for computer in Choice::ALL.iter() {
            let cell = match compare(*user, *computer) {
                Outcome::UserWins => "win",
                Outcome::ComputerWins => "lose",
                Outcome::Tie => "tie",
            };
            row.push_str(&format!("{:>10}", cell));
        }
        lines.push(row);
    }
    lines
}
