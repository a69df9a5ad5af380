use colored::*;
use rpsls_game::{rule_line, win_description, Choice, Outcome};

use crate::game::{MatchEnd, MatchSummary};

fn title(text: &str) -> String {
    format!(" === {} === ", text)
        .on_blue()
        .white()
        .bold()
        .to_string()
}

pub fn banner(max_score: u32) -> Vec<String> {
    let rule = "=".repeat(60);
    vec![
        rule.cyan().to_string(),
        "   ROCK, PAPER, SCISSORS, LIZARD, SPOCK".bold().to_string(),
        rule.cyan().to_string(),
        "Welcome to the most epic game in the universe!"
            .yellow()
            .to_string(),
        format!("First to reach {} points wins.", max_score),
        String::new(),
    ]
}

pub fn rules() -> Vec<String> {
    let mut lines = vec![title("GAME RULES")];
    lines.extend(Choice::ALL.iter().map(|x| rule_line(*x)));
    lines.push(String::new());
    lines
}

pub fn menu() -> Vec<String> {
    let mut lines = vec![String::new(), title("OPTIONS")];
    lines.extend(Choice::ALL.iter().map(|x| x.menu_entry().cyan().to_string()));
    lines
}

pub fn round_header(round: u32, user_score: u32, computer_score: u32) -> Vec<String> {
    vec![
        String::new(),
        title(&format!("ROUND {}", round)),
        format!("Score: You {} - {} Computer", user_score, computer_score)
            .yellow()
            .to_string(),
    ]
}

pub fn round_result(user: Choice, computer: Choice, outcome: Outcome) -> Vec<String> {
    let divider = "-".repeat(40);
    let verdict = match outcome {
        Outcome::Tie => format!("{} - Both chose {}", outcome, user).yellow(),
        Outcome::UserWins => format!("{} - {}", outcome, win_description(user, computer)).green(),
        Outcome::ComputerWins => {
            format!("{} - {}", outcome, win_description(computer, user)).red()
        }
    };

    vec![
        String::new(),
        format!("Your choice: {}", user).green().to_string(),
        format!("Computer chose: {}", computer).magenta().to_string(),
        String::new(),
        divider.clone(),
        verdict.to_string(),
        divider,
    ]
}

pub fn summary(summary: &MatchSummary) -> Vec<String> {
    let heading = match summary.end {
        MatchEnd::Quit => "MATCH STOPPED",
        _ => "GAME OVER",
    };
    let verdict = match summary.end {
        MatchEnd::UserVictory => "Congratulations! You won the match!".green(),
        MatchEnd::ComputerVictory => "The computer won this match. Better luck next time!".red(),
        MatchEnd::Quit => format!(
            "Nobody reached {} points before the match was stopped.",
            summary.max_score
        )
        .yellow(),
    };

    vec![
        String::new(),
        title(heading),
        format!(
            "Final score: You {} - {} Computer",
            summary.user_score, summary.computer_score
        )
        .yellow()
        .to_string(),
        format!("Rounds played: {}", summary.rounds_played),
        verdict.to_string(),
    ]
}

pub fn farewell() -> String {
    "Thanks for playing!".yellow().to_string()
}

pub fn interrupted() -> String {
    "Game interrupted. Goodbye!".yellow().to_string()
}

pub fn error(text: &str) -> String {
    text.red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_result_names_the_winning_move() {
        let lines = round_result(Choice::Rock, Choice::Scissors, Outcome::UserWins);
        assert!(lines.iter().any(|x| x.contains("You win! - Rock crushes Scissors")));

        let lines = round_result(Choice::Rock, Choice::Spock, Outcome::ComputerWins);
        assert!(lines.iter().any(|x| x.contains("Computer wins - Spock vaporizes Rock")));

        let lines = round_result(Choice::Lizard, Choice::Lizard, Outcome::Tie);
        assert!(lines.iter().any(|x| x.contains("Tie! - Both chose Lizard")));
    }

    #[test]
    fn rules_list_every_choice() {
        let lines = rules();
        for choice in Choice::ALL.iter() {
            assert!(lines.iter().any(|x| x.starts_with(choice.name())));
        }
        assert!(lines.contains(&"Spock smashes Scissors and vaporizes Rock".to_owned()));
    }

    #[test]
    fn menu_numbers_choices() {
        let lines = menu();
        assert!(lines.iter().any(|x| x.contains("1. Rock")));
        assert!(lines.iter().any(|x| x.contains("5. Spock")));
    }
}
