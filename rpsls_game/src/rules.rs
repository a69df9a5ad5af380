use crate::choice::Choice;
use crate::outcome::Outcome;

/// Fixed winning pairs with the verb describing each win.
const VICTORIES: [(Choice, Choice, &str); 10] = [
    (Choice::Rock, Choice::Scissors, "crushes"),
    (Choice::Rock, Choice::Lizard, "crushes"),
    (Choice::Paper, Choice::Rock, "covers"),
    (Choice::Paper, Choice::Spock, "disproves"),
    (Choice::Scissors, Choice::Paper, "cuts"),
    (Choice::Scissors, Choice::Lizard, "decapitates"),
    (Choice::Lizard, Choice::Paper, "eats"),
    (Choice::Lizard, Choice::Spock, "poisons"),
    (Choice::Spock, Choice::Scissors, "smashes"),
    (Choice::Spock, Choice::Rock, "vaporizes"),
];

/// The two choices `choice` defeats, in table order.
pub fn defeats(choice: Choice) -> [Choice; 2] {
    match choice {
        Choice::Rock => [Choice::Scissors, Choice::Lizard],
        Choice::Paper => [Choice::Rock, Choice::Spock],
        Choice::Scissors => [Choice::Paper, Choice::Lizard],
        Choice::Lizard => [Choice::Paper, Choice::Spock],
        Choice::Spock => [Choice::Scissors, Choice::Rock],
    }
}

pub fn beats(a: Choice, b: Choice) -> bool {
    defeats(a).contains(&b)
}

fn verb(winner: Choice, loser: Choice) -> Option<&'static str> {
    VICTORIES
        .iter()
        .find(|(w, l, _)| *w == winner && *l == loser)
        .map(|(_, _, verb)| *verb)
}

/// Phrase describing how `winner` beats `loser`, e.g. `Rock crushes Scissors`.
/// Callers are expected to check [`beats`] first; a pair missing from the
/// table falls back to `<winner> beats <loser>`.
pub fn win_description(winner: Choice, loser: Choice) -> String {
    match verb(winner, loser) {
        Some(verb) => format!("{} {} {}", winner, verb, loser),
        None => format!("{} beats {}", winner, loser),
    }
}

/// One rules line per choice, e.g. `Paper covers Rock and disproves Spock`.
pub fn rule_line(choice: Choice) -> String {
    let [first, second] = defeats(choice);
    format!(
        "{} {} {} and {} {}",
        choice,
        verb(choice, first).unwrap_or("beats"),
        first,
        verb(choice, second).unwrap_or("beats"),
        second
    )
}

/// Resolves a round from the user's point of view.
pub fn compare(user: Choice, computer: Choice) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if beats(user, computer) {
        Outcome::UserWins
    } else {
        Outcome::ComputerWins
    }
}
