use rpsls_game::Choice;

/// Supplies the computer's choice for each round.
pub trait ChoiceSource {
    fn next_choice(&mut self) -> Choice;
}

impl<F> ChoiceSource for F
where
    F: FnMut() -> Choice,
{
    fn next_choice(&mut self) -> Choice {
        self()
    }
}

/// Cycles through `choices` in order. An empty list always yields Rock.
pub fn sequence(choices: Vec<Choice>) -> impl ChoiceSource {
    let mut cycle = choices.into_iter().cycle();
    move || cycle.next().unwrap_or(Choice::Rock)
}
