use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rpsls_core::ChoiceSource;
use rpsls_game::{Choice, CHOICE_COUNT};

/// Uniform random pick over the catalog for the computer's side.
pub struct RandomChoice {
    rng: StdRng,
}

impl RandomChoice {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl ChoiceSource for RandomChoice {
    fn next_choice(&mut self) -> Choice {
        Choice::ALL[self.rng.gen_range(0..CHOICE_COUNT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomChoice::new(Some(7));
        let mut b = RandomChoice::new(Some(7));
        for _ in 0..100 {
            assert_eq!(a.next_choice(), b.next_choice());
        }
    }

    #[test]
    fn every_choice_is_drawn() {
        let mut source = RandomChoice::new(None);
        let mut seen = [0usize; CHOICE_COUNT];
        for _ in 0..1000 {
            seen[source.next_choice().number() as usize - 1] += 1;
        }
        for (index, count) in seen.iter().enumerate() {
            println!("{}: {}", Choice::ALL[index], count);
            assert!(*count > 0);
        }
    }
}
