use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::most_frequent;
use crate::models::{History, Pick, Suggestion, SuggestionSource, PICK_LEN, POOL_SIZE};

/// Draws picks and suggestions against a caller-owned [`History`].
pub struct PickEngine<R: Rng = StdRng> {
    rng: R,
}

impl PickEngine<StdRng> {
    pub fn new(seed: Option<u64>) -> Self {
        let rng: StdRng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
}

impl<R: Rng> PickEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Three uniform draws in `0..POOL_SIZE`, with replacement. The pick is
    /// appended to `history`.
    pub fn generate_random_pick(&mut self, history: &mut History) -> Pick {
        let pick = Pick::new([self.draw_number(), self.draw_number(), self.draw_number()]);
        history.push(pick);
        log::debug!("quick pick {} (history: {})", pick, history.len());
        pick
    }

    /// Most frequent numbers of `history`, padded with random filler.
    ///
    /// With an empty history this is a quick pick, recorded in `history` like
    /// any other. Otherwise `history` is left untouched.
    pub fn suggest_pick(&mut self, history: &mut History) -> Suggestion {
        if history.is_empty() {
            let pick = self.generate_random_pick(history);
            return Suggestion {
                pick,
                source: SuggestionSource::QuickPick,
            };
        }

        let mut numbers = most_frequent(history.as_slice(), PICK_LEN);
        let ranked = numbers.len();
        while numbers.len() < PICK_LEN {
            numbers.push(self.draw_number());
        }

        let pick = Pick::new([numbers[0], numbers[1], numbers[2]]);
        log::debug!("suggested pick {} ({} ranked)", pick, ranked);
        Suggestion {
            pick,
            source: SuggestionSource::Frequency { ranked },
        }
    }

    fn draw_number(&mut self) -> u8 {
        self.rng.random_range(0..POOL_SIZE)
    }
}
