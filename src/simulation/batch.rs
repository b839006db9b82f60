use super::tally::Tally;
use crate::game::Round;
use crate::game::RoundResult;
use crate::DEFAULT_TRIALS;
use rand::Rng;

/// Sequential Monte Carlo driver. Results arrive two per round, one per
/// strategy, in round order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Batch(usize);

impl Batch {
    /// rounds this batch will play
    pub fn trials(&self) -> usize {
        self.0
    }

    /// Play every round off the process-wide generator and report the tally.
    pub fn run(&self) -> Vec<RoundResult> {
        self.sample(&mut rand::rng())
    }

    /// Play every round off the given generator. Logs the per-strategy
    /// win/lose table and returns the raw results, two rows per round.
    /// Zero trials yield an empty batch without failure.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec<RoundResult> {
        let results = (0..self.0)
            .map(|_| Round::deal(rng))
            .flat_map(|round| round.results())
            .collect::<Vec<_>>();
        log::info!(
            "simulated {} rounds\n{}",
            self.0,
            Tally::from(results.as_slice())
        );
        results
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self(DEFAULT_TRIALS)
    }
}

impl From<usize> for Batch {
    fn from(trials: usize) -> Self {
        Self(trials)
    }
}
