use crate::game::Outcome;
use crate::game::RoundResult;
use crate::game::Strategy;
use crate::Probability;
use std::collections::BTreeMap;

/// Win/lose counts grouped by strategy, normalized per strategy for
/// display as a contingency table.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Tally(BTreeMap<(Strategy, Outcome), usize>);

impl Tally {
    /// rounds this strategy ended with this outcome
    pub fn count(&self, strategy: Strategy, outcome: Outcome) -> usize {
        self.0.get(&(strategy, outcome)).copied().unwrap_or(0)
    }

    /// rounds this strategy played
    pub fn rounds(&self, strategy: Strategy) -> usize {
        self.count(strategy, Outcome::Win) + self.count(strategy, Outcome::Lose)
    }

    /// fraction of this strategy's rounds ending in the given outcome,
    /// zero when the strategy played no rounds
    pub fn frequency(&self, strategy: Strategy, outcome: Outcome) -> Probability {
        match self.rounds(strategy) {
            0 => 0.,
            n => self.count(strategy, outcome) as Probability / n as Probability,
        }
    }
}

impl FromIterator<RoundResult> for Tally {
    fn from_iter<I: IntoIterator<Item = RoundResult>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for result in iter {
            *counts.entry((result.strategy, result.outcome)).or_insert(0) += 1;
        }
        Self(counts)
    }
}

impl From<&[RoundResult]> for Tally {
    fn from(results: &[RoundResult]) -> Self {
        results.iter().copied().collect()
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<8}{:>8}{:>8}", "", "win", "lose")?;
        for strategy in Strategy::ALL {
            writeln!(
                f,
                "{:<8}{:>8.2}{:>8.2}",
                strategy.to_string(),
                self.frequency(strategy, Outcome::Win),
                self.frequency(strategy, Outcome::Lose),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(strategy: Strategy, outcome: Outcome) -> RoundResult {
        RoundResult { strategy, outcome }
    }

    #[test]
    fn counts_by_strategy_and_outcome() {
        let tally = Tally::from_iter([
            result(Strategy::Stay, Outcome::Win),
            result(Strategy::Stay, Outcome::Lose),
            result(Strategy::Stay, Outcome::Lose),
            result(Strategy::Switch, Outcome::Win),
        ]);
        assert!(tally.count(Strategy::Stay, Outcome::Win) == 1);
        assert!(tally.count(Strategy::Stay, Outcome::Lose) == 2);
        assert!(tally.count(Strategy::Switch, Outcome::Win) == 1);
        assert!(tally.count(Strategy::Switch, Outcome::Lose) == 0);
    }

    #[test]
    fn frequencies_normalize_per_strategy() {
        let tally = Tally::from_iter([
            result(Strategy::Stay, Outcome::Win),
            result(Strategy::Stay, Outcome::Lose),
            result(Strategy::Stay, Outcome::Lose),
            result(Strategy::Stay, Outcome::Lose),
        ]);
        assert!(tally.frequency(Strategy::Stay, Outcome::Win) == 0.25);
        assert!(tally.frequency(Strategy::Stay, Outcome::Lose) == 0.75);
    }

    #[test]
    fn frequencies_sum_to_one() {
        let tally = Tally::from_iter([
            result(Strategy::Stay, Outcome::Win),
            result(Strategy::Stay, Outcome::Lose),
            result(Strategy::Switch, Outcome::Win),
            result(Strategy::Switch, Outcome::Win),
        ]);
        for strategy in Strategy::ALL {
            let sum = tally.frequency(strategy, Outcome::Win)
                + tally.frequency(strategy, Outcome::Lose);
            assert!((sum - 1.0).abs() < 1e-6, "sum={}", sum);
        }
    }

    #[test]
    fn empty_tally_reports_zero() {
        let tally = Tally::default();
        assert!(tally.rounds(Strategy::Stay) == 0);
        assert!(tally.frequency(Strategy::Stay, Outcome::Win) == 0.);
    }
}
