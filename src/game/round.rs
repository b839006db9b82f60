use super::arrangement::Arrangement;
use super::content::Content;
use super::door::Door;
use super::outcome::Outcome;
use super::strategy::Strategy;
use rand::Rng;

/// One strategy's result for one round.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct RoundResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<8}{}", self.strategy.to_string(), self.outcome)
    }
}

/// Shared context for one full round. Both strategies are judged against
/// the same arrangement, the same initial pick, and the same revealed door.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Round {
    arrangement: Arrangement,
    pick: Door,
    reveal: Door,
}

impl Round {
    /// Play the chance portion of a round: deal the doors, draw the
    /// contestant's pick, and have the host open a goat door. The context
    /// is frozen here and never recomputed.
    pub fn deal(rng: &mut impl Rng) -> Self {
        let arrangement = Arrangement::deal(rng);
        let pick = Door::draw(rng);
        let reveal = arrangement.reveal(pick, rng);
        Self {
            arrangement,
            pick,
            reveal,
        }
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    pub fn pick(&self) -> Door {
        self.pick
    }

    pub fn reveal(&self) -> Door {
        self.reveal
    }

    /// The contestant's final door under the given strategy. Switching
    /// lands on the unique door that is neither picked nor revealed.
    pub fn finalist(&self, strategy: Strategy) -> Door {
        match strategy {
            Strategy::Stay => self.pick,
            Strategy::Switch => Door::ALL
                .into_iter()
                .find(|&d| d != self.pick && d != self.reveal)
                .expect("one unopened door remains"),
        }
    }

    /// Win iff the final door hides the car. Pure and idempotent.
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match self.arrangement.behind(self.finalist(strategy)) {
            Content::Car => Outcome::Win,
            Content::Goat => Outcome::Lose,
        }
    }

    /// Both strategies judged against this one deal, in Strategy::ALL order.
    pub fn results(&self) -> [RoundResult; 2] {
        Strategy::ALL.map(|strategy| RoundResult {
            strategy,
            outcome: self.outcome(strategy),
        })
    }
}

/// assembly from parts, for replaying known scenarios
impl From<(Arrangement, Door, Door)> for Round {
    fn from((arrangement, pick, reveal): (Arrangement, Door, Door)) -> Self {
        Self {
            arrangement,
            pick,
            reveal,
        }
    }
}

impl crate::Arbitrary for Round {
    fn random() -> Self {
        Self::deal(&mut rand::rng())
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "pick {} reveal {} [{}]",
            self.pick, self.reveal, self.arrangement
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn finalists_and_reveal_partition_doors() {
        for _ in 0..1000 {
            let round = Round::random();
            let stay = round.finalist(Strategy::Stay);
            let switch = round.finalist(Strategy::Switch);
            let reveal = round.reveal();
            assert!(stay != switch);
            assert!(stay != reveal);
            assert!(switch != reveal);
        }
    }

    #[test]
    fn stay_keeps_the_pick() {
        let round = Round::random();
        assert!(round.finalist(Strategy::Stay) == round.pick());
    }

    #[test]
    fn judging_is_idempotent() {
        let round = Round::random();
        for strategy in Strategy::ALL {
            assert!(round.outcome(strategy) == round.outcome(strategy));
        }
    }

    #[test]
    fn exactly_one_strategy_wins() {
        for _ in 0..1000 {
            let round = Round::random();
            let wins = Strategy::ALL
                .into_iter()
                .filter(|&s| round.outcome(s) == Outcome::Win)
                .count();
            assert!(wins == 1);
        }
    }

    #[test]
    fn pick_hides_goat_scenario() {
        let arrangement = Arrangement::from([Content::Goat, Content::Goat, Content::Car]);
        let round = Round::from((arrangement, Door::One, Door::Two));
        assert!(round.finalist(Strategy::Stay) == Door::One);
        assert!(round.finalist(Strategy::Switch) == Door::Three);
        assert!(round.outcome(Strategy::Stay) == Outcome::Lose);
        assert!(round.outcome(Strategy::Switch) == Outcome::Win);
    }

    #[test]
    fn pick_hides_car_scenario() {
        let arrangement = Arrangement::from([Content::Car, Content::Goat, Content::Goat]);
        let round = Round::from((arrangement, Door::One, Door::Three));
        assert!(round.finalist(Strategy::Stay) == Door::One);
        assert!(round.finalist(Strategy::Switch) == Door::Two);
        assert!(round.outcome(Strategy::Stay) == Outcome::Win);
        assert!(round.outcome(Strategy::Switch) == Outcome::Lose);
    }

    #[test]
    fn results_share_the_deal() {
        let round = Round::random();
        let [stay, switch] = round.results();
        assert!(stay.strategy == Strategy::Stay);
        assert!(switch.strategy == Strategy::Switch);
        assert!(stay.outcome == round.outcome(Strategy::Stay));
        assert!(switch.outcome == round.outcome(Strategy::Switch));
    }
}
