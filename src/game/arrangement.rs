use super::content::Content;
use super::door::Door;
use rand::Rng;

/// Ordered contents of the three doors, indexed by Door. Exactly one Car
/// and two Goats, dealt fresh per round and immutable thereafter.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Arrangement([Content; 3]);

impl Arrangement {
    /// shuffle the car behind a uniformly random door
    pub fn deal(rng: &mut impl Rng) -> Self {
        use rand::seq::SliceRandom;
        let mut doors = [Content::Car, Content::Goat, Content::Goat];
        doors.shuffle(rng);
        Self(doors)
    }

    /// what sits behind the given door
    pub fn behind(&self, door: Door) -> Content {
        self.0[door.index()]
    }

    /// the door hiding the car
    pub fn car(&self) -> Door {
        Door::ALL
            .into_iter()
            .find(|&d| self.behind(d) == Content::Car)
            .expect("one car per arrangement")
    }

    /// Host's opened door: never the contestant's pick and never the car.
    /// When the contestant holds the car both other doors hide goats and the
    /// host chooses between them uniformly; otherwise the remaining goat door
    /// is forced. Assumes a valid pick and exactly one car, unchecked.
    pub fn reveal(&self, pick: Door, rng: &mut impl Rng) -> Door {
        use rand::prelude::IndexedRandom;
        match self.behind(pick) {
            Content::Car => pick
                .others()
                .choose(rng)
                .copied()
                .expect("two goats remain"),
            Content::Goat => pick
                .others()
                .into_iter()
                .find(|&d| self.behind(d) == Content::Goat)
                .expect("one goat remains"),
        }
    }
}

impl From<[Content; 3]> for Arrangement {
    fn from(contents: [Content; 3]) -> Self {
        Self(contents)
    }
}

impl crate::Arbitrary for Arrangement {
    fn random() -> Self {
        Self::deal(&mut rand::rng())
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let contents = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", contents)
    }
}
