use rand::Rng;

#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Door {
    #[default]
    One = 1,
    Two = 2,
    Three = 3,
}

impl Door {
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// the two doors other than this one
    pub fn others(&self) -> [Self; 2] {
        match self {
            Self::One => [Self::Two, Self::Three],
            Self::Two => [Self::One, Self::Three],
            Self::Three => [Self::One, Self::Two],
        }
    }

    /// contestant's uniformly random initial pick
    pub fn draw(rng: &mut impl Rng) -> Self {
        use rand::prelude::IndexedRandom;
        Self::ALL.choose(rng).copied().expect("three doors in play")
    }

    /// 0-based position for indexing an Arrangement
    pub fn index(&self) -> usize {
        *self as usize - 1
    }
}

/// u8 isomorphism
///
/// Doors are numbered 1..=3 as the contestant sees them.
impl From<u8> for Door {
    fn from(n: u8) -> Door {
        match n {
            1 => Door::One,
            2 => Door::Two,
            3 => Door::Three,
            _ => panic!("Invalid door u8: {}", n),
        }
    }
}
impl From<Door> for u8 {
    fn from(d: Door) -> u8 {
        d as u8
    }
}

impl crate::Arbitrary for Door {
    fn random() -> Self {
        Self::draw(&mut rand::rng())
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
