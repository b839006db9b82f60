/// What a door hides. One car and two goats per round.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Content {
    Car,
    #[default]
    Goat,
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Goat => write!(f, "goat"),
        }
    }
}
