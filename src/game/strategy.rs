/// What the contestant does with their pick after the host's reveal.
/// Always passed explicitly; there is no default strategy.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::Stay, Self::Switch];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Stay => write!(f, "stay"),
            Self::Switch => write!(f, "switch"),
        }
    }
}
