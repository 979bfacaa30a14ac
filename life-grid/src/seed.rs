use crate::{Loc, Random};

/// Lattice positions forced alive when seeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPattern {
    locs: Vec<Loc>,
}

impl SeedPattern {
    pub fn new(locs: Vec<Loc>) -> Self {
        Self { locs }
    }

    pub fn glider() -> Self {
        Self::new(
            [(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)]
                .into_iter()
                .map(|(col, row)| Loc::new(col, row))
                .collect(),
        )
    }

    pub fn contains(&self, loc: Loc) -> bool {
        self.locs.contains(&loc)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Every cell dead except the pattern's.
    Fixed(SeedPattern),
    /// Every cell alive with probability one half.
    Random,
}

impl Seeding {
    pub fn is_alive(&self, loc: Loc, rand: &mut Random) -> bool {
        match self {
            Seeding::Fixed(pattern) => pattern.contains(loc),
            Seeding::Random => rand.next_bool(0.5),
        }
    }
}

impl Default for Seeding {
    fn default() -> Self {
        Seeding::Fixed(SeedPattern::glider())
    }
}
