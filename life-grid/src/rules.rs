use std::fmt;

/// A set of neighbor counts in `0..=8`, one bit per count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    bits: u16,
}

impl NeighborCounts {
    pub const fn from_counts(counts: &[u32]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < counts.len() {
            assert!(counts[i] <= 8);
            bits |= 1 << counts[i];
            i += 1;
        }
        Self { bits }
    }

    pub fn contains(&self, count: u32) -> bool {
        count <= 8 && self.bits & (1 << count) != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..=8).filter(|&count| self.contains(count))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    pub survive: NeighborCounts,
    pub birth: NeighborCounts,
}

impl RuleSet {
    pub const CONWAY: RuleSet = RuleSet {
        survive: NeighborCounts::from_counts(&[2, 3]),
        birth: NeighborCounts::from_counts(&[3]),
    };

    pub fn next_state(&self, alive: bool, neighbors: u32) -> bool {
        if alive {
            self.survive.contains(neighbors)
        } else {
            self.birth.contains(neighbors)
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for count in self.birth.iter() {
            write!(f, "{count}")?;
        }
        write!(f, "/S")?;
        for count in self.survive.iter() {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}
