use life_grid::Seeding;

use crate::canvas::Palette;
use crate::clock::{DEFAULT_SPEED, DEFAULT_THRESHOLD};

#[derive(Clone, Debug, PartialEq)]
pub struct AutomatonConfig {
    pub seeding: Seeding,
    pub speed: f64,
    pub threshold: f64,
    pub palette: Palette,
}

impl AutomatonConfig {
    pub fn random() -> Self {
        Self {
            seeding: Seeding::Random,
            ..Self::default()
        }
    }
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            seeding: Seeding::default(),
            speed: DEFAULT_SPEED,
            threshold: DEFAULT_THRESHOLD,
            palette: Palette::default(),
        }
    }
}
