use log::debug;

use crate::{Generation, Loc, Random, Seeding, Viewport, COLUMNS};

/// Owns the viewport-derived lattice and its current generation.
#[derive(Debug)]
pub struct GridManager {
    viewport: Viewport,
    generation: Generation,
    seeding: Seeding,
    rand: Random,
}

impl GridManager {
    pub fn new(seeding: Seeding, rand: Random) -> Self {
        Self {
            viewport: Viewport::default(),
            generation: Generation::empty(COLUMNS),
            seeding,
            rand,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    pub fn seeding(&self) -> &Seeding {
        &self.seeding
    }

    /// Rebuilds the lattice for a new viewport and reseeds every cell. No
    /// life-state survives a reconfigure.
    pub fn configure(&mut self, width: f64, height: f64, pixel_ratio: f64) -> &Viewport {
        let viewport = Viewport::new(width, height, pixel_ratio);
        let seeding = &self.seeding;
        let rand = &mut self.rand;
        self.generation = Generation::new(
            viewport.columns,
            viewport.rows,
            viewport.cell_size,
            |loc| seeding.is_alive(loc, rand),
        );
        self.viewport = viewport;
        debug!(
            "Configured {}x{} lattice, cell size {}, buffer {:?}",
            viewport.columns,
            viewport.rows,
            viewport.cell_size,
            viewport.buffer_size()
        );
        &self.viewport
    }

    pub fn neighbor_count(&self, col: u32, row: u32) -> u32 {
        self.generation.neighbor_count(Loc::new(col, row))
    }

    /// Replaces the current generation with its successor.
    pub fn commit(&mut self, next: Generation) {
        assert!(
            next.columns() == self.generation.columns() && next.rows() == self.generation.rows(),
            "committed generation is {}x{}, lattice is {}x{}",
            next.columns(),
            next.rows(),
            self.generation.columns(),
            self.generation.rows()
        );
        self.generation = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RuleSet, SeedPattern};

    fn fixed_manager() -> GridManager {
        GridManager::new(Seeding::Fixed(SeedPattern::glider()), Random::from_seed(1))
    }

    fn live_locs(generation: &Generation) -> Vec<Loc> {
        generation
            .locs()
            .filter(|&loc| generation.is_alive(loc))
            .collect()
    }

    #[test]
    fn starts_empty() {
        let manager = fixed_manager();
        assert!(manager.generation().is_empty());
        assert_eq!(manager.neighbor_count(0, 0), 0);
    }

    #[test]
    fn configure_sizes_lattice() {
        let mut manager = fixed_manager();
        let viewport = *manager.configure(800.0, 600.0, 2.0);
        assert_eq!((viewport.columns, viewport.rows), (40, 30));
        assert_eq!(manager.generation().num_cells(), 40 * 30);
        assert_eq!(manager.generation().number(), 0);
    }

    #[test]
    fn fixed_seeding_places_pattern_by_column_and_row() {
        let mut manager = fixed_manager();
        manager.configure(400.0, 300.0, 1.0);
        assert_eq!(
            live_locs(manager.generation()),
            vec![
                Loc::new(1, 1),
                Loc::new(2, 2),
                Loc::new(2, 3),
                Loc::new(3, 1),
                Loc::new(3, 2),
            ]
        );
        assert_eq!(manager.neighbor_count(2, 2), 4);
    }

    #[test]
    fn fixed_seeding_is_deterministic() {
        let mut a = GridManager::new(Seeding::default(), Random::from_seed(1));
        let mut b = GridManager::new(Seeding::default(), Random::from_seed(2));
        a.configure(1024.0, 768.0, 1.25);
        b.configure(1024.0, 768.0, 1.25);
        assert_eq!(a.generation(), b.generation());
    }

    #[test]
    fn pattern_outside_lattice_is_ignored() {
        let mut manager = fixed_manager();
        // Two rows only.
        manager.configure(400.0, 25.0, 1.0);
        assert_eq!(manager.viewport().rows, 2);
        assert_eq!(live_locs(manager.generation()), vec![Loc::new(1, 1), Loc::new(3, 1)]);
    }

    #[test]
    fn random_seeding_is_roughly_even() {
        let mut manager = GridManager::new(Seeding::Random, Random::from_seed(42));
        manager.configure(800.0, 800.0, 1.0);
        let population = manager.generation().population();
        assert_eq!(manager.generation().num_cells(), 1600);
        assert!(population > 600 && population < 1000, "{population}");
    }

    #[test]
    fn resize_discards_prior_life() {
        let mut manager = fixed_manager();
        manager.configure(400.0, 400.0, 1.0);
        let crowded = Generation::new(40, 40, 10.0, |_| true);
        manager.commit(crowded);
        assert_eq!(manager.generation().population(), 1600);

        manager.configure(400.0, 400.0, 1.0);
        assert_eq!(manager.generation().population(), 5);

        manager.configure(600.0, 300.0, 1.0);
        assert_eq!(manager.generation().num_cells(), 40 * 20);
        assert_eq!(manager.generation().population(), 5);
    }

    #[test]
    fn zero_height_viewport_gives_empty_lattice() {
        let mut manager = fixed_manager();
        manager.configure(800.0, 0.0, 1.0);
        assert!(manager.generation().is_empty());
        let next = manager.generation().next(&RuleSet::CONWAY);
        manager.commit(next);
        assert!(manager.generation().is_empty());
    }

    #[test]
    fn commit_keeps_cell_count() {
        let mut manager = fixed_manager();
        manager.configure(400.0, 300.0, 1.0);
        for _ in 0..5 {
            let next = manager.generation().next(&RuleSet::CONWAY);
            manager.commit(next);
            assert_eq!(manager.generation().num_cells(), 40 * 30);
        }
        assert_eq!(manager.generation().number(), 5);
    }

    #[test]
    #[should_panic(expected = "committed generation")]
    fn commit_rejects_mismatched_lattice() {
        let mut manager = fixed_manager();
        manager.configure(400.0, 300.0, 1.0);
        manager.commit(Generation::new(40, 3, 10.0, |_| false));
    }
}
