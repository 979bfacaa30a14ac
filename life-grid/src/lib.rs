#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod manager;
mod rules;
mod seed;
mod viewport;

pub use manager::GridManager;
pub use rules::{NeighborCounts, RuleSet};
pub use seed::{SeedPattern, Seeding};
pub use viewport::{COLUMNS, Viewport};

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::ops::Index;

/// Lattice position. Cells are stored column by column, so the flat index of
/// `(col, row)` is `row + col * rows`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub col: u32,
    pub row: u32,
}

impl Loc {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    pub fn grid_index(&self, columns: u32, rows: u32) -> Option<usize> {
        if self.col < columns && self.row < rows {
            Some(self.row as usize + self.col as usize * rows as usize)
        } else {
            None
        }
    }
}

/// Every lattice position in storage order.
pub fn lattice_locs(columns: u32, rows: u32) -> impl Iterator<Item = Loc> + Clone {
    (0..columns).flat_map(move |col| (0..rows).map(move |row| Loc::new(col, row)))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alive: bool,
}

impl Cell {
    pub fn at(loc: Loc, size: f64, alive: bool) -> Self {
        Self {
            x: loc.col as f64 * size,
            y: loc.row as f64 * size,
            size,
            alive,
        }
    }

    pub fn with_alive(&self, alive: bool) -> Self {
        Self { alive, ..*self }
    }
}

/// One immutable snapshot of the lattice. Stepping produces a new
/// `Generation`; nothing is ever modified in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    number: u64,
    columns: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl Generation {
    pub fn new<F>(columns: u32, rows: u32, cell_size: f64, mut is_alive: F) -> Self
    where
        F: FnMut(Loc) -> bool,
    {
        let cells = lattice_locs(columns, rows)
            .map(|loc| Cell::at(loc, cell_size, is_alive(loc)))
            .collect();
        Self {
            number: 0,
            columns,
            rows,
            cells,
        }
    }

    pub fn empty(columns: u32) -> Self {
        Self::new(columns, 0, 0.0, |_| false)
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    pub fn locs(&self) -> impl Iterator<Item = Loc> + Clone {
        lattice_locs(self.columns, self.rows)
    }

    pub fn cell(&self, loc: Loc) -> Option<&Cell> {
        loc.grid_index(self.columns, self.rows)
            .map(|index| &self.cells[index])
    }

    pub fn is_alive(&self, loc: Loc) -> bool {
        self.cell(loc).is_some_and(|cell| cell.alive)
    }

    pub fn neighbor_count(&self, loc: Loc) -> u32 {
        if self.is_empty() {
            return 0;
        }
        Neighborhood::new(self, loc).live_count()
    }

    pub fn next(&self, rules: &RuleSet) -> Generation {
        self.next_with(rules, |_| {})
    }

    /// Computes the successor generation, handing each current cell to
    /// `visit` in storage order before its next state is recorded.
    pub fn next_with<F>(&self, rules: &RuleSet, mut visit: F) -> Generation
    where
        F: FnMut(&Cell),
    {
        let cells = self
            .locs()
            .zip(self.cells.iter())
            .map(|(loc, cell)| {
                let alive = rules.next_state(cell.alive, self.neighbor_count(loc));
                visit(cell);
                cell.with_alive(alive)
            })
            .collect();
        Self {
            number: self.number + 1,
            columns: self.columns,
            rows: self.rows,
            cells,
        }
    }
}

impl Index<Loc> for Generation {
    type Output = Cell;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.col, loc.row))
    }
}

/// The 3x3 block around a cell, wrapped at the lattice edges.
pub struct Neighborhood<'a> {
    generation: &'a Generation,
    cols: [u32; 3],
    rows: [u32; 3],
}

impl<'a> Neighborhood<'a> {
    pub fn new(generation: &'a Generation, center: Loc) -> Self {
        let (col_left, col_right) = Self::adjacent_indexes(center.col, generation.columns());
        let (row_above, row_below) = Self::adjacent_indexes(center.row, generation.rows());
        Self {
            generation,
            cols: [col_left, center.col, col_right],
            rows: [row_above, center.row, row_below],
        }
    }

    pub fn cell(&self, col: u32, row: u32) -> &Cell {
        let loc = Loc::new(self.cols[col as usize], self.rows[row as usize]);
        &self.generation[loc]
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(&Cell),
    {
        self.for_cell(0, 0, &mut f);
        self.for_cell(1, 0, &mut f);
        self.for_cell(2, 0, &mut f);

        self.for_cell(0, 1, &mut f);
        self.for_cell(2, 1, &mut f);

        self.for_cell(0, 2, &mut f);
        self.for_cell(1, 2, &mut f);
        self.for_cell(2, 2, &mut f);
    }

    pub fn live_count(&self) -> u32 {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if neighbor.alive {
                result += 1;
            }
        });
        result
    }

    fn for_cell<F>(&self, col: u32, row: u32, f: &mut F)
    where
        F: FnMut(&Cell),
    {
        f(self.cell(col, row));
    }

    fn adjacent_indexes(cell_index: u32, max: u32) -> (u32, u32) {
        (
            Self::modulo(cell_index as i64 - 1, max),
            Self::modulo(cell_index as i64 + 1, max),
        )
    }

    fn modulo(val: i64, max: u32) -> u32 {
        val.rem_euclid(max as i64) as u32
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation_with(columns: u32, rows: u32, live: &[(u32, u32)]) -> Generation {
        Generation::new(columns, rows, 10.0, |loc| {
            live.contains(&(loc.col, loc.row))
        })
    }

    fn live_locs(generation: &Generation) -> Vec<(u32, u32)> {
        let mut result: Vec<_> = generation
            .locs()
            .filter(|&loc| generation.is_alive(loc))
            .map(|loc| (loc.col, loc.row))
            .collect();
        result.sort();
        result
    }

    #[test]
    fn grid_index_is_column_major() {
        assert_eq!(Loc::new(0, 0).grid_index(4, 3), Some(0));
        assert_eq!(Loc::new(0, 2).grid_index(4, 3), Some(2));
        assert_eq!(Loc::new(1, 0).grid_index(4, 3), Some(3));
        assert_eq!(Loc::new(3, 2).grid_index(4, 3), Some(11));
        assert_eq!(Loc::new(4, 0).grid_index(4, 3), None);
        assert_eq!(Loc::new(0, 3).grid_index(4, 3), None);
    }

    #[test]
    fn storage_order_matches_grid_index() {
        let generation = generation_with(5, 3, &[]);
        for (i, loc) in generation.locs().enumerate() {
            assert_eq!(loc.grid_index(5, 3), Some(i));
        }
        assert_eq!(generation.num_cells(), 15);
    }

    #[test]
    fn cell_geometry_follows_loc() {
        let generation = generation_with(4, 3, &[]);
        let cell = generation[Loc::new(2, 1)];
        assert_eq!((cell.x, cell.y, cell.size), (20.0, 10.0, 10.0));
    }

    #[test]
    fn neighbor_count_in_interior() {
        let generation = generation_with(5, 5, &[(1, 1), (2, 1), (3, 3), (2, 2)]);
        assert_eq!(generation.neighbor_count(Loc::new(2, 2)), 3);
        assert_eq!(generation.neighbor_count(Loc::new(0, 0)), 1);
    }

    #[test]
    fn neighbor_count_wraps_at_corners() {
        let generation = generation_with(6, 4, &[(5, 3)]);
        assert_eq!(generation.neighbor_count(Loc::new(0, 0)), 1);
        assert_eq!(generation.neighbor_count(Loc::new(4, 2)), 1);

        let generation = generation_with(6, 4, &[(0, 0)]);
        assert_eq!(generation.neighbor_count(Loc::new(5, 3)), 1);
        assert_eq!(generation.neighbor_count(Loc::new(5, 0)), 1);
        assert_eq!(generation.neighbor_count(Loc::new(0, 3)), 1);
    }

    #[test]
    fn neighbor_count_wraps_at_every_boundary_position() {
        let (columns, rows) = (7, 5);
        for loc in lattice_locs(columns, rows) {
            let on_boundary =
                loc.col == 0 || loc.row == 0 || loc.col == columns - 1 || loc.row == rows - 1;
            if !on_boundary {
                continue;
            }
            let opposite = Loc::new(
                (loc.col + columns - 1) % columns,
                (loc.row + rows - 1) % rows,
            );
            let generation = generation_with(columns, rows, &[(opposite.col, opposite.row)]);
            assert_eq!(generation.neighbor_count(loc), 1, "{:?}", loc);
        }
    }

    #[test]
    fn fully_alive_lattice_has_eight_neighbors_everywhere() {
        let generation = Generation::new(4, 4, 1.0, |_| true);
        for loc in generation.locs() {
            assert_eq!(generation.neighbor_count(loc), 8);
        }
    }

    #[test]
    fn empty_lattice_is_a_no_op() {
        let generation = Generation::empty(COLUMNS);
        assert!(generation.is_empty());
        assert_eq!(generation.neighbor_count(Loc::new(0, 0)), 0);
        let next = generation.next(&RuleSet::CONWAY);
        assert!(next.is_empty());
        assert_eq!(next.columns(), COLUMNS);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(3, 3), (3, 4), (4, 3), (4, 4)];
        let generation = generation_with(10, 10, &block);
        let next = generation.next(&RuleSet::CONWAY);
        assert_eq!(live_locs(&next), block.to_vec());
        assert_eq!(next.num_cells(), 100);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = vec![(3, 4), (4, 4), (5, 4)];
        let vertical = vec![(4, 3), (4, 4), (4, 5)];
        let generation = generation_with(10, 10, &horizontal);

        let once = generation.next(&RuleSet::CONWAY);
        assert_eq!(live_locs(&once), vertical);

        let twice = once.next(&RuleSet::CONWAY);
        assert_eq!(live_locs(&twice), horizontal);
    }

    #[test]
    fn next_uses_one_snapshot_and_keeps_geometry() {
        let generation = generation_with(8, 6, &[(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)]);
        let next = generation.next(&RuleSet::CONWAY);
        assert_eq!(
            live_locs(&next),
            vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
        );
        for (before, after) in generation.cells_iter().zip(next.cells_iter()) {
            assert_eq!((before.x, before.y, before.size), (after.x, after.y, after.size));
        }
    }

    #[test]
    fn next_visits_current_cells_in_storage_order() {
        let generation = generation_with(3, 2, &[(1, 0)]);
        let mut visited = vec![];
        generation.next_with(&RuleSet::CONWAY, |cell| visited.push(*cell));
        assert_eq!(visited, generation.cells_iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn generation_numbers_advance() {
        let generation = generation_with(4, 4, &[]);
        assert_eq!(generation.number(), 0);
        assert_eq!(generation.next(&RuleSet::CONWAY).next(&RuleSet::CONWAY).number(), 2);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = Random::from_seed(7);
        let mut b = Random::from_seed(7);
        for _ in 0..64 {
            assert_eq!(a.next_bool(0.5), b.next_bool(0.5));
        }
    }
}
