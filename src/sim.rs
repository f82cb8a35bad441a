use tracing::debug;

use crate::{pos, Cell, Grid, Pos};

/// The 8 positions surrounding `pos`. Some may lie outside any grid.
pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    (-1..=1)
        .flat_map(|row| (-1..=1).map(move |col| pos!(row, col)))
        .filter(|&offset| offset != pos!(0, 0))
        .map(move |offset| pos + offset)
}

/// Live cells around `pos`; neighbors outside the grid are not counted.
pub fn count_live_neighbors(grid: &Grid, pos: Pos) -> usize {
    neighbors(pos)
        .filter_map(|pos| grid.lookup(pos))
        .filter(|cell| cell.is_alive())
        .count()
}

pub fn next_state(current: Cell, live_neighbors: usize) -> Cell {
    match (current, live_neighbors) {
        (_, count) if count <= 1 => Cell::Dead, // underpopulation
        (_, count) if count >= 4 => Cell::Dead, // overpopulation
        (_, 3) => Cell::Alive,
        (Cell::Alive, 2) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Computes the next generation. Every cell is decided from `grid` alone,
/// which is only read, so all cells update simultaneously.
pub fn advance(grid: &Grid) -> Grid {
    let cells = grid
        .iter()
        .map(|(pos, cell)| next_state(cell, count_live_neighbors(grid, pos)))
        .collect();
    Grid::from_cells(grid.rows(), grid.cols(), cells)
}

/// Drives a grid through successive generations, keeping only the latest one.
#[derive(Debug)]
pub struct Sim {
    current: Grid,
    generation: usize,
}

impl Sim {
    pub fn new(grid: Grid) -> Self {
        Self {
            current: grid,
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn step(&mut self) -> &Grid {
        self.current = advance(&self.current);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.current.population(),
            "advanced"
        );
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn full(rows: usize, cols: usize) -> Grid {
        let positions: Vec<Pos> = Grid::blank(rows, cols).iter().map(|(pos, _)| pos).collect();
        Grid::blank(rows, cols).fill(positions)
    }

    fn actives(grid: &Grid) -> Vec<Pos> {
        grid.iter()
            .filter_map(|(pos, cell)| cell.is_alive().then_some(pos))
            .collect()
    }

    #[test]
    fn neighbors_exclude_self() {
        let around: Vec<Pos> = neighbors(pos!(5, 5)).collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&pos!(5, 5)));
        assert!(around.contains(&pos!(4, 4)));
        assert!(around.contains(&pos!(6, 6)));
    }

    #[test]
    fn full_grid_neighbor_counts() {
        let grid = full(5, 5);
        assert_eq!(count_live_neighbors(&grid, pos!(0, 0)), 3);
        assert_eq!(count_live_neighbors(&grid, pos!(4, 4)), 3);
        assert_eq!(count_live_neighbors(&grid, pos!(0, 2)), 5);
        assert_eq!(count_live_neighbors(&grid, pos!(2, 4)), 5);
        assert_eq!(count_live_neighbors(&grid, pos!(2, 2)), 8);
    }

    #[test]
    fn neighbor_count_ignores_self() {
        let grid = Grid::blank(3, 3).fill([pos!(1, 1)]);
        assert_eq!(count_live_neighbors(&grid, pos!(1, 1)), 0);
        assert_eq!(count_live_neighbors(&grid, pos!(0, 0)), 1);
    }

    #[test]
    fn transition_table() {
        use Cell::*;
        let expected = [Dead, Dead, Alive, Alive, Dead, Dead, Dead, Dead, Dead];
        for (count, &state) in expected.iter().enumerate() {
            assert_eq!(next_state(Alive, count), state, "alive with {count}");
        }
        let expected = [Dead, Dead, Dead, Alive, Dead, Dead, Dead, Dead, Dead];
        for (count, &state) in expected.iter().enumerate() {
            assert_eq!(next_state(Dead, count), state, "dead with {count}");
        }
    }

    #[test]
    fn lonely_cell_dies() {
        let grid = Grid::blank(3, 3).fill([pos!(1, 1)]);
        let next = advance(&grid);
        assert_eq!(next, Grid::blank(3, 3));
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = Grid::blank(5, 5).fill([pos!(2, 1), pos!(2, 2), pos!(2, 3)]);
        let vertical = Grid::blank(5, 5).fill([pos!(1, 2), pos!(2, 2), pos!(3, 2)]);

        let next = advance(&horizontal);
        assert_eq!(actives(&next), vec![pos!(1, 2), pos!(2, 2), pos!(3, 2)]);
        assert_eq!(next, vertical);
        assert_eq!(advance(&next), horizontal);
    }

    #[test]
    fn block_is_stable() {
        let block = Grid::blank(4, 4).fill([pos!(1, 1), pos!(1, 2), pos!(2, 1), pos!(2, 2)]);
        assert_eq!(advance(&block), block);
    }

    #[test]
    fn corner_block_survives_without_wraparound() {
        let block = Grid::blank(4, 4).fill([pos!(0, 0), pos!(0, 1), pos!(1, 0), pos!(1, 1)]);
        assert_eq!(advance(&block), block);
    }

    #[test]
    fn dead_grids_stay_dead() {
        for (rows, cols) in [(0, 0), (0, 4), (4, 0), (1, 1), (7, 3)] {
            let grid = Grid::blank(rows, cols);
            assert_eq!(advance(&grid), grid);
        }
    }

    #[test]
    fn sim_counts_generations() {
        let grid = Grid::blank(5, 5).fill([pos!(2, 1), pos!(2, 2), pos!(2, 3)]);
        let mut sim = Sim::new(grid.clone());
        assert_eq!(sim.generation(), 0);
        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.current(), &grid);
    }

    proptest! {
        #[test]
        fn advance_preserves_dimensions(rows in 0usize..16, cols in 0usize..16, seed: u64) {
            let grid = Grid::random(rows, cols, 0.4, Some(seed)).unwrap();
            let next = advance(&grid);
            prop_assert_eq!(next.rows(), rows);
            prop_assert_eq!(next.cols(), cols);
        }

        #[test]
        fn neighbor_count_is_bounded(rows in 1usize..10, cols in 1usize..10, seed: u64) {
            let grid = Grid::random(rows, cols, 0.6, Some(seed)).unwrap();
            for (pos, _) in grid.iter() {
                prop_assert!(count_live_neighbors(&grid, pos) <= 8);
            }
        }
    }
}
