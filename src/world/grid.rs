use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::{pos, Cell, LifeError, Pos, Result};

/// A bounded rectangle of cells, stored row-major.
///
/// Every position with `0 <= row < rows` and `0 <= col < cols` holds exactly
/// one cell, and the dimensions are fixed for the lifetime of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Number of cells in a `rows x cols` grid, as long as every position stays addressable.
fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    const LIMIT: usize = isize::MAX as usize;
    rows.checked_mul(cols)
        .filter(|&count| rows <= LIMIT && cols <= LIMIT && count <= LIMIT)
        .ok_or(LifeError::TooLarge { rows, cols })
}

impl Grid {
    /// # Panics
    ///
    /// Panics when `rows * cols` overflows; use [`Grid::try_blank`] for untrusted dimensions.
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self::try_blank(rows, cols).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_blank(rows: usize, cols: usize) -> Result<Self> {
        let count = cell_count(rows, cols)?;
        Ok(Self::from_cells(rows, cols, vec![Cell::Dead; count]))
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Seeds a grid where every cell is alive with probability `prob`.
    ///
    /// `seed` - rng seed (if `None`, the rng is seeded from entropy)
    pub fn random(rows: usize, cols: usize, prob: f64, seed: Option<u64>) -> Result<Self> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::random_with(rows, cols, prob, &mut rng)
    }

    /// Same as [`Grid::random`], drawing one sample per cell from `rng` in row-major order.
    pub fn random_with<R: Rng>(rows: usize, cols: usize, prob: f64, rng: &mut R) -> Result<Self> {
        // also rejects NaN
        if !(prob > 0.0 && prob < 1.0) {
            return Err(LifeError::InvalidProbability(prob));
        }

        let blank = Self::try_blank(rows, cols)?;
        let actives: Vec<Pos> = blank
            .iter()
            .map(|(pos, _)| pos)
            .filter(|_| rng.gen::<f64>() < prob)
            .collect();
        Ok(blank.fill(actives))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn out_of_bounds(&self, pos: Pos) -> LifeError {
        LifeError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Reads a cell, treating positions outside the grid as absent.
    pub fn lookup(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|index| self.cells[index])
    }

    pub fn get(&self, pos: Pos) -> Result<Cell> {
        self.lookup(pos).ok_or_else(|| self.out_of_bounds(pos))
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<()> {
        let index = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Marks every listed position alive. Positions outside the grid are dropped.
    pub fn fill(self, positions: impl IntoIterator<Item = Pos>) -> Self {
        self.fill_with(positions, Cell::Alive)
    }

    pub fn fill_with(mut self, positions: impl IntoIterator<Item = Pos>, cell: Cell) -> Self {
        for pos in positions {
            if let Err(err) = self.set(pos, cell) {
                trace!(%err, "dropping position");
            }
        }
        self
    }

    /// Every cell with its position, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &cell)| (pos!((index / cols) as isize, (index % cols) as isize), cell))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
