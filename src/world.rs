use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::Pos;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

/// A loose collection of positions, as produced by seeding or pattern files.
pub type PosSet = HashSet<Pos, MetroBuildHasher>;

pub use grid::Grid;
mod grid;
