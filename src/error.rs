use thiserror::Error;

use crate::Pos;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("incorrect probability value {0} for generation, must be within (0, 1)")]
    InvalidProbability(f64),

    #[error("position {pos} is outside of the {rows}x{cols} grid")]
    OutOfBounds { pos: Pos, rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid does not fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
