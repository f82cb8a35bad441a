use std::{io::stdout, path::PathBuf};

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}

/// Simulates the game of life on a bounded grid and prints every generation.
#[derive(Parser, Debug, Clone)]
#[command(name = "lifegame")]
pub struct Config {
    /// Number of rows
    #[arg(long, default_value_t = 15)]
    pub rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 15)]
    pub cols: usize,

    /// Probability of population. Must be greater than 0 and less than 1.
    #[arg(long, default_value_t = 0.25, allow_negative_numbers = true)]
    pub prob: f64,

    /// Generations to compute after the initial one
    #[arg(long, default_value_t = 25)]
    pub generations: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seed from a pattern file ('#' or 'X' marks a live cell) instead of randomly
    #[arg(long, conflicts_with_all = ["prob", "seed"])]
    pub pattern: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Config {
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Auto => termion::is_tty(&stdout()),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
