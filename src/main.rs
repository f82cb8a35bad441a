use std::{
    fs,
    io::{stdout, Write},
    path::Path,
    process::exit,
};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use utils::Pos;
mod utils;

pub use error::{LifeError, Result};
mod error;

pub use world::{Cell, Grid, PosSet};
pub mod world;

pub use sim::Sim;
mod sim;

pub use view::View;
mod view;

pub use config::Config;
mod config;

fn deserialize(str: &str) -> PosSet {
    let mut result = PosSet::default();
    let mut pos = pos!(0, 0);
    for c in str.chars() {
        match c {
            '#' | 'X' => {
                result.insert(pos);
                pos.col += 1
            }
            '\n' => pos = pos!(pos.row + 1, 0),
            _ => pos.col += 1,
        }
    }
    result
}

fn load_pattern(config: &Config, path: &Path) -> Result<Grid> {
    let content = fs::read_to_string(path)?;
    let actives = deserialize(&content);
    info!(path = %path.display(), cells = actives.len(), "loaded pattern");
    Ok(Grid::try_blank(config.rows, config.cols)?.fill(actives))
}

fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let initial = match &config.pattern {
        Some(path) => load_pattern(config, path)?,
        None => Grid::random(config.rows, config.cols, config.prob, config.seed)?,
    };

    let view = View::new(config.use_color());
    let mut sim = Sim::new(initial);
    view.display(sim.current(), out)?;

    for _ in 0..config.generations {
        let grid = sim.step();
        writeln!(out)?;
        view.display(grid, out)?;
    }

    info!(
        generations = sim.generation(),
        population = sim.current().population(),
        "simulation finished"
    );
    Ok(())
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    info!(
        rows = config.rows,
        cols = config.cols,
        prob = config.prob,
        seed = ?config.seed,
        "starting"
    );

    if let Err(err) = run(&config, &mut stdout().lock()) {
        error!(%err, "aborting");
        exit(1);
    }
}
