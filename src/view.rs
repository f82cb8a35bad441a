use std::io::{self, Write};

use termion::color;

use crate::{Cell, Grid};

pub use canvas::Canvas;
mod canvas;

pub const ALIVE_TOKEN: &str = "X";
pub const DEAD_TOKEN: &str = ".";

/// Text renderer for grids: one line per row, tokens separated by spaces.
#[derive(Debug, Clone, Copy)]
pub struct View {
    color: bool,
}

impl View {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn alive_token(&self) -> String {
        if self.color {
            let green = color::Fg(color::Green);
            let reset = color::Fg(color::Reset);
            format!("{green}{ALIVE_TOKEN}{reset}")
        } else {
            ALIVE_TOKEN.to_string()
        }
    }

    pub fn canvas(&self, grid: &Grid) -> Canvas {
        let alive = self.alive_token();
        let mut canvas = Canvas::new(grid.rows(), grid.cols(), DEAD_TOKEN);
        canvas.layer(|pos| match grid.lookup(pos) {
            Some(Cell::Alive) => Some(alive.clone()),
            _ => None,
        });
        canvas
    }

    pub fn render(&self, grid: &Grid) -> String {
        self.canvas(grid).to_text()
    }

    pub fn display(&self, grid: &Grid, out: &mut impl Write) -> io::Result<()> {
        self.canvas(grid).display(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pos, Pos};

    #[test]
    fn renders_plain_rows() {
        let grid = Grid::blank(2, 3).fill([pos!(0, 0), pos!(1, 2)]);
        assert_eq!(View::new(false).render(&grid), "X . .\n. . X\n");
    }

    #[test]
    fn renders_empty_grid() {
        assert_eq!(View::new(false).render(&Grid::blank(0, 0)), "");
        assert_eq!(View::new(false).render(&Grid::blank(2, 0)), "\n\n");
    }

    #[test]
    fn colors_only_alive_cells() {
        let grid = Grid::blank(1, 2).fill([pos!(0, 1)]);
        let text = View::new(true).render(&grid);
        assert!(text.starts_with(". "));
        assert!(text.contains(&format!("{}X", color::Fg(color::Green))));
    }
}
