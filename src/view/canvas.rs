use std::io::{self, Write};

use crate::{pos, Pos};

/// A rectangle of printable tokens, one line per row.
pub struct Canvas {
    lines: Vec<Vec<String>>,
    rows: usize,
    cols: usize,
}

impl Canvas {
    pub fn new(rows: usize, cols: usize, background: &str) -> Self {
        let lines = (0..rows)
            .map(|_| (0..cols).map(|_| background.to_string()).collect())
            .collect();
        Self { lines, rows, cols }
    }

    /// Paints every position for which `f` returns a token.
    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<String>) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if let Some(token) = f(pos!(row as isize, col as isize)) {
                    self.lines[row][col] = token;
                }
            }
        }
    }

    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.join(" ") + "\n")
            .collect()
    }

    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(self.to_text().as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_paints_tokens() {
        let mut canvas = Canvas::new(2, 3, ".");
        canvas.layer(|pos| (pos.row == pos.col).then(|| "X".to_string()));
        assert_eq!(canvas.to_text(), "X . .\n. X .\n");
    }

    #[test]
    fn display_writes_text() {
        let canvas = Canvas::new(1, 2, "o");
        let mut out = Vec::new();
        canvas.display(&mut out).unwrap();
        assert_eq!(out, b"o o\n");
    }
}
