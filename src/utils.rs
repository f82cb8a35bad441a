use std::{fmt, ops::Add};

/// A grid coordinate, always in (row, col) order.
///
/// Components are signed so neighbor offsets can be added directly; anything
/// negative is simply outside every grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub row: isize,
    pub col: isize,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[test]
fn test_pos_arithmetic() {
    assert_eq!(pos!(2, 3) + pos!(-1, 1), pos!(1, 4));
    assert_eq!(pos!(0, 0) + pos!(-1, -1), pos!(-1, -1));
    assert_eq!(pos!(4, 7).to_string(), "(4, 7)");
}
