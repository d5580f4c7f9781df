/// A step on the board: a signed change in row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub row: i8,
    pub col: i8,
}

impl Delta {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// The 8 king steps around a square.
pub const KING_STEPS: [Delta; 8] = [
    Delta { row: -1, col: -1 },
    Delta { row: -1, col: 0 },
    Delta { row: -1, col: 1 },
    Delta { row: 0, col: -1 },
    Delta { row: 0, col: 1 },
    Delta { row: 1, col: -1 },
    Delta { row: 1, col: 0 },
    Delta { row: 1, col: 1 },
];
