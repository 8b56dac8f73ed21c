//! Bonus grid representation
//!
//! Each board cell carries one bonus tag. The JSON artifact uses the original
//! two-character codes: `00` plain, `x2`/`x3` letter multipliers, `X2`/`X3`
//! word multipliers, `ST` the start cell.

use std::fmt;

/// Bonus carried by a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bonus {
    #[default]
    None,
    LetterDouble,
    LetterTriple,
    WordDouble,
    WordTriple,
    Start,
}

impl Bonus {
    /// Parse a two-character bonus tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "00" => Some(Self::None),
            "x2" => Some(Self::LetterDouble),
            "x3" => Some(Self::LetterTriple),
            "X2" => Some(Self::WordDouble),
            "X3" => Some(Self::WordTriple),
            "ST" => Some(Self::Start),
            _ => None,
        }
    }

    /// The two-character tag for this bonus
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "00",
            Self::LetterDouble => "x2",
            Self::LetterTriple => "x3",
            Self::WordDouble => "X2",
            Self::WordTriple => "X3",
            Self::Start => "ST",
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// N×N grid of bonus tags, immutable after load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusGrid {
    size: usize,
    cells: Vec<Bonus>,
}

/// Error type for malformed bonus grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BonusGridError {
    Empty,
    NotSquare { row: usize, len: usize, size: usize },
    UnknownTag { row: usize, col: usize, tag: String },
}

impl fmt::Display for BonusGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Bonus grid must have at least one row"),
            Self::NotSquare { row, len, size } => {
                write!(f, "Bonus grid row {row} has {len} cells, expected {size}")
            }
            Self::UnknownTag { row, col, tag } => {
                write!(f, "Bonus grid cell ({row}, {col}) holds unknown tag {tag:?}")
            }
        }
    }
}

impl std::error::Error for BonusGridError {}

impl BonusGrid {
    /// Build a grid from rows of bonus tags
    ///
    /// # Errors
    /// Returns `BonusGridError` if the grid is empty, not square, or a cell
    /// holds an unknown tag.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, BonusGridError> {
        let size = rows.len();
        if size == 0 {
            return Err(BonusGridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BonusGridError::NotSquare {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
            for (c, tag) in row.iter().enumerate() {
                let bonus = Bonus::from_tag(tag).ok_or_else(|| BonusGridError::UnknownTag {
                    row: r,
                    col: c,
                    tag: tag.clone(),
                })?;
                cells.push(bonus);
            }
        }

        Ok(Self { size, cells })
    }

    /// A grid of the given dimension with no bonuses anywhere
    #[must_use]
    pub fn plain(size: usize) -> Self {
        Self {
            size,
            cells: vec![Bonus::None; size * size],
        }
    }

    /// Grid dimension N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Bonus at a cell
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range
    #[inline]
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Bonus {
        assert!(row < self.size && col < self.size, "cell out of range");
        self.cells[row * self.size + col]
    }

    /// The transposed grid, for column-oriented scoring
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut cells = vec![Bonus::None; self.size * self.size];
        for r in 0..self.size {
            for c in 0..self.size {
                cells[c * self.size + r] = self.cells[r * self.size + c];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Locate the start cell (`ST`), if the layout declares one
    #[must_use]
    pub fn start_cell(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&b| b == Bonus::Start)
            .map(|i| (i / self.size, i % self.size))
    }

    /// Distance from the board center to the nearest letter-double (`x2`)
    /// cell in the given row
    ///
    /// The opening-move solver steers a high-value letter onto this cell.
    /// Returns `None` when the row carries no `x2` bonus.
    #[must_use]
    pub fn letter_double_distance(&self, row: usize) -> Option<usize> {
        let center = self.size / 2;
        (0..self.size)
            .filter(|&c| self.at(row, c) == Bonus::LetterDouble)
            .map(|c| center.abs_diff(c))
            .min()
    }
}
