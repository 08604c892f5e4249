use std::fmt::{Display, Formatter};

/// Position identifies a single cell of a maze by its `row` and `col`umn. Row 0 is the top of the
/// maze and column 0 its left edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
	pub row: usize,
	pub col: usize,
}

impl Position {
	pub const fn new(row: usize, col: usize) -> Self {
		Position { row, col }
	}

	/// returns the row-order index of this position in a maze with `cols` columns
	pub fn index(&self, cols: usize) -> usize {
		self.row * cols + self.col
	}

	/// the inverse of `index`
	pub fn from_index(idx: usize, cols: usize) -> Self {
		Position::new(idx / cols, idx % cols)
	}
}

impl From<(usize, usize)> for Position {
	fn from((row, col): (usize, usize)) -> Self {
		Position::new(row, col)
	}
}

impl Display for Position {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.row, self.col)
	}
}
