use super::{Cell, Position};
use crate::error::{MazeError, Result};
use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::slice::{ChunksExact, Iter};

/// A rectangular maze of `rows * cols` cells stored in row order.
///
/// A freshly constructed maze has every wall standing. Walls are only ever removed in pairs by
/// `carve`, so an open side on one cell always faces an open side on its neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
	cells: Vec<Cell>,
	rows: usize,
	cols: usize,
}

impl Maze {
	/// constructs a fully walled maze with the specified dimensions
	pub(crate) fn new(rows: usize, cols: usize) -> Self {
		let cells = (0..(rows * cols))
			.map(|i| Cell::new(Position::from_index(i, cols)))
			.collect();

		Self { cells, rows, cols }
	}

	/// returns the dimensions of the maze as a (rows, cols) tuple
	pub fn dimensions(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// returns the total number of cells in this maze (i.e. rows * cols)
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// the cell every traversal begins on
	pub fn start(&self) -> Position {
		Position::new(0, 0)
	}

	/// the goal is always the bottom right cell of the maze
	pub fn goal(&self) -> Position {
		Position::new(self.rows - 1, self.cols - 1)
	}

	pub fn contains(&self, pos: Position) -> bool {
		pos.row < self.rows && pos.col < self.cols
	}

	/// returns the cell at `row`, `col` or an `OutOfBounds` error
	pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell> {
		let pos = Position::new(row, col);
		if !self.contains(pos) {
			return Err(MazeError::OutOfBounds {
				row,
				col,
				rows: self.rows,
				cols: self.cols,
			});
		}
		Ok(&self.cells[pos.index(self.cols)])
	}

	pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
		let idx = self.checked_index(pos);
		&mut self.cells[idx]
	}

	fn checked_index(&self, pos: Position) -> usize {
		if !self.contains(pos) {
			panic!(
				"cell {} is outside the {}x{} maze",
				pos, self.rows, self.cols
			);
		}
		pos.index(self.cols)
	}

	/// returns the position adjacent to `pos` in the given direction, or None if `pos` is at the
	/// edge of the maze on that side. Walls are not taken into account.
	pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
		let (dr, dc) = direction.offset();
		let row = pos.row.checked_add_signed(dr)?;
		let col = pos.col.checked_add_signed(dc)?;
		let next = Position::new(row, col);
		if self.contains(next) {
			Some(next)
		} else {
			None
		}
	}

	/// returns the in-bounds neighbors of `pos` in `Direction::ALL` order, paired with the
	/// direction leading to them. Neighbors are NOT necessarily reachable, use `links()` for that
	pub fn neighbors(&self, pos: Position) -> Vec<(Direction, Position)> {
		Direction::ALL
			.iter()
			.filter_map(|&d| self.neighbor(pos, d).map(|n| (d, n)))
			.collect()
	}

	/// returns `true` if the wall on the `direction` side of `pos` has been carved away
	pub fn has_passage(&self, pos: Position, direction: Direction) -> bool {
		!self[pos].walls().has(direction)
	}

	/// returns the positions that can be reached from `pos` in a single step
	pub fn links(&self, pos: Position) -> Vec<Position> {
		self.neighbors(pos)
			.into_iter()
			.filter(|&(d, _)| self.has_passage(pos, d))
			.map(|(_, n)| n)
			.collect()
	}

	/// removes the wall between `pos` and its neighbor in `direction`, along with the neighbor's
	/// wall facing back. Returns the neighbor's position, or None if there is no such neighbor
	pub(crate) fn carve(&mut self, pos: Position, direction: Direction) -> Option<Position> {
		let next = self.neighbor(pos, direction)?;
		self.cell_mut(pos).walls_mut().remove(direction);
		self.cell_mut(next).walls_mut().remove(direction.opposite());
		Some(next)
	}

	/// number of open passages in the maze, each passage counted once
	pub fn passage_count(&self) -> usize {
		self.cells
			.iter()
			.map(|c| !c.walls().right as usize + !c.walls().down as usize)
			.sum()
	}

	/// returns the positions of cells that only have a single way in or out
	pub fn dead_ends(&self) -> Vec<Position> {
		self.cells
			.iter()
			.filter(|c| c.walls().count() == 3)
			.map(Cell::position)
			.collect()
	}

	pub fn explored_count(&self) -> usize {
		self.cells.iter().filter(|c| c.is_explored()).count()
	}

	/// returns an immutable iterator over the *rows* of this maze
	pub fn iter_rows(&self) -> ChunksExact<'_, Cell> {
		self.cells.chunks_exact(self.cols)
	}

	/// returns an immutable iterator over this maze's cells in row order
	pub fn iter_cells(&self) -> Iter<'_, Cell> {
		self.cells.iter()
	}

	/// pretty prints the maze, drawing explored cells as `.`, the goal as `G` and, if given, the
	/// player's position as `@`
	pub fn display_with_player(&self, player: Option<Position>) -> String {
		let goal = self.goal();
		let mut buf = String::new();
		// write the top wall of the maze
		buf.push_str(&format!("+{}\n", "---+".repeat(self.cols)));

		for row in self.iter_rows() {
			// top holds the cell bodies and right walls
			let mut top = String::from("|");
			// bottom holds the cell's southern wall and corners ('+') sign
			let mut bottom = String::from("+");

			for cell in row {
				let pos = cell.position();
				let body = if Some(pos) == player {
					" @ "
				} else if pos == goal {
					" G "
				} else if cell.is_explored() {
					" . "
				} else {
					"   "
				};
				top.push_str(body);
				top.push(if cell.walls().right { '|' } else { ' ' });

				bottom.push_str(if cell.walls().down { "---" } else { "   " });
				bottom.push('+');
			}

			buf.push_str(&top);
			buf.push('\n');
			buf.push_str(&bottom);
			buf.push('\n');
		}
		buf
	}
}

/// allows indexing into this maze by position. Panics if the position lies outside the maze
impl Index<Position> for Maze {
	type Output = Cell;

	fn index(&self, pos: Position) -> &Self::Output {
		&self.cells[self.checked_index(pos)]
	}
}

/// pretty prints this Maze as ASCII characters
impl Display for Maze {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.display_with_player(None))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	Up,
	Right,
	Down,
	Left,
}

impl Direction {
	pub const ALL: [Direction; 4] = [
		Direction::Up,
		Direction::Right,
		Direction::Down,
		Direction::Left,
	];

	/// unit step as a (row, col) offset
	pub fn offset(&self) -> (isize, isize) {
		match self {
			Direction::Up => (-1, 0),
			Direction::Right => (0, 1),
			Direction::Down => (1, 0),
			Direction::Left => (0, -1),
		}
	}

	pub fn opposite(&self) -> Direction {
		match self {
			Direction::Up => Direction::Down,
			Direction::Right => Direction::Left,
			Direction::Down => Direction::Up,
			Direction::Left => Direction::Right,
		}
	}
}
