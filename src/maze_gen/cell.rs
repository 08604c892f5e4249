use super::{Direction, Position};

/// The four walls surrounding a cell. `true` means the wall is standing and blocks passage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Walls {
	pub up: bool,
	pub right: bool,
	pub down: bool,
	pub left: bool,
}

impl Walls {
	/// returns `true` if the wall on the given side is present
	pub fn has(&self, direction: Direction) -> bool {
		match direction {
			Direction::Up => self.up,
			Direction::Right => self.right,
			Direction::Down => self.down,
			Direction::Left => self.left,
		}
	}

	pub(crate) fn remove(&mut self, direction: Direction) {
		match direction {
			Direction::Up => self.up = false,
			Direction::Right => self.right = false,
			Direction::Down => self.down = false,
			Direction::Left => self.left = false,
		}
	}

	/// number of walls that are still standing
	pub fn count(&self) -> usize {
		Direction::ALL.iter().filter(|&&d| self.has(d)).count()
	}
}

impl Default for Walls {
	fn default() -> Self {
		Self {
			up: true,
			right: true,
			down: true,
			left: true,
		}
	}
}

/// A single maze cell. Cells start fully walled; generation knocks walls down and traversal
/// marks the cells the player has stepped on as `explored`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
	position: Position,
	walls: Walls,
	explored: bool,
}

impl Cell {
	pub fn new(position: Position) -> Self {
		Cell {
			position,
			walls: Walls::default(),
			explored: false,
		}
	}

	pub fn position(&self) -> Position {
		self.position
	}

	pub fn walls(&self) -> &Walls {
		&self.walls
	}

	pub(crate) fn walls_mut(&mut self) -> &mut Walls {
		&mut self.walls
	}

	/// returns `true` if the player has stepped on this cell since the maze was handed over
	pub fn is_explored(&self) -> bool {
		self.explored
	}

	pub(crate) fn set_explored(&mut self) {
		self.explored = true;
	}
}
