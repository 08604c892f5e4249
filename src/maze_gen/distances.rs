use super::{Maze, Position};
use std::collections::{HashMap, VecDeque};
use std::ops::Index;

/// Distances holds how many steps every reachable cell of a Maze is from a `root` cell.
#[derive(Debug)]
pub struct Distances {
	root: Position,
	// steps from each reached cell back to `root`
	cells: HashMap<Position, usize>,
}

impl Distances {
	/// returns a new Distances with only the `root` recorded, at a distance of 0 from itself
	pub fn new(root: Position) -> Self {
		let mut cells = HashMap::new();
		cells.insert(root, 0);

		Self { root, cells }
	}

	pub fn root(&self) -> Position {
		self.root
	}

	/// returns the distance of `pos` from the root, or `None` if it was never reached
	pub fn get(&self, pos: &Position) -> Option<&usize> {
		self.cells.get(pos)
	}

	pub fn insert(&mut self, pos: Position, distance: usize) {
		self.cells.insert(pos, distance);
	}

	/// number of cells reached, the root included
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// returns the cell farthest from the root along with its distance
	pub fn max(&self) -> (Position, usize) {
		self.cells
			.iter()
			.max_by_key(|&(_, d)| *d)
			.map(|(&p, &d)| (p, d))
			.unwrap_or((self.root, 0))
	}
}

impl Index<Position> for Distances {
	type Output = usize;

	fn index(&self, pos: Position) -> &Self::Output {
		&self.cells[&pos]
	}
}

impl Maze {
	/// flood fills the maze outward from `root`, following open passages only.
	/// Cells walled off from `root` will be missing from the result
	pub fn distances(&self, root: Position) -> Distances {
		let mut distances = Distances::new(root);
		// pending holds cells whose links still need to be followed
		let mut pending = VecDeque::from(vec![root]);

		while let Some(cur) = pending.pop_front() {
			let next_distance = distances[cur] + 1;
			for link in self.links(cur) {
				if distances.get(&link).is_none() {
					distances.insert(link, next_distance);
					pending.push_back(link);
				}
			}
		}
		distances
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::maze_gen::Direction;

	#[test]
	fn walled_maze_only_reaches_root() {
		let maze = Maze::new(3, 3);
		let distances = maze.distances(Position::new(1, 1));
		assert_eq!(distances.len(), 1);
		assert_eq!(distances.get(&Position::new(1, 1)), Some(&0));
		assert_eq!(distances.get(&Position::new(0, 0)), None);
	}

	#[test]
	fn follows_a_corridor() {
		let mut maze = Maze::new(2, 2);
		maze.carve(Position::new(0, 0), Direction::Right);
		maze.carve(Position::new(0, 1), Direction::Down);
		maze.carve(Position::new(1, 1), Direction::Left);
		let distances = maze.distances(Position::new(0, 0));
		assert_eq!(distances.len(), 4);
		assert_eq!(distances[Position::new(0, 1)], 1);
		assert_eq!(distances[Position::new(1, 1)], 2);
		assert_eq!(distances[Position::new(1, 0)], 3);
		assert_eq!(distances.max(), (Position::new(1, 0), 3));
		assert_eq!(distances.root(), Position::new(0, 0));
	}
}
