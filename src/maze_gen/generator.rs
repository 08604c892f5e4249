use super::{Direction, Maze, Position};
use crate::config::MazeConfig;
use crate::error::{MazeError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Generates a random maze of `rows * cols` cells. Passing a `seed` makes the result
/// reproducible, otherwise the generator is seeded from system entropy.
pub fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Result<Maze> {
	let mut rng = match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};
	generate_with_rng(rows, cols, &mut rng)
}

pub fn generate_from_config(config: &MazeConfig) -> Result<Maze> {
	generate(config.rows, config.cols, config.seed)
}

/// Generates a random maze using the recursive backtracker algorithm (a randomized depth first
/// search over the grid):
///
/// 1. start with every wall standing and pick a random cell, marking it visited
/// 2. look at the current cell's neighbors in a freshly shuffled order
/// 3. for the next neighbor that hasn't been visited yet, knock down the wall between the two,
///    mark it visited and continue from there
/// 4. once a cell runs out of neighbors, backtrack to the cell we came from and pick up with
///    its remaining neighbors
///
/// The walk uses an explicit stack instead of recursion so that large mazes can't overflow the
/// call stack. Every cell ends up visited exactly once, through exactly one carved passage, so
/// the result is a spanning tree of the grid.
pub fn generate_with_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Maze> {
	if rows == 0 || cols == 0 {
		return Err(MazeError::InvalidConfiguration { rows, cols });
	}

	let mut maze = Maze::new(rows, cols);
	// only meaningful while carving, dropped once the maze is handed out
	let mut visited = vec![false; maze.len()];

	let first = Position::from_index(rng.gen_range(0..maze.len()), cols);
	visited[first.index(cols)] = true;
	let mut stack = vec![Frame::enter(&maze, first, rng)];

	while let Some(frame) = stack.last_mut() {
		let cur = frame.pos;
		let direction = match frame.pending.pop() {
			Some(direction) => direction,
			None => {
				// out of neighbors, backtrack
				stack.pop();
				continue;
			}
		};

		let next = match maze.neighbor(cur, direction) {
			Some(next) if !visited[next.index(cols)] => next,
			_ => continue,
		};
		maze.carve(cur, direction);
		visited[next.index(cols)] = true;
		stack.push(Frame::enter(&maze, next, rng));
	}

	debug!(
		rows,
		cols,
		start = %first,
		passages = maze.passage_count(),
		"generated maze"
	);
	Ok(maze)
}

/// a cell being visited along with the directions it has yet to try
struct Frame {
	pos: Position,
	pending: Vec<Direction>,
}

impl Frame {
	fn enter<R: Rng>(maze: &Maze, pos: Position, rng: &mut R) -> Self {
		let mut pending: Vec<_> = maze.neighbors(pos).into_iter().map(|(d, _)| d).collect();
		pending.shuffle(rng);
		// popped from the back, so reverse to try them in shuffled order
		pending.reverse();
		Frame { pos, pending }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SIZES: [(usize, usize); 8] = [
		(1, 1),
		(1, 2),
		(2, 1),
		(1, 7),
		(6, 1),
		(2, 2),
		(5, 5),
		(10, 13),
	];

	fn sample() -> impl Iterator<Item = Maze> {
		SIZES.into_iter().flat_map(|(rows, cols)| {
			(0..12u64).map(move |seed| generate(rows, cols, Some(seed)).unwrap())
		})
	}

	#[test]
	fn zero_dimensions_are_rejected() {
		assert!(matches!(
			generate(0, 5, None),
			Err(MazeError::InvalidConfiguration { rows: 0, cols: 5 })
		));
		assert!(matches!(
			generate(5, 0, Some(1)),
			Err(MazeError::InvalidConfiguration { rows: 5, cols: 0 })
		));
		assert!(generate(0, 0, None).is_err());
	}

	#[test]
	fn passages_form_a_spanning_tree() {
		for maze in sample() {
			assert_eq!(maze.passage_count(), maze.len() - 1, "\n{}", maze);
		}
	}

	#[test]
	fn every_cell_is_reachable() {
		for maze in sample() {
			for root in [maze.start(), maze.goal()] {
				assert_eq!(maze.distances(root).len(), maze.len(), "\n{}", maze);
			}
		}
	}

	#[test]
	fn walls_are_symmetric() {
		for maze in sample() {
			for cell in maze.iter_cells() {
				let pos = cell.position();
				for (direction, neighbor) in maze.neighbors(pos) {
					assert_eq!(
						maze.has_passage(pos, direction),
						maze.has_passage(neighbor, direction.opposite()),
						"{} -> {}",
						pos,
						neighbor
					);
				}
			}
		}
	}

	#[test]
	fn boundary_walls_stay_up() {
		for maze in sample() {
			let (rows, cols) = maze.dimensions();
			for col in 0..cols {
				assert!(maze.cell_at(0, col).unwrap().walls().up);
				assert!(maze.cell_at(rows - 1, col).unwrap().walls().down);
			}
			for row in 0..rows {
				assert!(maze.cell_at(row, 0).unwrap().walls().left);
				assert!(maze.cell_at(row, cols - 1).unwrap().walls().right);
			}
		}
	}

	#[test]
	fn no_cell_is_left_fully_walled() {
		for maze in sample().filter(|m| m.len() > 1) {
			assert!(maze.iter_cells().all(|c| c.walls().count() < 4));
		}
	}

	#[test]
	fn single_cell_maze_keeps_all_walls() {
		let maze = generate(1, 1, None).unwrap();
		assert_eq!(maze.len(), 1);
		assert_eq!(maze.start(), maze.goal());
		let cell = maze.cell_at(0, 0).unwrap();
		assert_eq!(cell.walls().count(), 4);
		assert_eq!(maze.passage_count(), 0);
	}

	#[test]
	fn same_seed_same_maze() {
		let a = generate(5, 5, Some(42)).unwrap();
		let b = generate(5, 5, Some(42)).unwrap();
		assert_eq!(a, b);
		assert_eq!(a.to_string(), b.to_string());
	}

	#[test]
	fn seeds_produce_different_mazes() {
		let first = generate(8, 8, Some(0)).unwrap();
		assert!((1..20u64).any(|seed| generate(8, 8, Some(seed)).unwrap() != first));
	}

	#[test]
	fn generated_cells_are_unexplored() {
		for maze in sample() {
			assert_eq!(maze.explored_count(), 0);
		}
	}

	#[test]
	fn config_drives_generation() {
		let config = MazeConfig {
			rows: 3,
			cols: 4,
			seed: Some(7),
		};
		let maze = generate_from_config(&config).unwrap();
		assert_eq!(maze.dimensions(), (3, 4));
		assert_eq!(maze, generate(3, 4, Some(7)).unwrap());
	}

	#[test]
	fn accepts_an_injected_rng() {
		let mut rng = StdRng::seed_from_u64(3);
		let maze = generate_with_rng(4, 6, &mut rng).unwrap();
		assert_eq!(maze.passage_count(), 23);
		// corridor mazes have only one possible layout
		let corridor = generate_with_rng(1, 4, &mut rng).unwrap();
		for col in 0..3 {
			assert!(corridor.has_passage(Position::new(0, col), Direction::Right));
		}
	}
}
