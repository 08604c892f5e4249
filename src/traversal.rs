use crate::maze_gen::{Direction, Maze, Position};
use tracing::{info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
	/// a wall is in the way, or the maze is already solved
	Blocked,
	Moved,
	/// the move landed on the goal
	Won,
}

/// Walks a player through a maze. The engine owns the maze it is given; walls are only ever
/// read, the sole mutation being the `explored` mark left on each cell the player steps on.
#[derive(Debug)]
pub struct TraversalEngine {
	maze: Maze,
	player: Position,
	goal_reached: bool,
	completed_count: u32,
	moves: u32,
}

impl TraversalEngine {
	pub fn new(maze: Maze) -> Self {
		let start = maze.start();
		let mut engine = Self {
			player: start,
			maze,
			goal_reached: false,
			completed_count: 0,
			moves: 0,
		};
		engine.enter(start);
		engine
	}

	/// tries to step the player one cell in `direction`
	pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
		if self.goal_reached {
			return MoveResult::Blocked;
		}
		// boundary cells always keep their outer walls, so no bounds check is needed before
		// stepping through an open side
		if !self.maze.has_passage(self.player, direction) {
			trace!(player = %self.player, ?direction, "move blocked");
			return MoveResult::Blocked;
		}
		let next = match self.maze.neighbor(self.player, direction) {
			Some(next) => next,
			None => return MoveResult::Blocked,
		};

		self.enter(next);
		self.moves += 1;
		if self.player == self.goal() {
			self.goal_reached = true;
			self.completed_count += 1;
			info!(
				moves = self.moves,
				completed = self.completed_count,
				"goal reached"
			);
			return MoveResult::Won;
		}
		MoveResult::Moved
	}

	/// swaps in a new maze and puts the player back at the start. The completed counter is kept
	pub fn reset(&mut self, maze: Maze) {
		self.maze = maze;
		self.goal_reached = false;
		self.moves = 0;
		self.enter(self.maze.start());
	}

	fn enter(&mut self, pos: Position) {
		self.player = pos;
		self.maze.cell_mut(pos).set_explored();
	}

	pub fn maze(&self) -> &Maze {
		&self.maze
	}

	pub fn player(&self) -> Position {
		self.player
	}

	pub fn goal(&self) -> Position {
		self.maze.goal()
	}

	pub fn goal_reached(&self) -> bool {
		self.goal_reached
	}

	/// how many mazes have been solved over the lifetime of this engine
	pub fn completed_count(&self) -> u32 {
		self.completed_count
	}

	/// successful moves made in the current maze
	pub fn moves(&self) -> u32 {
		self.moves
	}
}
