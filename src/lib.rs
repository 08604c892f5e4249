//! Perfect maze generation and a small movement model for walking a player from the top left
//! corner of a maze to its bottom right goal.
//!
//! ```
//! use maze_trek::{generate, Direction, MoveResult, TraversalEngine};
//!
//! let maze = generate(5, 5, Some(42)).unwrap();
//! assert_eq!(maze.passage_count(), 24);
//!
//! let mut engine = TraversalEngine::new(maze);
//! assert_eq!(engine.attempt_move(Direction::Up), MoveResult::Blocked);
//! ```

pub mod config;
pub mod error;
pub mod maze_gen;
pub mod traversal;

pub use {
	config::MazeConfig,
	error::{MazeError, Result},
	maze_gen::{generate, generate_with_rng, Cell, Direction, Maze, Position, Walls},
	traversal::{MoveResult, TraversalEngine},
};
