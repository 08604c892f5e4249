mod cell;
mod distances;
mod generator;
mod grid_maze;
mod position;

pub use {
	cell::{Cell, Walls},
	distances::Distances,
	generator::{generate, generate_from_config, generate_with_rng},
	grid_maze::{Direction, Maze},
	position::Position,
};
