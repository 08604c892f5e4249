use anyhow::{Context, Result};
use maze_trek::{maze_gen, Direction, MazeConfig, MoveResult, TraversalEngine};
use std::io::{self, BufRead, Write};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("maze_trek=info"));
	fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> Result<()> {
	init_logging();

	let config = match std::env::args().nth(1) {
		Some(path) => MazeConfig::load(&path).with_context(|| format!("loading config {}", path))?,
		None => MazeConfig::default(),
	};
	let maze = maze_gen::generate_from_config(&config).context("generating maze")?;
	let mut engine = TraversalEngine::new(maze);

	let stdin = io::stdin();
	let mut out = io::stdout();
	draw(&mut out, &engine)?;

	for line in stdin.lock().lines() {
		let line = line.context("reading input")?;
		let input = line.trim();
		if input == "q" {
			break;
		}

		if engine.goal_reached() {
			if input == "n" {
				// a fixed seed would hand back the same maze every round
				let next = MazeConfig { seed: None, ..config.clone() };
				engine.reset(maze_gen::generate_from_config(&next)?);
				draw(&mut out, &engine)?;
			} else {
				writeln!(out, "n = play again, q = quit")?;
			}
			continue;
		}

		let direction = match parse_direction(input) {
			Some(direction) => direction,
			None => {
				warn!(input, "unrecognized move");
				writeln!(out, "moves: w/a/s/d or up/left/down/right, q to quit")?;
				continue;
			}
		};

		match engine.attempt_move(direction) {
			MoveResult::Blocked => writeln!(out, "blocked")?,
			MoveResult::Moved => draw(&mut out, &engine)?,
			MoveResult::Won => {
				draw(&mut out, &engine)?;
				writeln!(
					out,
					"Congratulations, you won! Completed: {}. n = play again, q = quit",
					engine.completed_count()
				)?;
			}
		}
	}
	Ok(())
}

fn parse_direction(input: &str) -> Option<Direction> {
	match input {
		"w" | "up" => Some(Direction::Up),
		"d" | "right" => Some(Direction::Right),
		"s" | "down" => Some(Direction::Down),
		"a" | "left" => Some(Direction::Left),
		_ => None,
	}
}

fn draw(out: &mut impl Write, engine: &TraversalEngine) -> io::Result<()> {
	writeln!(out, "Completed: {}", engine.completed_count())?;
	write!(out, "{}", engine.maze().display_with_player(Some(engine.player())))?;
	out.flush()
}
