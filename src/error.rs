use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
	#[error("invalid maze dimensions {rows}x{cols}: both must be at least 1")]
	InvalidConfiguration { rows: usize, cols: usize },

	#[error("cell ({row}, {col}) is outside the {rows}x{cols} maze")]
	OutOfBounds {
		row: usize,
		col: usize,
		rows: usize,
		cols: usize,
	},

	#[error("malformed maze configuration: {source}")]
	Config {
		#[from]
		source: serde_yaml::Error,
	},

	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

pub type Result<T> = std::result::Result<T, MazeError>;
