use crate::error::{MazeError, Result};
use serde_derive::Deserialize;
use std::path::Path;

/// Settings for a new maze. Any field left out of a config file falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeConfig {
	pub rows: usize,
	pub cols: usize,
	/// fixes the generated layout, handy for tests and for sharing a maze
	pub seed: Option<u64>,
}

impl Default for MazeConfig {
	fn default() -> Self {
		Self {
			rows: 10,
			cols: 10,
			seed: None,
		}
	}
}

impl MazeConfig {
	pub fn from_yaml_str(yaml: &str) -> Result<Self> {
		let config: MazeConfig = serde_yaml::from_str(yaml)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let yaml = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_yaml_str(&yaml)
	}

	pub fn validate(&self) -> Result<()> {
		if self.rows == 0 || self.cols == 0 {
			return Err(MazeError::InvalidConfiguration {
				rows: self.rows,
				cols: self.cols,
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_ten_by_ten() {
		let config = MazeConfig::default();
		assert_eq!((config.rows, config.cols), (10, 10));
		assert_eq!(config.seed, None);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn parses_full_yaml() {
		let config = MazeConfig::from_yaml_str("rows: 4\ncols: 7\nseed: 42\n").unwrap();
		assert_eq!(
			config,
			MazeConfig {
				rows: 4,
				cols: 7,
				seed: Some(42),
			}
		);
	}

	#[test]
	fn missing_fields_use_defaults() {
		let config = MazeConfig::from_yaml_str("cols: 3\n").unwrap();
		assert_eq!((config.rows, config.cols, config.seed), (10, 3, None));
	}

	#[test]
	fn zero_dimension_is_invalid() {
		assert!(matches!(
			MazeConfig::from_yaml_str("rows: 0\ncols: 3\n"),
			Err(MazeError::InvalidConfiguration { rows: 0, cols: 3 })
		));
	}

	#[test]
	fn negative_dimension_is_a_parse_error() {
		assert!(matches!(
			MazeConfig::from_yaml_str("rows: -2\n"),
			Err(MazeError::Config { .. })
		));
	}

	#[test]
	fn unknown_fields_are_rejected() {
		assert!(MazeConfig::from_yaml_str("rows: 2\ndifficulty: hard\n").is_err());
	}

	#[test]
	fn missing_file_reports_path() {
		let err = MazeConfig::load("/nonexistent/maze.yaml").unwrap_err();
		assert!(matches!(err, MazeError::Io { .. }));
		assert!(err.to_string().contains("/nonexistent/maze.yaml"));
	}
}
