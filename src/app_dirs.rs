//! Where `photogrid` looks for its configuration and keeps its data.
//!
//! Each directory can be pinned with an environment variable; otherwise the
//! platform location from the `directories` crate is used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "photogrid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
	Config,
	Data,
}

impl AppDir {
	fn env_var(self) -> &'static str {
		match self {
			Self::Config => "PHOTOGRID_CONFIG_DIR",
			Self::Data => "PHOTOGRID_DATA_DIR",
		}
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = override_from(env::var_os(self.env_var())) {
			return Ok(dir);
		}

		let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
			.ok_or_else(|| anyhow!("no home directory to place photogrid files in"))?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

/// An empty override counts as unset.
fn override_from(value: Option<std::ffi::OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

pub fn get_data_dir() -> Result<PathBuf> {
	AppDir::Data.resolve()
}
