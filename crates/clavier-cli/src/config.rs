//! Configuration file discovery for the CLI.
//!
//! A `config.toml` holds the `[layout]` and `[distance]` tables of an
//! [`AppConfig`]. An explicit `--config` path must exist; otherwise the
//! project-local and per-user locations are tried in turn and the built-in
//! defaults (QWERTY, Euclidean metric, unit costs) apply when neither exists.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use clavier::{ClavierError, config::AppConfig};

/// Project-local configuration, relative to the working directory.
const LOCAL_CONFIG: &str = "clavier/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Configuration file {0} does not exist")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ClavierError {
    fn from(err: ConfigError) -> Self {
        ClavierError::Config(err.to_string())
    }
}

/// Loads the configuration used by a CLI run.
///
/// An explicit path wins and must exist. Without one, the first existing
/// file among [`LOCAL_CONFIG`] and the per-user config directory
/// (`~/.config/clavier/config.toml` on Linux) is used.
///
/// # Errors
///
/// Returns `ClavierError::Config` if the explicit file is missing or a
/// configuration file does not parse, and `ClavierError::Io` if it cannot
/// be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ClavierError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path);
    }

    match default_locations().into_iter().find(|path| path.exists()) {
        Some(path) => read_config(&path),
        None => {
            debug!("No configuration file found, using the QWERTY defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Implicit configuration locations, most specific first.
fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "clavier", "clavier") {
        Some(dirs) => locations.push(dirs.config_dir().join("config.toml")),
        None => debug!("No per-user configuration directory on this platform"),
    }
    locations
}

fn read_config(path: &Path) -> Result<AppConfig, ClavierError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    info!(
        path = path.display().to_string(),
        layout = config.layout().name().name(),
        metric = config.distance().metric().as_str();
        "Configuration loaded"
    );
    Ok(config)
}
