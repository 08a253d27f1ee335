//! Configuration file loading for the CLI
//!
//! This module finds the TOML file holding the render settings and loads it
//! into an [`AppConfig`]. A file is looked up in these places, first match
//! wins:
//!
//! 1. The path given with `--config`
//! 2. `sketch/config.toml` below the working directory
//! 3. `config.toml` in the platform configuration directory
//!
//! Without a file the default configuration is used.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use sketch::{SketchError, config::AppConfig};

const LOCAL_CONFIG: &str = "sketch/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse TOML configuration {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl From<ConfigError> for SketchError {
    fn from(err: ConfigError) -> Self {
        SketchError::new_config_error(err)
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Given on the command line; it is an error if the file is missing.
    Explicit(PathBuf),
    /// Found below the working directory.
    Local(PathBuf),
    /// Found in the platform configuration directory.
    System(PathBuf),
}

impl ConfigLocation {
    /// Returns the path of the configuration file.
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::System(path) => path,
        }
    }
}

impl fmt::Display for ConfigLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Explicit(_) => "explicit",
            Self::Local(_) => "local",
            Self::System(_) => "system",
        };
        write!(f, "{kind} path {}", self.path().display())
    }
}

/// Find the configuration file to use, if any.
///
/// An explicit path is returned as is, even when the file does not exist, so
/// that loading reports it as missing instead of silently falling back.
///
/// # Arguments
///
/// * `explicit_path` - Optional path given on the command line
pub fn locate_config(explicit_path: Option<impl AsRef<Path>>) -> Option<ConfigLocation> {
    if let Some(path) = explicit_path {
        return Some(ConfigLocation::Explicit(path.as_ref().to_path_buf()));
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        return Some(ConfigLocation::Local(local_config.to_path_buf()));
    }

    let Some(proj_dirs) = ProjectDirs::from("com", "sketch", "sketch") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };

    let system_config = proj_dirs.config_dir().join("config.toml");
    if system_config.exists() {
        return Some(ConfigLocation::System(system_config));
    }

    debug!(path = system_config.display().to_string(); "System configuration file not found");
    None
}

/// Find and load the render configuration
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SketchError> {
    let Some(location) = locate_config(explicit_path) else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(location = location.to_string(); "Loading configuration");
    let config = read_config_file(location.path())?;

    let render = config.render();
    debug!(
        indent_step = render.indent_step(),
        indent = render.indent();
        "Configuration loaded"
    );
    Ok(config)
}

/// Read and parse a TOML configuration file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::MissingFile(path.to_path_buf())
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
