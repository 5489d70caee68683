use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::Parser;
use std::fs;
use tracing::{info, warn};
use toml;

/// Configuration for the review scheduler service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// URL (SQLite file path) for the database connection
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. "127.0.0.1:3000"
    pub bind_addr: String,
    /// Minimum level of log events emitted to the console
    pub log_level: String,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    /// Optional update for database URL
    #[serde(default)]
    pub database_url: Option<String>,
    /// Optional update for the bind address
    #[serde(default)]
    pub bind_addr: Option<String>,
    /// Optional update for the log level
    #[serde(default)]
    pub log_level: Option<String>,
    /// Optional server URL for the CLI to connect to
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Command line arguments for the server binary
#[derive(Parser, Debug)]
#[clap(name = "review-scheduler", about = "A spaced-repetition review scheduler")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to bind the HTTP server to
    #[clap(long, env = "BIND_ADDR")]
    pub bind_addr: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Debug mode
    #[clap(long, env = "REVIEW_SCHEDULER_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            bind_addr: update.bind_addr.unwrap_or(self.bind_addr),
            log_level: update.log_level.unwrap_or(self.log_level),
        }
    }
}

/// Returns the base (default) configuration
pub fn base_config(data_dir_path: Option<PathBuf>) -> Config {
    let database_url = data_dir_path
        .map_or("review_scheduler.db".to_string(), |path| path.join("review_scheduler.db").to_string_lossy().to_string());

    Config {
        database_url,
        bind_addr: "127.0.0.1:3000".to_string(),
        log_level: "info".to_string(),
    }
}

/// Loads configuration from a TOML file
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, String> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    match fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<ConfigUpdate>(&content) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", config_path);
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                Err(format!("Failed to parse config file: {}", e))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            Err(format!("Failed to read config file: {}", e))
        }
    }
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url,
        bind_addr: args.bind_addr,
        log_level: args.log_level,
        server_url: None,
    }
}

/// Gets the config directory path
///
/// Returns the path to the config directory for the application based on
/// the XDG base directory specification. In debug builds this always
/// returns `None`, so development runs never pick up a real user config.
pub fn get_config_dir_path() -> Option<PathBuf> {
    if cfg!(debug_assertions) {
        info!("Debug build detected, skipping config file");
        return None;
    }

    let config_path = match ProjectDirs::from("com", "review-scheduler", "review-scheduler") {
        Some(proj_dirs) => Some(PathBuf::from(proj_dirs.config_dir())),
        None => {
            warn!("Could not determine XDG config directory, skipping config file");
            None
        }
    };

    config_path.and_then(|path| {
        if !path.exists() {
            info!("Config path not found at {:?}, using defaults", path);
            None
        } else {
            Some(path)
        }
    })
}

/// Gets the data directory path
///
/// Returns the path to the data directory for the application based on the
/// XDG base directory specification, creating it if necessary. In debug
/// builds this always returns `None`.
pub fn get_data_dir_path() -> Option<PathBuf> {
    if cfg!(debug_assertions) {
        info!("Debug build detected, skipping state files");
        return None;
    }

    match ProjectDirs::from("com", "review-scheduler", "review-scheduler") {
        Some(proj_dirs) => {
            let path = PathBuf::from(proj_dirs.data_dir());
            if !path.exists() {
                if let Err(e) = fs::create_dir_all(&path) {
                    warn!("Failed to create XDG data directory {:?}: {}", path, e);
                    return None;
                }
            }
            Some(path)
        }
        None => {
            warn!("Could not determine XDG data directory, skipping data files");
            None
        }
    }
}

/// Gets the complete configuration by combining defaults with values from
/// the config file, environment variables, and command line arguments, in
/// order of increasing precedence.
pub fn get_config(args: CliArgs) -> Result<Config, String> {
    let config_dir_path = get_config_dir_path();
    let data_dir_path = get_data_dir_path();

    let base = base_config(data_dir_path);

    let config = base
        .apply_update(config_from_file(config_dir_path.map(|path| path.join("config.toml")))?)
        .apply_update(config_from_args(args));

    info!(
        "Final configuration: database_url={}, bind_addr={}, log_level={}",
        config.database_url, config.bind_addr, config.log_level
    );

    Ok(config)
}

#[cfg(test)]
mod tests;
