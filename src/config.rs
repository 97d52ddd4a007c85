//! Server configuration and its layered loading.
//!
//! Sources are merged in this order (later sources override earlier):
//!
//! 1. Defaults from [`ServerConfig::default`]
//! 2. A TOML file: the explicit path if given, else `game_saver.toml` in the
//!    working directory when present
//! 3. Environment variables prefixed `GAME_SAVER_` (e.g. `GAME_SAVER_PORT`)
//! 4. The bare `PORT` variable

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{GameSaverError, Result};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "GAME_SAVER_";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "game_saver.toml";

/// Everything the server needs to know at startup.
///
/// Fluent `with_*` setters are provided so tests and embedders can point the
/// server at temporary directories without touching the environment.
///
/// # Example
///
/// ```rust,no_run
/// use game_saver::ServerConfig;
///
/// let config = ServerConfig::default()
///     .with_port(8080)
///     .with_saves_dir("/tmp/saves")
///     .with_love_version("11.4");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding one `<id>.json` file per save.
    pub saves_dir: PathBuf,
    /// Directory served under `/lovejs_player`.
    pub player_dir: PathBuf,
    /// Packaged game served at `/game.love` and `/games/game.love`.
    pub game_file: PathBuf,
    /// LÖVE version passed to the player in the root redirect.
    pub love_version: String,
    /// Upper bound on a save request body, in bytes.
    pub max_save_bytes: u64,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            saves_dir: PathBuf::from("saves"),
            player_dir: PathBuf::from("lovejs_player"),
            game_file: PathBuf::from("game.love"),
            love_version: "11.5".to_string(),
            max_save_bytes: 1024 * 1024,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from all sources and validate it.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::figment(config_path)
            .extract::<Self>()
            .map_err(|e| GameSaverError::Config(e.to_string()))?
            .validated()
    }

    /// The merged figment, before extraction.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match config_path {
            Some(path) => {
                if path.exists() {
                    tracing::info!("Loading configuration from {}", path.display());
                } else {
                    tracing::warn!("Configuration file {} not found", path.display());
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    tracing::info!("Loading configuration from {}", default_path.display());
                    figment = figment.merge(Toml::file(default_path));
                }
            }
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&["PORT"]))
    }

    /// Reject values that would leave the server unusable.
    pub fn validated(self) -> Result<Self> {
        if self.port == 0 {
            return Err(GameSaverError::Config("port must be non-zero".into()));
        }
        if self.max_save_bytes == 0 {
            return Err(GameSaverError::Config(
                "max_save_bytes must be non-zero".into(),
            ));
        }
        if self.love_version.trim().is_empty() {
            return Err(GameSaverError::Config("love_version must be set".into()));
        }
        for (name, path) in [
            ("saves_dir", &self.saves_dir),
            ("player_dir", &self.player_dir),
            ("game_file", &self.game_file),
        ] {
            if path.as_os_str().is_empty() {
                return Err(GameSaverError::Config(format!("{name} must be set")));
            }
        }
        Ok(self)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_saves_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.saves_dir = dir.into();
        self
    }

    pub fn with_player_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.player_dir = dir.into();
        self
    }

    pub fn with_game_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.game_file = file.into();
        self
    }

    pub fn with_love_version(mut self, version: impl Into<String>) -> Self {
        self.love_version = version.into();
        self
    }

    pub fn with_max_save_bytes(mut self, bytes: u64) -> Self {
        self.max_save_bytes = bytes;
        self
    }

    /// Index page of the player shell.
    pub fn player_index(&self) -> PathBuf {
        self.player_dir.join("index.html")
    }

    /// Target of the `/` redirect.
    pub fn player_url(&self) -> String {
        format!(
            "/lovejs_player/index.html?g=../game.love&v={}",
            self.love_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default().validated().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.saves_dir, PathBuf::from("saves"));
        assert_eq!(config.game_file, PathBuf::from("game.love"));
    }

    #[test]
    fn zero_port_rejected() {
        let err = ServerConfig::default().with_port(0).validated().unwrap_err();
        assert!(matches!(err, GameSaverError::Config(_)));
    }

    #[test]
    fn empty_saves_dir_rejected() {
        let err = ServerConfig::default()
            .with_saves_dir("")
            .validated()
            .unwrap_err();
        assert!(err.to_string().contains("saves_dir"));
    }

    #[test]
    fn zero_body_limit_rejected() {
        assert!(
            ServerConfig::default()
                .with_max_save_bytes(0)
                .validated()
                .is_err()
        );
    }

    #[test]
    fn player_url_carries_love_version() {
        let config = ServerConfig::default().with_love_version("11.4");
        assert_eq!(
            config.player_url(),
            "/lovejs_player/index.html?g=../game.love&v=11.4"
        );
    }

    #[test]
    fn toml_and_env_layering() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
                    saves_dir = "data/saves"
                    love_version = "11.4"
                "#,
            )?;
            jail.set_env("GAME_SAVER_LOVE_VERSION", "11.3");

            let config = ServerConfig::load(Some(Path::new("custom.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.saves_dir, PathBuf::from("data/saves"));
            assert_eq!(config.love_version, "11.3");
            assert_eq!(config.player_dir, PathBuf::from("lovejs_player"));
            Ok(())
        });
    }

    #[test]
    fn bare_port_variable_wins() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GAME_SAVER_PORT", "4100");
            jail.set_env("PORT", "5000");

            let config = ServerConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.port, 5000);
            Ok(())
        });
    }

    #[test]
    fn default_file_picked_up_from_working_dir() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, "host = \"127.0.0.1\"")?;

            let config = ServerConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.host, "127.0.0.1");
            Ok(())
        });
    }
}
