//! Game delivery routes.
//!
//! The player shell itself is served by a `FileServer` mounted at
//! `/lovejs_player`; this module covers the packaged game and the entry
//! redirect.

use std::path::{Path, PathBuf};

use rocket::fs::NamedFile;
use rocket::response::Redirect;
use rocket::response::status::NotFound;
use rocket::{State, get};

use crate::config::ServerConfig;

/// Asset locations resolved from [`ServerConfig`] at build time.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub player_index: PathBuf,
    pub game_file: PathBuf,
    pub player_url: String,
}

impl AssetPaths {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            player_index: config.player_index(),
            game_file: config.game_file.clone(),
            player_url: config.player_url(),
        }
    }
}

async fn open_game(path: &Path) -> Option<NamedFile> {
    match NamedFile::open(path).await {
        Ok(file) => Some(file),
        Err(e) => {
            tracing::warn!("Cannot serve game file {}: {e}", path.display());
            None
        }
    }
}

/// Redirect to the player, pointing it at the packaged game.
///
/// GET /
#[get("/")]
pub async fn player_redirect(
    assets: &State<AssetPaths>,
) -> Result<Redirect, NotFound<&'static str>> {
    if tokio::fs::try_exists(&assets.player_index)
        .await
        .unwrap_or(false)
    {
        Ok(Redirect::found(assets.player_url.clone()))
    } else {
        Err(NotFound(
            "Love.js player not found. Please ensure player files are in lovejs_player directory.",
        ))
    }
}

/// GET /game.love
#[get("/game.love")]
pub async fn game_file(assets: &State<AssetPaths>) -> Result<NamedFile, NotFound<&'static str>> {
    open_game(&assets.game_file)
        .await
        .ok_or(NotFound("game.love not found on server."))
}

/// Same file, for players that resolve the game under `/games/`.
///
/// GET /games/game.love
#[get("/games/game.love")]
pub async fn games_game_file(
    assets: &State<AssetPaths>,
) -> Result<NamedFile, NotFound<&'static str>> {
    open_game(&assets.game_file)
        .await
        .ok_or(NotFound("game.love not found in /games/."))
}
