//! Rocket application: save API, game delivery and startup.

pub mod api;
pub mod assets;
pub mod headers;

use rocket::data::{ByteUnit, Limits};
use rocket::figment::Figment;
use rocket::fs::{FileServer, Options};
use rocket::{Build, Rocket, catchers, routes};

use crate::config::ServerConfig;
use crate::error::{GameSaverError, Result};
use crate::storage::FsStorage;
use crate::store::SaveStore;

pub use api::{AppStore, LoadResponse, MessageResponse, SaveRequest};
pub use assets::AssetPaths;
pub use headers::CrossOriginIsolation;

/// Rocket configuration derived from [`ServerConfig`], layered over Rocket's
/// own defaults (`Rocket.toml`, `ROCKET_*`).
pub fn rocket_figment(config: &ServerConfig) -> Figment {
    rocket::Config::figment()
        .merge(("address", config.host.clone()))
        .merge(("port", config.port))
        .merge((
            "limits",
            Limits::default().limit("json", ByteUnit::from(config.max_save_bytes)),
        ))
}

/// Build the application without launching it.
///
/// Routes:
/// - POST `/api/save`, GET `/api/load` - save store
/// - GET `/` - redirect into the player
/// - GET `/lovejs_player/<path..>` - player shell
/// - GET `/game.love`, GET `/games/game.love` - packaged game
pub fn build(config: &ServerConfig) -> Rocket<Build> {
    let store: AppStore = SaveStore::new(FsStorage::new(&config.saves_dir));

    rocket::custom(rocket_figment(config))
        .manage(store)
        .manage(AssetPaths::from_config(config))
        .attach(CrossOriginIsolation)
        .mount("/api", routes![api::save_game, api::load_game])
        .register("/api", catchers![api::api_catcher])
        .mount(
            "/",
            routes![
                assets::player_redirect,
                assets::game_file,
                assets::games_game_file
            ],
        )
        .mount(
            "/lovejs_player",
            FileServer::new(&config.player_dir, Options::Index | Options::Missing),
        )
}

fn warn_missing_assets(config: &ServerConfig) {
    if !config.player_index().exists() {
        tracing::warn!(
            "Player directory {} or its index.html does not exist yet",
            config.player_dir.display()
        );
    }
    if !config.game_file.exists() {
        tracing::warn!(
            "Game file {} does not exist yet",
            config.game_file.display()
        );
    }
}

/// Prepare the saves directory and run the server until shutdown.
pub async fn launch(config: ServerConfig) -> Result<()> {
    FsStorage::new(&config.saves_dir).ensure_dir().await?;

    tracing::info!("Server listening at http://{}:{}", config.host, config.port);
    tracing::info!("Serving game player from {}", config.player_dir.display());
    tracing::info!("Game file expected at {}", config.game_file.display());
    tracing::info!("Saves stored in {}", config.saves_dir.display());
    warn_missing_assets(&config);

    build(&config)
        .launch()
        .await
        .map_err(|e| GameSaverError::Server(e.to_string()))?;

    Ok(())
}
