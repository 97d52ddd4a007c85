//! # game_saver
//!
//! Hosts a browser-playable love.js game and a small JSON save store the
//! game uses to persist player progress.
//!
//! ## Overview
//!
//! The [`SaveStore`] maps a caller-supplied identifier to one
//! [`SaveRecord`] envelope `{id, data}`. Identifiers are reduced to their
//! final path segment by [`SafeId`] before they touch the filesystem, and
//! each save atomically replaces the previous one. Records live in a
//! [`Storage`] backend; [`FsStorage`] keeps one `<id>.json` file per save.
//!
//! The [`server`] module exposes the store over HTTP with Rocket
//! (`POST /api/save`, `GET /api/load`) next to the static player shell and
//! the packaged `game.love`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use game_saver::{FsStorage, LoadOutcome, SafeId, SaveStore};
//!
//! # async fn example() -> game_saver::Result<()> {
//! let store = SaveStore::new(FsStorage::new("/tmp/saves"));
//! let id = SafeId::parse("profile1_meta").unwrap();
//!
//! store.save(&id, "packed-progress").await?;
//!
//! match store.load(&id).await? {
//!     LoadOutcome::Found(record) => println!("{}", record.data),
//!     LoadOutcome::Missing => println!("never saved"),
//!     LoadOutcome::Corrupt(e) => eprintln!("corrupt save: {e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## HTTP surface
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/save` | `{id, data}` → `{success, message}` |
//! | GET | `/api/load?id=` | `{success, data: null \| {id, data}, message}` |
//! | GET | `/` | Redirect into the player |
//! | GET | `/lovejs_player/...` | Player shell |
//! | GET | `/game.love`, `/games/game.love` | Packaged game |

pub mod config;
pub mod error;
pub mod record;
pub mod sanitizer;
pub mod server;
pub mod storage;
pub mod store;

pub use config::ServerConfig;
pub use error::{GameSaverError, Result};
pub use record::{LoadOutcome, SaveRecord};
pub use sanitizer::SafeId;
pub use storage::{FsStorage, Storage};
pub use store::SaveStore;
