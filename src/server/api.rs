//! Save/Load HTTP Handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api/save` | POST | Persist `{id, data}` under the sanitized id |
//! | `/api/load?id=` | GET | Read back the envelope, or `data: null` if never saved |
//!
//! Every response, success or failure, is a JSON object carrying a
//! `success` flag and a human-readable `message`.

use std::io::ErrorKind;

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{Request, State, catch, get, post};
use serde::{Deserialize, Serialize};

use crate::error::GameSaverError;
use crate::record::SaveRecord;
use crate::sanitizer::SafeId;
use crate::storage::FsStorage;
use crate::store::SaveStore;

/// The store type held in Rocket managed state.
pub type AppStore = SaveStore<FsStorage>;

/// Error half of every handler result.
pub type ApiError = (Status, Json<MessageResponse>);

const SAVE_MISSING_FIELDS: &str = "Missing id or data in save request.";
const LOAD_MISSING_ID: &str = "Missing id in load request.";

/// Body of `POST /api/save`.
///
/// Both fields are optional at the wire level so an absent field can be
/// told apart from a present-but-empty one. `data` must be a string: an
/// explicit `"data": null` counts as absent and is rejected with 400, unlike
/// servers that only test for a missing key.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub id: Option<String>,
    pub data: Option<String>,
}

/// Response carrying only an outcome and a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Response of `GET /api/load`. `data` serializes as `null` when no save
/// exists.
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub success: bool,
    pub data: Option<SaveRecord>,
    pub message: String,
}

fn fail(status: Status, message: impl Into<String>) -> ApiError {
    (status, Json(MessageResponse::failure(message)))
}

fn rejected(err: GameSaverError) -> ApiError {
    match err {
        GameSaverError::BadRequest(message) => fail(Status::BadRequest, message),
        other => fail(Status::InternalServerError, other.to_string()),
    }
}

/// Presence checks for a save: a usable id and a `data` string, possibly empty.
fn validate_save(request: SaveRequest) -> crate::Result<(SafeId, String)> {
    let id = request.id.as_deref().and_then(SafeId::parse);
    match (id, request.data) {
        (Some(id), Some(data)) => Ok((id, data)),
        _ => Err(GameSaverError::BadRequest(SAVE_MISSING_FIELDS.into())),
    }
}

fn validate_load(id: Option<&str>) -> crate::Result<SafeId> {
    id.and_then(SafeId::parse)
        .ok_or_else(|| GameSaverError::BadRequest(LOAD_MISSING_ID.into()))
}

/// Persist a save.
///
/// POST /api/save
#[post("/save", data = "<body>")]
pub async fn save_game(
    store: &State<AppStore>,
    body: Result<Json<SaveRequest>, json::Error<'_>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(json::Error::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
            tracing::warn!("Rejected oversized save request: {e}");
            return Err(fail(Status::PayloadTooLarge, "Save request is too large."));
        }
        Err(e) => {
            tracing::warn!("Rejected malformed save request: {e}");
            return Err(fail(Status::BadRequest, SAVE_MISSING_FIELDS));
        }
    };

    let (id, data) = validate_save(request).map_err(rejected)?;

    match store.save(&id, &data).await {
        Ok(_) => Ok(Json(MessageResponse::ok(format!(
            "Game for id '{id}' saved successfully."
        )))),
        Err(e) => {
            tracing::error!(id = %id, "Failed to save game: {e}");
            Err(fail(
                Status::InternalServerError,
                format!("Failed to save game for id '{id}'."),
            ))
        }
    }
}

/// Load a save.
///
/// GET /api/load?id=<id>
#[get("/load?<id>")]
pub async fn load_game(
    store: &State<AppStore>,
    id: Option<String>,
) -> Result<Json<LoadResponse>, ApiError> {
    let id = validate_load(id.as_deref()).map_err(rejected)?;

    match store.load_record(&id).await {
        Ok(None) => Ok(Json(LoadResponse {
            success: true,
            data: None,
            message: format!("No save file found for id '{id}'."),
        })),
        Ok(Some(record)) => Ok(Json(LoadResponse {
            success: true,
            data: Some(record),
            message: format!("Game for id '{id}' loaded successfully."),
        })),
        Err(e @ GameSaverError::Corrupt { .. }) => {
            tracing::error!(id = %id, "Failed to parse save data: {e}");
            Err(fail(
                Status::InternalServerError,
                format!("Failed to parse save data for id '{id}'."),
            ))
        }
        Err(e) => {
            tracing::error!(id = %id, "Failed to load game: {e}");
            Err(fail(
                Status::InternalServerError,
                format!("Failed to load game for id '{id}'."),
            ))
        }
    }
}

/// JSON fallback for every status produced under `/api` without a handler
/// response of its own (unknown route, unsupported method, and so on).
#[catch(default)]
pub fn api_catcher(status: Status, request: &Request<'_>) -> (Status, Json<MessageResponse>) {
    tracing::debug!("API catcher: {} {} -> {}", request.method(), request.uri(), status);
    fail(
        status,
        format!("{} {}.", status.code, status.reason_lossy()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> SaveRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn save_accepts_empty_data() {
        let (id, data) = validate_save(request(r#"{"id":"run","data":""}"#)).unwrap();
        assert_eq!(id.as_str(), "run");
        assert_eq!(data, "");
    }

    #[test]
    fn save_null_data_counts_as_absent() {
        let err = validate_save(request(r#"{"id":"run","data":null}"#)).unwrap_err();
        assert!(matches!(err, GameSaverError::BadRequest(ref m) if m == SAVE_MISSING_FIELDS));
    }

    #[test]
    fn save_unusable_id_rejected() {
        for body in [r#"{"data":"X"}"#, r#"{"id":"../","data":"X"}"#] {
            assert!(validate_save(request(body)).is_err(), "body: {body}");
        }
    }

    #[test]
    fn load_sanitizes_id() {
        assert_eq!(validate_load(Some("a/b/run")).unwrap().as_str(), "run");
        assert!(validate_load(None).is_err());
        assert!(validate_load(Some("")).is_err());
    }

    #[test]
    fn rejected_maps_status() {
        let (status, body) = rejected(GameSaverError::BadRequest("nope".into()));
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body.message, "nope");
        assert!(!body.success);

        let (status, _) = rejected(GameSaverError::storage("disk gone"));
        assert_eq!(status, Status::InternalServerError);
    }
}
