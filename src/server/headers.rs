//! Cross-origin isolation headers.
//!
//! The love.js player relies on `SharedArrayBuffer`, which browsers only
//! expose to cross-origin isolated documents.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

pub const OPENER_POLICY: &str = "Cross-Origin-Opener-Policy";
pub const EMBEDDER_POLICY: &str = "Cross-Origin-Embedder-Policy";

/// Fairing that stamps COOP/COEP headers on every response, including
/// catcher output.
pub struct CrossOriginIsolation;

#[rocket::async_trait]
impl Fairing for CrossOriginIsolation {
    fn info(&self) -> Info {
        Info {
            name: "Cross-Origin Isolation Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new(OPENER_POLICY, "same-origin"));
        response.set_header(Header::new(EMBEDDER_POLICY, "require-corp"));
    }
}
