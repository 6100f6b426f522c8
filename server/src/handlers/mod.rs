use serde::Serialize;

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;

/// Success envelope shared by the read endpoints: `{"msg":"ok","info":...}`.
#[derive(Serialize)]
pub struct OkEnvelope<T: Serialize> {
    pub msg: &'static str,
    pub info: T,
}

pub fn ok<T: Serialize>(info: T) -> axum::Json<OkEnvelope<T>> {
    axum::Json(OkEnvelope { msg: "ok", info })
}
