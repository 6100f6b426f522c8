use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Service error variants.
///
/// Status codes follow the API's observed contract: single-entity read
/// misses answer 400 with a message naming the id, favorite-path misses
/// answer 404, duplicate favorites answer 409.
#[derive(Debug, thiserror::Error)]
pub enum HolocronServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("the planet with id {0} does not exist")]
    PlanetNotFound(i32),
    #[error("the person with id {0} does not exist")]
    PersonNotFound(i32),
    #[error("planet not found")]
    FavoritePlanetNotFound,
    #[error("person not found")]
    FavoritePersonNotFound,
    #[error("planet is not in the favorite planets list")]
    PlanetNotFavorited,
    #[error("person is not in the favorite people list")]
    PersonNotFavorited,
    #[error("favorite already exists")]
    FavoriteAlreadyExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl HolocronServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PlanetNotFound(_) => "PLANET_NOT_FOUND",
            Self::PersonNotFound(_) => "PERSON_NOT_FOUND",
            Self::FavoritePlanetNotFound => "FAVORITE_PLANET_NOT_FOUND",
            Self::FavoritePersonNotFound => "FAVORITE_PERSON_NOT_FOUND",
            Self::PlanetNotFavorited => "PLANET_NOT_FAVORITED",
            Self::PersonNotFavorited => "PERSON_NOT_FAVORITED",
            Self::FavoriteAlreadyExists => "FAVORITE_ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for HolocronServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::PlanetNotFound(_) | Self::PersonNotFound(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound
            | Self::FavoritePlanetNotFound
            | Self::FavoritePersonNotFound
            | Self::PlanetNotFavorited
            | Self::PersonNotFavorited => StatusCode::NOT_FOUND,
            Self::FavoriteAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
