use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::UserWithFavorites;
use crate::error::HolocronServiceError;
use crate::handlers::person::PersonResponse;
use crate::handlers::planet::PlanetResponse;
use crate::handlers::{OkEnvelope, ok};
use crate::state::AppState;
use crate::usecase::user::{GetUserWithFavoritesUseCase, GetUsersUseCase};

/// Serialized user. Favorites are always embedded as full objects, never
/// bare ids; `password` and `is_active` are not exposed.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub favorite_planets: Vec<PlanetResponse>,
    pub favorite_people: Vec<PersonResponse>,
}

impl From<UserWithFavorites> for UserResponse {
    fn from(profile: UserWithFavorites) -> Self {
        UserResponse {
            id: profile.user.id,
            email: profile.user.email,
            favorite_planets: profile
                .favorite_planets
                .into_iter()
                .map(PlanetResponse::from)
                .collect(),
            favorite_people: profile
                .favorite_people
                .into_iter()
                .map(PersonResponse::from)
                .collect(),
        }
    }
}

// ── GET /user ────────────────────────────────────────────────────────────────

pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<OkEnvelope<Vec<UserResponse>>>, HolocronServiceError> {
    let uc = GetUsersUseCase {
        users: state.user_repo(),
        favorite_planets: state.favorite_planet_repo(),
        favorite_people: state.favorite_person_repo(),
    };
    let users = uc.execute().await?;
    Ok(ok(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /user/{id}/favorites ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FavoritesResponse {
    pub favorite_planets: Vec<PlanetResponse>,
    pub favorite_people: Vec<PersonResponse>,
}

pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<FavoritesResponse>, HolocronServiceError> {
    let uc = GetUserWithFavoritesUseCase {
        users: state.user_repo(),
        favorite_planets: state.favorite_planet_repo(),
        favorite_people: state.favorite_person_repo(),
    };
    let profile = uc.execute(user_id).await?;
    let user = UserResponse::from(profile);
    Ok(Json(FavoritesResponse {
        favorite_planets: user.favorite_planets,
        favorite_people: user.favorite_people,
    }))
}
