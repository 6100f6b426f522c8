use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::error::HolocronServiceError;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::favorite::{
    CreateFavoritePersonUseCase, CreateFavoritePlanetUseCase, DeleteFavoritePersonUseCase,
    DeleteFavoritePlanetUseCase,
};
use crate::usecase::user::GetUserWithFavoritesUseCase;

#[derive(Deserialize)]
pub struct FavoriteRequest {
    pub user_id: i32,
}

/// Mutation payload: a confirmation message plus the updated serialized user.
#[derive(Serialize)]
pub struct FavoriteMutationResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

async fn updated_user(
    state: &AppState,
    user_id: i32,
) -> Result<UserResponse, HolocronServiceError> {
    let uc = GetUserWithFavoritesUseCase {
        users: state.user_repo(),
        favorite_planets: state.favorite_planet_repo(),
        favorite_people: state.favorite_person_repo(),
    };
    Ok(UserResponse::from(uc.execute(user_id).await?))
}

// ── POST /favorite/planet/{planet_id} ────────────────────────────────────────

pub async fn create_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Json(body): Json<FavoriteRequest>,
) -> Result<Json<FavoriteMutationResponse>, HolocronServiceError> {
    let uc = CreateFavoritePlanetUseCase {
        users: state.user_repo(),
        planets: state.planet_repo(),
        favorites: state.favorite_planet_repo(),
    };
    uc.execute(body.user_id, planet_id).await?;
    Ok(Json(FavoriteMutationResponse {
        message: "favorite planet has been saved",
        user: updated_user(&state, body.user_id).await?,
    }))
}

// ── DELETE /favorite/planet/{planet_id} ──────────────────────────────────────

pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Json(body): Json<FavoriteRequest>,
) -> Result<Json<FavoriteMutationResponse>, HolocronServiceError> {
    let uc = DeleteFavoritePlanetUseCase {
        users: state.user_repo(),
        planets: state.planet_repo(),
        favorites: state.favorite_planet_repo(),
    };
    uc.execute(body.user_id, planet_id).await?;
    Ok(Json(FavoriteMutationResponse {
        message: "favorite planet has been deleted",
        user: updated_user(&state, body.user_id).await?,
    }))
}

// ── POST /favorite/people/{person_id} ────────────────────────────────────────

pub async fn create_favorite_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
    Json(body): Json<FavoriteRequest>,
) -> Result<Json<FavoriteMutationResponse>, HolocronServiceError> {
    let uc = CreateFavoritePersonUseCase {
        users: state.user_repo(),
        people: state.person_repo(),
        favorites: state.favorite_person_repo(),
    };
    uc.execute(body.user_id, person_id).await?;
    Ok(Json(FavoriteMutationResponse {
        message: "favorite person has been saved",
        user: updated_user(&state, body.user_id).await?,
    }))
}

// ── DELETE /favorite/people/{person_id} ──────────────────────────────────────

pub async fn delete_favorite_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
    Json(body): Json<FavoriteRequest>,
) -> Result<Json<FavoriteMutationResponse>, HolocronServiceError> {
    let uc = DeleteFavoritePersonUseCase {
        users: state.user_repo(),
        people: state.person_repo(),
        favorites: state.favorite_person_repo(),
    };
    uc.execute(body.user_id, person_id).await?;
    Ok(Json(FavoriteMutationResponse {
        message: "favorite person has been deleted",
        user: updated_user(&state, body.user_id).await?,
    }))
}
