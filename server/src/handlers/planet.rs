use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::Planet;
use crate::error::HolocronServiceError;
use crate::handlers::{OkEnvelope, ok};
use crate::state::AppState;
use crate::usecase::planet::{GetPlanetUseCase, GetPlanetsUseCase};

#[derive(Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub climate: String,
    pub diameter: i32,
    pub terrain: String,
    pub rotation_period: i32,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        PlanetResponse {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            climate: planet.climate,
            diameter: planet.diameter,
            terrain: planet.terrain,
            rotation_period: planet.rotation_period,
        }
    }
}

// ── GET /planets ─────────────────────────────────────────────────────────────

pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<OkEnvelope<Vec<PlanetResponse>>>, HolocronServiceError> {
    let uc = GetPlanetsUseCase {
        repo: state.planet_repo(),
    };
    let planets = uc.execute().await?;
    Ok(ok(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ── GET /planets/{id} ────────────────────────────────────────────────────────

pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<Json<OkEnvelope<PlanetResponse>>, HolocronServiceError> {
    let uc = GetPlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = uc.execute(planet_id).await?;
    Ok(ok(PlanetResponse::from(planet)))
}
