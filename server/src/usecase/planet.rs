use crate::domain::repository::PlanetRepository;
use crate::domain::types::Planet;
use crate::error::HolocronServiceError;

// ── GetPlanets ───────────────────────────────────────────────────────────────

pub struct GetPlanetsUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Planet>, HolocronServiceError> {
        self.repo.list().await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetUseCase<R> {
    pub async fn execute(&self, planet_id: i32) -> Result<Planet, HolocronServiceError> {
        self.repo
            .find_by_id(planet_id)
            .await?
            .ok_or(HolocronServiceError::PlanetNotFound(planet_id))
    }
}
