use crate::domain::repository::{
    FavoritePersonRepository, FavoritePlanetRepository, PersonRepository, PlanetRepository,
    UserRepository,
};
use crate::error::HolocronServiceError;

// ── CreateFavoritePlanet ─────────────────────────────────────────────────────

pub struct CreateFavoritePlanetUseCase<U, P, F>
where
    U: UserRepository,
    P: PlanetRepository,
    F: FavoritePlanetRepository,
{
    pub users: U,
    pub planets: P,
    pub favorites: F,
}

impl<U, P, F> CreateFavoritePlanetUseCase<U, P, F>
where
    U: UserRepository,
    P: PlanetRepository,
    F: FavoritePlanetRepository,
{
    pub async fn execute(&self, user_id: i32, planet_id: i32) -> Result<(), HolocronServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(HolocronServiceError::UserNotFound);
        }
        if self.planets.find_by_id(planet_id).await?.is_none() {
            return Err(HolocronServiceError::FavoritePlanetNotFound);
        }
        let inserted = self.favorites.add(user_id, planet_id).await?;
        if !inserted {
            return Err(HolocronServiceError::FavoriteAlreadyExists);
        }
        Ok(())
    }
}

// ── CreateFavoritePerson ─────────────────────────────────────────────────────

pub struct CreateFavoritePersonUseCase<U, P, F>
where
    U: UserRepository,
    P: PersonRepository,
    F: FavoritePersonRepository,
{
    pub users: U,
    pub people: P,
    pub favorites: F,
}

impl<U, P, F> CreateFavoritePersonUseCase<U, P, F>
where
    U: UserRepository,
    P: PersonRepository,
    F: FavoritePersonRepository,
{
    pub async fn execute(&self, user_id: i32, person_id: i32) -> Result<(), HolocronServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(HolocronServiceError::UserNotFound);
        }
        if self.people.find_by_id(person_id).await?.is_none() {
            return Err(HolocronServiceError::FavoritePersonNotFound);
        }
        let inserted = self.favorites.add(user_id, person_id).await?;
        if !inserted {
            return Err(HolocronServiceError::FavoriteAlreadyExists);
        }
        Ok(())
    }
}

// ── DeleteFavoritePlanet ─────────────────────────────────────────────────────

pub struct DeleteFavoritePlanetUseCase<U, P, F>
where
    U: UserRepository,
    P: PlanetRepository,
    F: FavoritePlanetRepository,
{
    pub users: U,
    pub planets: P,
    pub favorites: F,
}

impl<U, P, F> DeleteFavoritePlanetUseCase<U, P, F>
where
    U: UserRepository,
    P: PlanetRepository,
    F: FavoritePlanetRepository,
{
    pub async fn execute(&self, user_id: i32, planet_id: i32) -> Result<(), HolocronServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(HolocronServiceError::UserNotFound);
        }
        if self.planets.find_by_id(planet_id).await?.is_none() {
            return Err(HolocronServiceError::FavoritePlanetNotFound);
        }
        let removed = self.favorites.remove(user_id, planet_id).await?;
        if !removed {
            return Err(HolocronServiceError::PlanetNotFavorited);
        }
        Ok(())
    }
}

// ── DeleteFavoritePerson ─────────────────────────────────────────────────────

pub struct DeleteFavoritePersonUseCase<U, P, F>
where
    U: UserRepository,
    P: PersonRepository,
    F: FavoritePersonRepository,
{
    pub users: U,
    pub people: P,
    pub favorites: F,
}

impl<U, P, F> DeleteFavoritePersonUseCase<U, P, F>
where
    U: UserRepository,
    P: PersonRepository,
    F: FavoritePersonRepository,
{
    pub async fn execute(&self, user_id: i32, person_id: i32) -> Result<(), HolocronServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(HolocronServiceError::UserNotFound);
        }
        if self.people.find_by_id(person_id).await?.is_none() {
            return Err(HolocronServiceError::FavoritePersonNotFound);
        }
        let removed = self.favorites.remove(user_id, person_id).await?;
        if !removed {
            return Err(HolocronServiceError::PersonNotFavorited);
        }
        Ok(())
    }
}
