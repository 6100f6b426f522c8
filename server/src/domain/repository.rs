#![allow(async_fn_in_trait)]

use crate::domain::types::{Person, Planet, User};
use crate::error::HolocronServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, HolocronServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, HolocronServiceError>;
}

/// Repository for catalog planets.
pub trait PlanetRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Planet>, HolocronServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, HolocronServiceError>;
}

/// Repository for catalog people.
pub trait PersonRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Person>, HolocronServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, HolocronServiceError>;
}

/// Repository for the user-planet favorites relation.
pub trait FavoritePlanetRepository: Send + Sync {
    /// Planets the user has favorited, fully loaded.
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Planet>, HolocronServiceError>;

    /// Add a favorite pair. Returns `false` if the pair already exists.
    async fn add(&self, user_id: i32, planet_id: i32) -> Result<bool, HolocronServiceError>;

    /// Remove a favorite pair. Returns `false` if no row was deleted.
    async fn remove(&self, user_id: i32, planet_id: i32) -> Result<bool, HolocronServiceError>;
}

/// Repository for the user-person favorites relation.
pub trait FavoritePersonRepository: Send + Sync {
    /// People the user has favorited, fully loaded.
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Person>, HolocronServiceError>;

    /// Add a favorite pair. Returns `false` if the pair already exists.
    async fn add(&self, user_id: i32, person_id: i32) -> Result<bool, HolocronServiceError>;

    /// Remove a favorite pair. Returns `false` if no row was deleted.
    async fn remove(&self, user_id: i32, person_id: i32) -> Result<bool, HolocronServiceError>;
}
