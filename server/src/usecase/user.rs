use crate::domain::repository::{
    FavoritePersonRepository, FavoritePlanetRepository, UserRepository,
};
use crate::domain::types::UserWithFavorites;
use crate::error::HolocronServiceError;

// ── GetUsers ─────────────────────────────────────────────────────────────────

pub struct GetUsersUseCase<U, FP, FE>
where
    U: UserRepository,
    FP: FavoritePlanetRepository,
    FE: FavoritePersonRepository,
{
    pub users: U,
    pub favorite_planets: FP,
    pub favorite_people: FE,
}

impl<U, FP, FE> GetUsersUseCase<U, FP, FE>
where
    U: UserRepository,
    FP: FavoritePlanetRepository,
    FE: FavoritePersonRepository,
{
    pub async fn execute(&self) -> Result<Vec<UserWithFavorites>, HolocronServiceError> {
        let users = self.users.list().await?;
        let mut out = Vec::with_capacity(users.len());
        for user in users {
            let favorite_planets = self.favorite_planets.list_for_user(user.id).await?;
            let favorite_people = self.favorite_people.list_for_user(user.id).await?;
            out.push(UserWithFavorites {
                user,
                favorite_planets,
                favorite_people,
            });
        }
        Ok(out)
    }
}

// ── GetUserWithFavorites ─────────────────────────────────────────────────────

/// Loads one user with both favorite collections rebuilt from live
/// relationship data. Backs both the favorites listing endpoint and the
/// updated-user payload of favorite mutations.
pub struct GetUserWithFavoritesUseCase<U, FP, FE>
where
    U: UserRepository,
    FP: FavoritePlanetRepository,
    FE: FavoritePersonRepository,
{
    pub users: U,
    pub favorite_planets: FP,
    pub favorite_people: FE,
}

impl<U, FP, FE> GetUserWithFavoritesUseCase<U, FP, FE>
where
    U: UserRepository,
    FP: FavoritePlanetRepository,
    FE: FavoritePersonRepository,
{
    pub async fn execute(&self, user_id: i32) -> Result<UserWithFavorites, HolocronServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(HolocronServiceError::UserNotFound)?;
        let favorite_planets = self.favorite_planets.list_for_user(user_id).await?;
        let favorite_people = self.favorite_people.list_for_user(user_id).await?;
        Ok(UserWithFavorites {
            user,
            favorite_planets,
            favorite_people,
        })
    }
}
