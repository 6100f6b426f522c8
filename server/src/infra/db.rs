use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait as _, QueryFilter,
};

use holocron_schema::{favorite_people, favorite_planets, people, planets, users};

use crate::domain::repository::{
    FavoritePersonRepository, FavoritePlanetRepository, PersonRepository, PlanetRepository,
    UserRepository,
};
use crate::domain::types::{Person, Planet, User};
use crate::error::HolocronServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, HolocronServiceError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, HolocronServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password: model.password,
        is_active: model.is_active,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, HolocronServiceError> {
        let models = planets::Entity::find()
            .all(&self.db)
            .await
            .context("list planets")?;
        Ok(models.into_iter().map(planet_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, HolocronServiceError> {
        let model = planets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        Ok(model.map(planet_from_model))
    }
}

fn planet_from_model(model: planets::Model) -> Planet {
    Planet {
        id: model.id,
        name: model.name,
        population: model.population,
        climate: model.climate,
        diameter: model.diameter,
        terrain: model.terrain,
        rotation_period: model.rotation_period,
    }
}

// ── Person repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPersonRepository {
    pub db: DatabaseConnection,
}

impl PersonRepository for DbPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, HolocronServiceError> {
        let models = people::Entity::find()
            .all(&self.db)
            .await
            .context("list people")?;
        Ok(models.into_iter().map(person_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, HolocronServiceError> {
        let model = people::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find person by id")?;
        Ok(model.map(person_from_model))
    }
}

fn person_from_model(model: people::Model) -> Person {
    Person {
        id: model.id,
        name: model.name,
        gender: model.gender,
        height: model.height,
        hair_color: model.hair_color,
        eye_color: model.eye_color,
        birth_year: model.birth_year,
    }
}

// ── Favorite planet repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoritePlanetRepository {
    pub db: DatabaseConnection,
}

impl FavoritePlanetRepository for DbFavoritePlanetRepository {
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Planet>, HolocronServiceError> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find user for favorite planets")?;
        let Some(user) = user else {
            return Ok(vec![]);
        };
        let models = user
            .find_related(planets::Entity)
            .all(&self.db)
            .await
            .context("list favorite planets")?;
        Ok(models.into_iter().map(planet_from_model).collect())
    }

    async fn add(&self, user_id: i32, planet_id: i32) -> Result<bool, HolocronServiceError> {
        let existing = favorite_planets::Entity::find_by_id((user_id, planet_id))
            .one(&self.db)
            .await
            .context("find favorite planet for insert")?;
        if existing.is_some() {
            return Ok(false);
        }
        favorite_planets::ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(planet_id),
        }
        .insert(&self.db)
        .await
        .context("insert favorite planet")?;
        Ok(true)
    }

    async fn remove(&self, user_id: i32, planet_id: i32) -> Result<bool, HolocronServiceError> {
        let result = favorite_planets::Entity::delete_many()
            .filter(favorite_planets::Column::UserId.eq(user_id))
            .filter(favorite_planets::Column::PlanetId.eq(planet_id))
            .exec(&self.db)
            .await
            .context("delete favorite planet")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Favorite person repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoritePersonRepository {
    pub db: DatabaseConnection,
}

impl FavoritePersonRepository for DbFavoritePersonRepository {
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Person>, HolocronServiceError> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find user for favorite people")?;
        let Some(user) = user else {
            return Ok(vec![]);
        };
        let models = user
            .find_related(people::Entity)
            .all(&self.db)
            .await
            .context("list favorite people")?;
        Ok(models.into_iter().map(person_from_model).collect())
    }

    async fn add(&self, user_id: i32, person_id: i32) -> Result<bool, HolocronServiceError> {
        let existing = favorite_people::Entity::find_by_id((user_id, person_id))
            .one(&self.db)
            .await
            .context("find favorite person for insert")?;
        if existing.is_some() {
            return Ok(false);
        }
        favorite_people::ActiveModel {
            user_id: Set(user_id),
            person_id: Set(person_id),
        }
        .insert(&self.db)
        .await
        .context("insert favorite person")?;
        Ok(true)
    }

    async fn remove(&self, user_id: i32, person_id: i32) -> Result<bool, HolocronServiceError> {
        let result = favorite_people::Entity::delete_many()
            .filter(favorite_people::Column::UserId.eq(user_id))
            .filter(favorite_people::Column::PersonId.eq(person_id))
            .exec(&self.db)
            .await
            .context("delete favorite person")?;
        Ok(result.rows_affected > 0)
    }
}
