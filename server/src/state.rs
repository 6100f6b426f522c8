use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbFavoritePersonRepository, DbFavoritePlanetRepository, DbPersonRepository, DbPlanetRepository,
    DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn planet_repo(&self) -> DbPlanetRepository {
        DbPlanetRepository {
            db: self.db.clone(),
        }
    }

    pub fn person_repo(&self) -> DbPersonRepository {
        DbPersonRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_planet_repo(&self) -> DbFavoritePlanetRepository {
        DbFavoritePlanetRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_person_repo(&self) -> DbFavoritePersonRepository {
        DbFavoritePersonRepository {
            db: self.db.clone(),
        }
    }
}
