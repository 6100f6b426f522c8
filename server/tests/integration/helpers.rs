use axum_test::TestServer;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection,
};

use holocron_migration::{Migrator, MigratorTrait};
use holocron_schema::{people, planets, users};
use holocron_server::router::build_router;
use holocron_server::state::AppState;

/// Fresh in-memory SQLite with the full schema applied. Pinned to a single
/// pooled connection so every query sees the same database.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

/// Seed two users, two planets, and two people with fixed ids.
pub async fn seed(db: &DatabaseConnection) {
    users::ActiveModel {
        id: Set(1),
        email: Set("luke@rebellion.example".to_owned()),
        password: Set("bluemilk".to_owned()),
        is_active: Set(true),
    }
    .insert(db)
    .await
    .expect("seed user 1");

    users::ActiveModel {
        id: Set(2),
        email: Set("leia@rebellion.example".to_owned()),
        password: Set("alderaan".to_owned()),
        is_active: Set(true),
    }
    .insert(db)
    .await
    .expect("seed user 2");

    planets::ActiveModel {
        id: Set(1),
        name: Set("Tatooine".to_owned()),
        population: Set(200_000),
        climate: Set("arid".to_owned()),
        diameter: Set(10465),
        terrain: Set("desert".to_owned()),
        rotation_period: Set(23),
    }
    .insert(db)
    .await
    .expect("seed planet 1");

    planets::ActiveModel {
        id: Set(2),
        name: Set("Hoth".to_owned()),
        population: Set(0),
        climate: Set("frozen".to_owned()),
        diameter: Set(7200),
        terrain: Set("tundra".to_owned()),
        rotation_period: Set(23),
    }
    .insert(db)
    .await
    .expect("seed planet 2");

    people::ActiveModel {
        id: Set(1),
        name: Set("Obi-Wan Kenobi".to_owned()),
        gender: Set("male".to_owned()),
        height: Set("182".to_owned()),
        hair_color: Set("auburn".to_owned()),
        eye_color: Set("blue-gray".to_owned()),
        birth_year: Set("57BBY".to_owned()),
    }
    .insert(db)
    .await
    .expect("seed person 1");

    people::ActiveModel {
        id: Set(2),
        name: Set("Chewbacca".to_owned()),
        gender: Set("male".to_owned()),
        height: Set("228".to_owned()),
        hair_color: Set("brown".to_owned()),
        eye_color: Set("blue".to_owned()),
        birth_year: Set("200BBY".to_owned()),
    }
    .insert(db)
    .await
    .expect("seed person 2");
}

/// Seeded test server plus a handle to its database for direct assertions
/// on the join tables.
pub async fn test_server() -> (TestServer, DatabaseConnection) {
    let db = test_db().await;
    seed(&db).await;
    let server =
        TestServer::new(build_router(AppState { db: db.clone() })).expect("build test server");
    (server, db)
}
