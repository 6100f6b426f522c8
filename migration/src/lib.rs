use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20260830_000001_create_users;
mod m20260830_000002_create_planets;
mod m20260830_000003_create_people;
mod m20260830_000004_create_favorite_planets;
mod m20260830_000005_create_favorite_people;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_create_users::Migration),
            Box::new(m20260830_000002_create_planets::Migration),
            Box::new(m20260830_000003_create_people::Migration),
            Box::new(m20260830_000004_create_favorite_planets::Migration),
            Box::new(m20260830_000005_create_favorite_people::Migration),
        ]
    }
}
