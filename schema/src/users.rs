use sea_orm::entity::prelude::*;

/// Account record. Favorites hang off this table via the two join entities.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planets::Entity")]
    FavoritePlanets,
    #[sea_orm(has_many = "super::favorite_people::Entity")]
    FavoritePeople,
}

impl Related<super::favorite_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanets.def()
    }
}

impl Related<super::favorite_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePeople.def()
    }
}

// Many-to-many: users -> planets through favorite_planets.
impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_planets::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_planets::Relation::User.def().rev())
    }
}

// Many-to-many: users -> people through favorite_people.
impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_people::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_people::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
