/// Account record. `password` and `is_active` never leave the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// Catalog planet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub climate: String,
    pub diameter: i32,
    pub terrain: String,
    pub rotation_period: i32,
}

/// Catalog person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
}

/// A user together with both favorite collections, loaded from live
/// relationship data. This is the shape every serialized user is built from.
#[derive(Debug, Clone)]
pub struct UserWithFavorites {
    pub user: User,
    pub favorite_planets: Vec<Planet>,
    pub favorite_people: Vec<Person>,
}
