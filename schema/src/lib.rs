pub mod favorite_people;
pub mod favorite_planets;
pub mod people;
pub mod planets;
pub mod users;
