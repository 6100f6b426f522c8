mod helpers;

mod favorite_test;
mod planet_test;
mod user_test;
