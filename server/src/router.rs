use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    favorite::{
        create_favorite_person, create_favorite_planet, delete_favorite_person,
        delete_favorite_planet,
    },
    person::{get_people, get_person},
    planet::{get_planet, get_planets},
    user::{get_user_favorites, get_users},
};
use crate::health::{healthz, readyz};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// One entry of the route map served at `/`.
#[derive(Clone, Copy, Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
}

/// Every registered API route. Kept next to `build_router` so the map at `/`
/// stays in step with the router itself.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        method: "GET",
        path: "/",
    },
    RouteEntry {
        method: "GET",
        path: "/healthz",
    },
    RouteEntry {
        method: "GET",
        path: "/readyz",
    },
    RouteEntry {
        method: "GET",
        path: "/user",
    },
    RouteEntry {
        method: "GET",
        path: "/user/{id}/favorites",
    },
    RouteEntry {
        method: "GET",
        path: "/people",
    },
    RouteEntry {
        method: "GET",
        path: "/people/{id}",
    },
    RouteEntry {
        method: "GET",
        path: "/planets",
    },
    RouteEntry {
        method: "GET",
        path: "/planets/{id}",
    },
    RouteEntry {
        method: "POST",
        path: "/favorite/planet/{planet_id}",
    },
    RouteEntry {
        method: "DELETE",
        path: "/favorite/planet/{planet_id}",
    },
    RouteEntry {
        method: "POST",
        path: "/favorite/people/{person_id}",
    },
    RouteEntry {
        method: "DELETE",
        path: "/favorite/people/{person_id}",
    },
];

/// Handler for `GET /` — the auto-generated route map.
pub async fn route_map() -> Json<Vec<RouteEntry>> {
    Json(ROUTES.to_vec())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Sitemap + health
        .route("/", get(route_map))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/user", get(get_users))
        .route("/user/{id}/favorites", get(get_user_favorites))
        // Catalog
        .route("/people", get(get_people))
        .route("/people/{id}", get(get_person))
        .route("/planets", get(get_planets))
        .route("/planets/{id}", get(get_planet))
        // Favorites
        .route(
            "/favorite/planet/{planet_id}",
            post(create_favorite_planet).delete(delete_favorite_planet),
        )
        .route(
            "/favorite/people/{person_id}",
            post(create_favorite_person).delete(delete_favorite_person),
        )
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
