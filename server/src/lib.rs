pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod health;
pub mod infra;
pub mod middleware;
pub mod router;
pub mod state;
pub mod tracing;
pub mod usecase;
