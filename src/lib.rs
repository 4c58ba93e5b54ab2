pub mod analyzer;
pub mod app_state;
pub mod audit;
pub mod config;
pub mod fetcher;
pub mod health;
pub mod routes;
pub mod telemetry;
