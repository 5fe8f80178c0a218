pub mod config;
pub mod inference;
pub mod models;
pub mod routes;
