pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod server;
pub mod store;
