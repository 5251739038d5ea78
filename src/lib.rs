pub mod auth;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod models;
pub mod routes;
pub mod storage;
