pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};
