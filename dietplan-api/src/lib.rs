pub mod config;
pub mod error;
pub mod handler;
pub mod render;
pub mod routes;

pub use config::Config;
pub use error::Error;
