pub mod app_config;
pub mod seed_file;

pub use app_config::Config;
pub use seed_file::{load_catalog, SeedError};
