pub mod errors;
pub mod explorer_config;
