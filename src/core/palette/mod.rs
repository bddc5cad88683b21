pub mod errors;
pub mod factory;
pub mod generator;
pub mod kinds;
pub mod palette;
pub mod styles;
