pub mod errors;
pub mod evaluator;
pub mod params;
pub mod result;
