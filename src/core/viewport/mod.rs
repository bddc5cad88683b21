pub mod controller;
pub mod delta;
pub mod errors;
pub mod limits;
pub mod state;
