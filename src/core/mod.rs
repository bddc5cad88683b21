pub mod actions;
pub mod budget;
pub mod controls;
pub mod data;
pub mod fractals;
pub mod palette;
pub mod viewport;
