pub mod bindings;
pub mod events;
pub mod translator;
