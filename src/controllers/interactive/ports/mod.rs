//! Port definitions for the interactive session.

pub mod presenter;
