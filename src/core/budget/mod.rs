pub mod errors;
pub mod growth;
pub mod policy;
