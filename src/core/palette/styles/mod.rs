pub mod ember;
pub mod fire;
pub mod rainbow;
