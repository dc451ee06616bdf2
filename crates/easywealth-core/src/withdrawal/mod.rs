pub mod fire;
pub mod swp;
