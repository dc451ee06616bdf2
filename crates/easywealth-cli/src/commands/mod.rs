pub mod accumulation;
pub mod catalog;
pub mod interest;
pub mod lending;
pub mod withdrawal;
