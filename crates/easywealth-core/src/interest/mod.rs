pub mod cagr;
pub mod fd;
pub mod simple;
