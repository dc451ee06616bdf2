pub mod growth;
pub mod ppf;
pub mod rd;
pub mod sip;
