pub mod catalog;
pub mod error;
pub mod time_value;
pub mod types;
pub mod validation;

#[cfg(feature = "accumulation")]
pub mod accumulation;

#[cfg(feature = "withdrawal")]
pub mod withdrawal;

#[cfg(feature = "lending")]
pub mod lending;

#[cfg(feature = "interest")]
pub mod interest;

#[cfg(all(
    feature = "accumulation",
    feature = "withdrawal",
    feature = "lending",
    feature = "interest"
))]
pub mod dispatch;

pub use error::EasyWealthError;
pub use types::*;

/// Standard result type for all easywealth operations
pub type EasyWealthResult<T> = Result<T, EasyWealthError>;
