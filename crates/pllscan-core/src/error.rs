//! Error types for clock configuration searches.

use thiserror::Error;

/// Convenience alias for results within the core crate.
pub type Result<T> = std::result::Result<T, ClockError>;

/// Errors raised when a limits table cannot drive a well-defined search.
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("divider set is empty")]
    NoDividers,

    #[error("divider set contains zero")]
    ZeroDivider,

    #[error("divider set must be strictly ascending, found {prev} before {next}")]
    UnsortedDividers { prev: u32, next: u32 },

    #[error("PLL multiplier range {min}..={max} is empty")]
    EmptyMultiplierRange { min: u32, max: u32 },

    #[error("PLL band [{min}, {max}] MHz is inverted")]
    InvertedPllBand { min: u32, max: u32 },
}
