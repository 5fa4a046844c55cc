//! Clock configuration model for a 12 MHz-referenced PLL with CPU and RAM dividers.
//!
//! The search runs as a three-stage pipeline:
//! - **Generator:** every `(pll_mul, cpu_div, ram_div)` triple in the fixed ranges
//! - **Filter:** hardware legality and stability rules ([`fits_constraints`])
//! - **Ranking:** CPU descending, then RAM descending ([`search::rank`])
//!
//! Each surviving configuration can be annotated with [`notes`].

pub mod constraints;
pub mod error;
pub mod frequencies;
pub mod limits;
pub mod notes;
pub mod search;

pub use constraints::{fits_constraints, fits_constraints_with, lowest_usable_divider};
pub use error::{ClockError, Result};
pub use frequencies::Frequencies;
pub use limits::Limits;
pub use notes::{classify, notes, Note, Stability};
pub use search::{enumerate, enumerate_with, rank};
