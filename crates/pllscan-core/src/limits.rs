//! Compile-time thresholds driving the search, filter, and annotations.
//!
//! The overclock thresholds and the storage ratio floor are empirical guesses;
//! they are kept as named values rather than tuned.

use serde::Serialize;

use crate::error::{ClockError, Result};
use crate::frequencies::Frequencies;

/// Dividers available for both the CPU and RAM clocks, ascending.
pub const DIVIDERS: &[u32] = &[1, 2, 3, 4, 6, 8, 12, 16, 24, 32];

/// Every tunable of the clock search in one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Limits {
    /// Allowed dividers, strictly ascending.
    pub dividers: &'static [u32],
    /// Smallest PLL multiplier to try.
    pub pll_mul_min: u32,
    /// Largest PLL multiplier to try (inclusive).
    pub pll_mul_max: u32,
    /// Lower edge of the legal PLL output band, in MHz.
    pub pll_min_mhz: u32,
    /// Upper edge of the legal PLL output band, in MHz.
    pub pll_max_mhz: u32,
    /// CPU clocks above this are assumed unstable.
    pub cpu_max_mhz: f64,
    /// RAM clocks above this are assumed unstable.
    pub ram_max_mhz: f64,
    /// RAM divider / CPU divider must stay below this.
    pub max_divider_ratio: u32,
    /// CPU clocks at or above this are "fast" and restrict the CPU divider.
    pub fast_cpu_mhz: f64,
    /// Only CPU divider allowed for a fast CPU running 1:1 with RAM.
    pub coupled_cpu_div: u32,
    /// Only CPU divider allowed for a fast CPU decoupled from RAM.
    pub decoupled_cpu_div: u32,
    /// RAM divider 1 is flagged unstable once the PLL output exceeds this, in MHz.
    pub unstable_ram_div_pll_mhz: u32,
    /// The reference configuration; its CPU and RAM clocks are the overclock baselines.
    pub nominal: Frequencies,
    pub cpu_safe_ratio: f64,
    pub cpu_less_safe_ratio: f64,
    pub ram_safe_ratio: f64,
    pub ram_less_safe_ratio: f64,
    /// CPU and RAM overclocks within this relative distance are reported as one.
    pub similarity_tolerance: f64,
    /// Minimum CPU clock per unit of storage reference rate.
    pub storage_ratio_floor: f64,
}

impl Limits {
    pub const DEFAULT: Limits = Limits {
        dividers: DIVIDERS,
        pll_mul_min: 9,
        pll_mul_max: 39,
        pll_min_mhz: 100,
        pll_max_mhz: 500,
        cpu_max_mhz: 468.0,
        ram_max_mhz: 204.0,
        max_divider_ratio: 24,
        fast_cpu_mhz: 100.0,
        coupled_cpu_div: 2,
        decoupled_cpu_div: 1,
        unstable_ram_div_pll_mhz: 100,
        nominal: Frequencies::new(30, 1, 3),
        cpu_safe_ratio: 1.1,
        cpu_less_safe_ratio: 1.2,
        ram_safe_ratio: 1.5,
        ram_less_safe_ratio: 1.6,
        similarity_tolerance: 0.001,
        storage_ratio_floor: 3.0,
    };

    /// Check that the table describes a well-defined search.
    pub fn validate(&self) -> Result<()> {
        if self.dividers.is_empty() {
            return Err(ClockError::NoDividers);
        }
        if self.dividers.contains(&0) {
            return Err(ClockError::ZeroDivider);
        }
        // The lowest-usable-divider rule takes the first match.
        if let Some(pair) = self.dividers.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ClockError::UnsortedDividers {
                prev: pair[0],
                next: pair[1],
            });
        }
        if self.pll_mul_min > self.pll_mul_max {
            return Err(ClockError::EmptyMultiplierRange {
                min: self.pll_mul_min,
                max: self.pll_mul_max,
            });
        }
        if self.pll_min_mhz > self.pll_max_mhz {
            return Err(ClockError::InvertedPllBand {
                min: self.pll_min_mhz,
                max: self.pll_max_mhz,
            });
        }
        Ok(())
    }

    /// Whether `mhz` lies inside the legal PLL output band.
    pub fn in_pll_band(&self, mhz: f64) -> bool {
        f64::from(self.pll_min_mhz) <= mhz && mhz <= f64::from(self.pll_max_mhz)
    }

    /// Number of triples the generator produces.
    pub fn search_space_size(&self) -> usize {
        let muls = (self.pll_mul_min..=self.pll_mul_max).count();
        muls * self.dividers.len() * self.dividers.len()
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
