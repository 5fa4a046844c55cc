//! The clock configuration value type.

use serde::Serialize;

/// Reference oscillator feeding the PLL, in MHz.
pub const BASE_CLOCK_MHZ: u32 = 12;

/// Divisor applied to the scaled PLL output when deriving storage reference rates.
const STORAGE_REFERENCE_MHZ: f64 = 360.0;

/// Reference factor for the standard (mSD) storage rate.
const MSD_FACTOR: f64 = 24.0;

/// Reference factor for the high-capacity (SDHC) storage rate.
const MSD2_FACTOR: f64 = 48.0;

/// A PLL multiplier paired with CPU and RAM dividers.
///
/// Every frequency is derived on demand from the three integers; nothing is
/// validated at construction, see [`crate::constraints`] for legality.
///
/// Dividers must be nonzero. The built-in divider set only holds factors of
/// the form `2^a * 3^b` with `b <= 1`, and the PLL output is always a multiple
/// of 12, so [`cpu`](Self::cpu) and [`ram`](Self::ram) are exact in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Frequencies {
    pll_mul: u32,
    cpu_div: u32,
    ram_div: u32,
}

impl Frequencies {
    pub const fn new(pll_mul: u32, cpu_div: u32, ram_div: u32) -> Self {
        Self {
            pll_mul,
            cpu_div,
            ram_div,
        }
    }

    pub fn pll_mul(&self) -> u32 {
        self.pll_mul
    }

    pub fn cpu_div(&self) -> u32 {
        self.cpu_div
    }

    pub fn ram_div(&self) -> u32 {
        self.ram_div
    }

    /// PLL output in MHz.
    pub fn pll(&self) -> u32 {
        BASE_CLOCK_MHZ * self.pll_mul
    }

    /// CPU clock in MHz.
    pub fn cpu(&self) -> f64 {
        f64::from(self.pll()) / f64::from(self.cpu_div)
    }

    /// RAM clock in MHz.
    pub fn ram(&self) -> f64 {
        f64::from(self.pll()) / f64::from(self.ram_div)
    }

    /// Standard storage interface reference rate.
    pub fn msd(&self) -> f64 {
        MSD_FACTOR * f64::from(self.pll()) / STORAGE_REFERENCE_MHZ
    }

    /// High-capacity storage interface reference rate.
    pub fn msd2(&self) -> f64 {
        MSD2_FACTOR * f64::from(self.pll()) / STORAGE_REFERENCE_MHZ
    }
}
