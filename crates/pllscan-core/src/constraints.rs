//! Hardware legality and stability rules for clock configurations.

use crate::frequencies::Frequencies;
use crate::limits::Limits;

/// Check a configuration against the built-in limits.
pub fn fits_constraints(f: &Frequencies) -> bool {
    fits_constraints_with(f, &Limits::DEFAULT)
}

/// Check a configuration against an explicit limits table.
///
/// # Panics
///
/// Panics if `f` carries a zero CPU divider.
pub fn fits_constraints_with(f: &Frequencies, limits: &Limits) -> bool {
    let (cpu, ram) = (f.cpu(), f.ram());

    // Clocks above the ceilings are assumed unstable.
    if cpu > limits.cpu_max_mhz || ram > limits.ram_max_mhz {
        return false;
    }
    if !limits.in_pll_band(f64::from(f.pll())) {
        return false;
    }
    if f.ram_div() % f.cpu_div() != 0 {
        return false;
    }
    if f.ram_div() / f.cpu_div() >= limits.max_divider_ratio {
        return false;
    }

    if cpu >= limits.fast_cpu_mhz {
        if cpu == ram {
            f.cpu_div() == limits.coupled_cpu_div
        } else {
            f.cpu_div() == limits.decoupled_cpu_div
        }
    } else {
        // A slow CPU must use the lowest divider that lifts it back into the PLL band.
        lowest_usable_divider(cpu, limits) == Some(f.cpu_div())
    }
}

/// The smallest divider `i` for which `cpu * i` lands in the PLL band.
pub fn lowest_usable_divider(cpu: f64, limits: &Limits) -> Option<u32> {
    limits
        .dividers
        .iter()
        .copied()
        .find(|&i| limits.in_pll_band(cpu * f64::from(i)))
}
