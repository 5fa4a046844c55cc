//! Human-readable remarks on overclock margins and storage speed.
//!
//! Rules are checked in priority order and the first match wins:
//! 1. RAM divider 1 above the PLL floor
//! 2. the nominal configuration
//! 3. overclock percentages with a stability verdict
//! 4. storage interface speed when nothing is overclocked

use std::fmt;

use crate::frequencies::Frequencies;
use crate::limits::Limits;

/// How far past the safe thresholds an overclock goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Stable,
    LessStable,
    LikelyUnstable,
}

impl Stability {
    /// Verdict for a pair of overclock ratios, assuming at least one exceeds 1.
    fn of(cpu_oc: f64, ram_oc: f64, limits: &Limits) -> Self {
        if cpu_oc > limits.cpu_less_safe_ratio || ram_oc > limits.ram_less_safe_ratio {
            Stability::LikelyUnstable
        } else if cpu_oc > limits.cpu_safe_ratio || ram_oc > limits.ram_safe_ratio {
            Stability::LessStable
        } else {
            Stability::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::LessStable => "less stable",
            Stability::LikelyUnstable => "likely unstable",
        }
    }
}

/// The rule that fired for a configuration.
///
/// Overclock variants carry ratios against the nominal clocks, not percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Note {
    None,
    UnstableRamDivider,
    Nominal,
    Overclocked {
        ratio: f64,
        stability: Stability,
    },
    CpuRamOverclocked {
        cpu: f64,
        ram: f64,
        stability: Stability,
    },
    CpuOverclocked {
        ratio: f64,
        stability: Stability,
    },
    RamOverclocked {
        ratio: f64,
        stability: Stability,
    },
    StorageTooSlow,
    SdhcTooSlow,
}

impl Note {
    pub fn is_empty(&self) -> bool {
        matches!(self, Note::None)
    }
}

/// `(ratio - 1) * 100`, one decimal, padded to four columns.
fn percent(ratio: f64) -> String {
    format!("{:4.1}%", (ratio - 1.0) * 100.0)
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::None => Ok(()),
            Note::UnstableRamDivider => write!(f, "Unstable: RAM div /1 > 100 MHz"),
            Note::Nominal => write!(f, "The nominal clock speed"),
            Note::Overclocked { ratio, stability } => {
                write!(f, "Overclocked {} ({})", percent(*ratio), stability.label())
            }
            Note::CpuRamOverclocked {
                cpu,
                ram,
                stability,
            } => write!(
                f,
                "CPU +{}, RAM +{} ({})",
                percent(*cpu),
                percent(*ram),
                stability.label()
            ),
            Note::CpuOverclocked { ratio, stability } => {
                write!(f, "CPU overclocked {} ({})", percent(*ratio), stability.label())
            }
            Note::RamOverclocked { ratio, stability } => {
                write!(f, "RAM overclocked {} ({})", percent(*ratio), stability.label())
            }
            Note::StorageTooSlow => write!(
                f,
                "interface may be too slow for both legacy and high-capacity storage modes"
            ),
            Note::SdhcTooSlow => write!(
                f,
                "interface may be too slow for the high-capacity storage mode"
            ),
        }
    }
}

/// Annotate a configuration using the built-in limits.
pub fn notes(f: &Frequencies) -> String {
    classify(f, &Limits::DEFAULT).to_string()
}

/// Pick the first matching remark for `f`.
pub fn classify(f: &Frequencies, limits: &Limits) -> Note {
    if f.pll() > limits.unstable_ram_div_pll_mhz && f.ram_div() == 1 {
        return Note::UnstableRamDivider;
    }
    if *f == limits.nominal {
        return Note::Nominal;
    }

    let cpu_oc = f.cpu() / limits.nominal.cpu();
    let ram_oc = f.ram() / limits.nominal.ram();
    let tolerance = limits.similarity_tolerance;
    let similar = (1.0 - tolerance..=1.0 + tolerance).contains(&(cpu_oc / ram_oc));

    match (cpu_oc > 1.0, ram_oc > 1.0) {
        (true, true) if similar => Note::Overclocked {
            ratio: cpu_oc,
            stability: Stability::of(cpu_oc, ram_oc, limits),
        },
        (true, true) => Note::CpuRamOverclocked {
            cpu: cpu_oc,
            ram: ram_oc,
            stability: Stability::of(cpu_oc, ram_oc, limits),
        },
        (true, false) => Note::CpuOverclocked {
            ratio: cpu_oc,
            stability: Stability::of(cpu_oc, ram_oc, limits),
        },
        (false, true) => Note::RamOverclocked {
            ratio: ram_oc,
            stability: Stability::of(cpu_oc, ram_oc, limits),
        },
        (false, false) => storage_note(f, limits),
    }
}

fn storage_note(f: &Frequencies, limits: &Limits) -> Note {
    let floor = limits.storage_ratio_floor;
    let msd_slow = f.cpu() / f.msd() < floor;
    let msd2_slow = f.cpu() / f.msd2() < floor;
    match (msd_slow, msd2_slow) {
        (true, true) => Note::StorageTooSlow,
        (_, true) => Note::SdhcTooSlow,
        _ => Note::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(pll_mul: u32, cpu_div: u32, ram_div: u32) -> String {
        notes(&Frequencies::new(pll_mul, cpu_div, ram_div))
    }

    #[test]
    fn unstable_ram_divider() {
        assert_eq!(note(10, 1, 1), "Unstable: RAM div /1 > 100 MHz");
        // Outranks every overclock remark
        assert_eq!(note(39, 2, 1), "Unstable: RAM div /1 > 100 MHz");
    }

    #[test]
    fn ram_divider_one_at_low_pll_is_not_flagged() {
        let n = classify(&Frequencies::new(8, 1, 1), &Limits::DEFAULT);
        assert_ne!(n, Note::UnstableRamDivider);
    }

    #[test]
    fn nominal() {
        assert_eq!(note(30, 1, 3), "The nominal clock speed");
    }

    #[test]
    fn unified_overclock_stable() {
        let f = Frequencies::new(33, 1, 3);
        assert_eq!(f.cpu(), 396.0);
        assert_eq!(f.ram(), 132.0);
        assert_eq!(notes(&f), "Overclocked 10.0% (stable)");
    }

    #[test]
    fn unified_overclock_less_stable() {
        assert_eq!(note(35, 1, 3), "Overclocked 16.7% (less stable)");
    }

    #[test]
    fn unified_overclock_likely_unstable() {
        assert_eq!(note(39, 1, 3), "Overclocked 30.0% (likely unstable)");
    }

    #[test]
    fn separate_overclocks() {
        // 372 MHz CPU, 186 MHz RAM
        assert_eq!(note(31, 1, 2), "CPU + 3.3%, RAM +55.0% (less stable)");
    }

    #[test]
    fn cpu_only_overclock() {
        // 384 MHz CPU, 96 MHz RAM
        assert_eq!(note(32, 1, 4), "CPU overclocked  6.7% (stable)");
    }

    #[test]
    fn ram_only_overclock() {
        assert_eq!(note(22, 2, 2), "RAM overclocked 10.0% (stable)");
        assert_eq!(note(34, 2, 2), "RAM overclocked 70.0% (likely unstable)");
    }

    #[test]
    fn overclock_outranks_storage_remark() {
        // 156 MHz CPU and RAM: cpu_div 3 alone would trigger the SDHC remark
        let f = Frequencies::new(39, 3, 3);
        assert!(f.cpu() / f.msd2() < 3.0);
        assert_eq!(notes(&f), "RAM overclocked 30.0% (stable)");
    }

    #[test]
    fn unstable_ram_divider_threshold_is_independent_of_pll_band() {
        let wide_band = Limits {
            pll_min_mhz: 50,
            ..Limits::DEFAULT
        };
        // 96 MHz PLL: inside the widened band, still under the warning threshold
        let f = Frequencies::new(8, 1, 1);
        assert_ne!(classify(&f, &wide_band), Note::UnstableRamDivider);

        let strict = Limits {
            unstable_ram_div_pll_mhz: 90,
            ..Limits::DEFAULT
        };
        assert_eq!(classify(&f, &strict), Note::UnstableRamDivider);
    }

    #[test]
    fn storage_too_slow_for_both() {
        let f = Frequencies::new(9, 6, 6);
        assert!(f.cpu() / f.msd() < 3.0);
        assert_eq!(
            notes(&f),
            "interface may be too slow for both legacy and high-capacity storage modes"
        );
    }

    #[test]
    fn storage_too_slow_for_sdhc() {
        let sdhc = "interface may be too slow for the high-capacity storage mode";
        assert_eq!(note(9, 3, 3), sdhc);
        assert_eq!(note(9, 4, 4), sdhc);
    }

    #[test]
    fn no_remark() {
        assert_eq!(note(9, 2, 2), "");
        assert_eq!(note(30, 1, 4), "");
        assert!(classify(&Frequencies::new(30, 1, 4), &Limits::DEFAULT).is_empty());
    }

    #[test]
    fn classify_carries_ratios() {
        match classify(&Frequencies::new(33, 1, 3), &Limits::DEFAULT) {
            Note::Overclocked { ratio, stability } => {
                assert_eq!(ratio, 1.1);
                assert_eq!(stability, Stability::Stable);
            }
            other => panic!("unexpected note: {other:?}"),
        }
    }

    #[test]
    fn thresholds_follow_limits() {
        let strict = Limits {
            cpu_safe_ratio: 1.05,
            ..Limits::DEFAULT
        };
        let n = classify(&Frequencies::new(32, 1, 4), &strict);
        assert!(matches!(
            n,
            Note::CpuOverclocked {
                stability: Stability::LessStable,
                ..
            }
        ));
    }
}
