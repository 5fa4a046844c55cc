//! Generate, filter, and rank every configuration in the search space.

use crate::constraints::fits_constraints_with;
use crate::error::Result;
use crate::frequencies::Frequencies;
use crate::limits::Limits;

/// Every `(pll_mul, cpu_div, ram_div)` triple, multiplier outermost.
pub fn candidates(limits: &Limits) -> impl Iterator<Item = Frequencies> + '_ {
    (limits.pll_mul_min..=limits.pll_mul_max).flat_map(move |pll_mul| {
        limits.dividers.iter().flat_map(move |&cpu_div| {
            limits
                .dividers
                .iter()
                .map(move |&ram_div| Frequencies::new(pll_mul, cpu_div, ram_div))
        })
    })
}

/// Order by CPU descending, ties broken by RAM descending.
///
/// Two stable passes: RAM first as the secondary key, then CPU as the primary.
pub fn rank(configs: &mut [Frequencies]) {
    configs.sort_by(|a, b| b.ram().total_cmp(&a.ram()));
    configs.sort_by(|a, b| b.cpu().total_cmp(&a.cpu()));
}

/// All legal configurations under the built-in limits, ranked.
pub fn enumerate() -> Vec<Frequencies> {
    search(&Limits::DEFAULT)
}

/// All legal configurations under `limits`, ranked.
pub fn enumerate_with(limits: &Limits) -> Result<Vec<Frequencies>> {
    limits.validate()?;
    Ok(search(limits))
}

fn search(limits: &Limits) -> Vec<Frequencies> {
    let mut accepted: Vec<Frequencies> = candidates(limits)
        .filter(|f| {
            let fits = fits_constraints_with(f, limits);
            if !fits {
                log::trace!(
                    "rejected pll_mul={} cpu_div={} ram_div={}",
                    f.pll_mul(),
                    f.cpu_div(),
                    f.ram_div()
                );
            }
            fits
        })
        .collect();

    log::debug!(
        "{} of {} candidates fit the constraints",
        accepted.len(),
        limits.search_space_size()
    );

    rank(&mut accepted);
    accepted
}
