//! Fixed-width column helpers for the clock table.

use pllscan_core::Frequencies;

/// Column header matching [`format_row`].
pub const HEADER: &str = "  PLL *mul    CPU /div    RAM /div    mSD    SD2  Notes";

/// A frequency in MHz, one decimal, right-aligned to five columns.
pub fn format_mhz(mhz: f64) -> String {
    format!("{mhz:5.1}")
}

/// One table row; the note is appended after two spaces when present.
pub fn format_row(f: &Frequencies, note: &str) -> String {
    let line = format!(
        "{} *{:<2}   {} /{:<2}   {} /{:<2}   {}   {}",
        format_mhz(f64::from(f.pll())),
        f.pll_mul(),
        format_mhz(f.cpu()),
        f.cpu_div(),
        format_mhz(f.ram()),
        f.ram_div(),
        format_mhz(f.msd()),
        format_mhz(f.msd2()),
    );
    if note.is_empty() {
        line
    } else {
        format!("{line}  {note}")
    }
}
