//! The annotated clock table: header plus one row per ranked configuration.

use serde_json::{json, Value};

use pllscan_core::{classify, Frequencies, Limits};

use crate::format::{format_row, HEADER};

/// A rendered table.
#[derive(Debug)]
pub struct TableOutput {
    /// Terminal text, one line per row, each terminated by `\n`.
    pub text: String,
    /// Machine-readable JSON (always populated).
    pub data: Value,
}

/// Ranked configurations together with the limits used to annotate them.
pub struct ClockTable<'a> {
    configs: &'a [Frequencies],
    limits: &'a Limits,
}

impl<'a> ClockTable<'a> {
    pub fn new(configs: &'a [Frequencies], limits: &'a Limits) -> Self {
        Self { configs, limits }
    }

    pub fn render(&self) -> TableOutput {
        let mut text = String::new();
        text.push_str(HEADER);
        text.push('\n');

        let mut rows = Vec::with_capacity(self.configs.len());
        for f in self.configs {
            let note = classify(f, self.limits).to_string();
            text.push_str(&format_row(f, &note));
            text.push('\n');

            rows.push(json!({
                "pll": f.pll(),
                "pll_mul": f.pll_mul(),
                "cpu": f.cpu(),
                "cpu_div": f.cpu_div(),
                "ram": f.ram(),
                "ram_div": f.ram_div(),
                "msd": f.msd(),
                "msd2": f.msd2(),
                "note": note,
            }));
        }

        let data = json!({
            "view": "clocks",
            "limits": self.limits,
            "rows": rows,
        });

        TableOutput { text, data }
    }
}
