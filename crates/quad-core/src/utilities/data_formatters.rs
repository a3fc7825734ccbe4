//! Data formatting helpers.

use crate::Real;

/// Format a real number with the given number of decimal places.
pub fn format_real(value: Real, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format a ratio as a percentage string (e.g. `0.05` → `"5.000000 %"`).
pub fn format_percent(ratio: Real, decimals: usize) -> String {
    format!("{:.prec$} %", ratio * 100.0, prec = decimals)
}

/// Render one `x<TAB><TAB>f(x)` table row.
pub fn format_sample_row(x: Real, y: Real, decimals: usize) -> String {
    format!("{}\t\t{}", format_real(x, decimals), format_real(y, decimals))
}
