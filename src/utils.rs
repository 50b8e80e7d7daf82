/// Shared helpers for size display and reduction math
///
/// These are used by the reporter and the keep decision so the two agree on
/// how sizes and percentages are computed.
use crate::constants::{SIZE_RED_KB, SIZE_YELLOW_KB};
use console::style;

const KB: f64 = 1024.0;

pub fn size_in_kb(bytes: u64) -> f64 {
    bytes as f64 / KB
}

/// Format a byte count as "N.N KB", colored by magnitude: red above 500 KB,
/// yellow above 250 KB, green below. `plain` renders white regardless of
/// size, used when a size is repeated verbatim on the fallback line.
pub fn display_file_size(bytes: u64, plain: bool) -> String {
    let kb = size_in_kb(bytes);
    let text = format!("{:.1} KB", kb);

    let styled = if plain {
        style(text).white()
    } else if kb > SIZE_RED_KB {
        style(text).red()
    } else if kb > SIZE_YELLOW_KB {
        style(text).yellow()
    } else {
        style(text).green()
    };
    styled.to_string()
}

/// Percent size reduction from `original` to `candidate`, rounded to one
/// decimal place. Positive means the candidate is smaller. Callers must
/// guard against a zero `original`.
pub fn percent_change(original: u64, candidate: u64) -> f64 {
    let pct = (original as f64 - candidate as f64) / original as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}
