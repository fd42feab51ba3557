//! Legend labels for discrete year bins and continuous ranges
//!
//! The two rules differ on purpose: year bins use the integer, ceil-sized
//! bins of the binner; continuous ranges split `[min, max]` linearly.

use crate::config::VisParams;

/// Inclusive year bounds of bin `index`, the upper bound clamped to `domain_max`.
pub(crate) fn bin_bounds(
    domain_min: i32,
    domain_max: i32,
    bin_size: i64,
    index: usize,
) -> (i64, i64) {
    let lower = domain_min as i64 + index as i64 * bin_size;
    let upper = (domain_min as i64 + (index as i64 + 1) * bin_size - 1).min(domain_max as i64);
    (lower, upper)
}

/// `"lower"` for a one-year bin, `"lower - upper"` otherwise. Bins that start
/// past the domain end keep their inverted bounds in the label.
pub(crate) fn format_bin_label(lower: i64, upper: i64) -> String {
    if lower == upper {
        lower.to_string()
    } else {
        format!("{} - {}", lower, upper)
    }
}

/// Labels for `n_bins` year bins, in ascending bin order.
pub fn bin_labels(domain_min: i32, domain_max: i32, bin_size: i64, n_bins: usize) -> Vec<String> {
    (0..n_bins)
        .map(|i| {
            let (lower, upper) = bin_bounds(domain_min, domain_max, bin_size, i);
            format_bin_label(lower, upper)
        })
        .collect()
}

/// One label per palette slot, splitting `[min, max]` into equal-width
/// intervals rendered with no decimals. The last interval ends at `max`.
pub fn continuous_labels(params: &VisParams) -> Vec<String> {
    let n = params.palette.len();
    let step = (params.max - params.min) / n as f64;

    (0..n)
        .map(|i| {
            let from = params.min + i as f64 * step;
            let to = if i == n - 1 {
                params.max
            } else {
                params.min + (i + 1) as f64 * step
            };
            format!("{} – {}", format_bound(from), format_bound(to))
        })
        .collect()
}

fn format_bound(v: f64) -> String {
    // + 0.0 turns -0 into 0
    format!("{:.0}", v.round() + 0.0)
}
