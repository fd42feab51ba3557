//! Detection-year binning

use tracing::debug;

use super::expr::Expr;
use super::labels::{bin_bounds, bin_labels, format_bin_label};
use crate::config::{Config, Domain};
use crate::error::ConfigError;

/// One contiguous year interval mapped to a class index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    pub index: usize,
    pub lower: i64,
    pub upper: i64,
    pub label: String,
}

impl Bin {
    /// True when the domain ends before this bin starts.
    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }
}

/// Splits `[domain.start, domain.end]` into `n_bins` ascending bins of
/// `ceil(years / n_bins)` years each; the last bin may be narrower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinScheme {
    domain: Domain,
    n_bins: usize,
    bin_size: i64,
}

impl BinScheme {
    pub fn new(domain: Domain, n_bins: usize) -> Result<Self, ConfigError> {
        if domain.end < domain.start {
            return Err(ConfigError::DegenerateDomain {
                start: domain.start,
                end: domain.end,
            });
        }
        if n_bins == 0 {
            return Err(ConfigError::NoBins);
        }

        let n = n_bins as i64;
        let bin_size = (domain.years() + n - 1) / n;
        if bin_size <= 0 {
            return Err(ConfigError::NonPositiveBinSize(bin_size));
        }

        debug!(
            start = domain.start,
            end = domain.end,
            n_bins,
            bin_size,
            "bin scheme"
        );
        Ok(Self {
            domain,
            n_bins,
            bin_size,
        })
    }

    /// Scheme for the detection-year layer: one bin per palette color.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config.domain()?, config.yod_palette.len())
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    pub fn bin_size(&self) -> i64 {
        self.bin_size
    }

    /// Deferred class field for `raw` detection years.
    ///
    /// `floor((v - start) / bin_size)`, clamped to the last class for
    /// over-range years and masked for years before `start`.
    pub fn classify(&self, raw: Expr) -> Expr {
        let start = Expr::constant(self.domain.start as f64);
        let last = Expr::constant((self.n_bins - 1) as f64);

        ((raw.clone() - start.clone()) / Expr::constant(self.bin_size as f64))
            .floor()
            .to_int()
            .at_most(last)
            .update_mask(raw.gte(start))
    }

    /// Class of a single detection year, `None` when masked.
    pub fn class_of(&self, value: f64) -> Option<usize> {
        let start = self.domain.start as f64;
        if value.is_nan() || value < start {
            return None;
        }
        let index = ((value - start) / self.bin_size as f64).floor();
        Some((index as usize).min(self.n_bins - 1))
    }

    pub fn bins(&self) -> Vec<Bin> {
        (0..self.n_bins)
            .map(|index| {
                let (lower, upper) =
                    bin_bounds(self.domain.start, self.domain.end, self.bin_size, index);
                Bin {
                    index,
                    lower,
                    upper,
                    label: format_bin_label(lower, upper),
                }
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        bin_labels(self.domain.start, self.domain.end, self.bin_size, self.n_bins)
    }
}
