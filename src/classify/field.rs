//! In-memory bands, the concrete side of a deferred field

use crate::error::EvalError;

/// One evaluated single-band field. `None` is a masked (no-data) pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    values: Vec<Option<f64>>,
}

impl Field {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// Build from raw samples; NaN marks no-data.
    pub fn from_samples(samples: &[f64]) -> Self {
        Self {
            values: samples
                .iter()
                .map(|&v| if v.is_nan() { None } else { Some(v) })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// Named, co-registered bands of one detection output (`yod`, `mag`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandStack {
    bands: Vec<(String, Field)>,
}

impl BandStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a band. Every band must cover the same pixels as the first one.
    pub fn with_band(mut self, name: &str, field: Field) -> Result<Self, EvalError> {
        if let Some((_, first)) = self.bands.first()
            && first.len() != field.len()
        {
            return Err(EvalError::SizeMismatch {
                name: name.to_string(),
                expected: first.len(),
                actual: field.len(),
            });
        }
        self.bands.retain(|(n, _)| n != name);
        self.bands.push((name.to_string(), field));
        Ok(self)
    }

    pub fn band(&self, name: &str) -> Result<&Field, EvalError> {
        self.bands
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
            .ok_or_else(|| EvalError::MissingBand(name.to_string()))
    }

    pub fn pixel_count(&self) -> usize {
        self.bands.first().map_or(0, |(_, f)| f.len())
    }
}
