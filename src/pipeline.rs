//! Builds the full change-map composite: ordered map layers plus the legend

use tracing::{debug, info};

use crate::classify::{BinScheme, Expr};
use crate::config::{Config, VisParams};
use crate::error::ConfigError;
use crate::layer::LayerKind;
use crate::legend::{LegendContainer, LegendPanel, Orientation};

/// One `(field, parameters, name)` tuple for the rendering sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub field: Expr,
    pub vis: VisParams,
}

impl Layer {
    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }
}

/// Everything one rendering pass needs. Built in one go or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    pub scheme: BinScheme,
    pub layers: Vec<Layer>,
    pub legend: LegendContainer,
}

impl Composite {
    /// Validate `config`, then derive layers and legend from it.
    ///
    /// Legend metadata comes from the static parameters only; no layer is
    /// evaluated here.
    pub fn build(config: &Config, orientation: Orientation) -> Result<Self, ConfigError> {
        config.validate()?;
        let scheme = BinScheme::from_config(config)?;

        let layers: Vec<Layer> = LayerKind::ORDER
            .iter()
            .map(|&kind| build_layer(kind, config, &scheme))
            .collect();

        let panels = LayerKind::ORDER
            .iter()
            .map(|&kind| build_panel(kind, config, &scheme))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            layers = layers.len(),
            bins = scheme.n_bins(),
            bin_size = scheme.bin_size(),
            "composite built"
        );

        Ok(Self {
            scheme,
            layers,
            legend: LegendContainer::build(panels, orientation),
        })
    }
}

/// Authored parameters of a continuous layer; `None` for the classified one.
fn continuous_params(kind: LayerKind, config: &Config) -> Option<&VisParams> {
    match kind {
        LayerKind::Magnitude => Some(&config.magnitude),
        LayerKind::Duration => Some(&config.duration),
        LayerKind::Prevalence => Some(&config.prevalence),
        LayerKind::Rate => Some(&config.rate),
        LayerKind::YearOfDetection => None,
    }
}

fn build_layer(kind: LayerKind, config: &Config, scheme: &BinScheme) -> Layer {
    let raw = Expr::band(kind.band());
    let (field, vis) = match continuous_params(kind, config) {
        Some(params) => (raw, params.clone()),
        None => (scheme.classify(raw), VisParams::classes(&config.yod_palette)),
    };
    debug!(layer = kind.display_name(), field = %field, "layer");
    Layer { kind, field, vis }
}

fn build_panel(
    kind: LayerKind,
    config: &Config,
    scheme: &BinScheme,
) -> Result<LegendPanel, ConfigError> {
    match continuous_params(kind, config) {
        Some(params) => LegendPanel::continuous(kind.legend_title(), params),
        None => LegendPanel::discrete(kind.legend_title(), &config.yod_palette, &scheme.labels()),
    }
}
