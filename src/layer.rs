//! Change-map products, one rendered layer each

/// Products of the disturbance change map, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Magnitude,
    YearOfDetection,
    Duration,
    Prevalence,
    Rate,
}

impl LayerKind {
    /// Order the layers are added to the map. Legend panels follow it too,
    /// so panel position matches layer stacking.
    pub const ORDER: [LayerKind; 5] = [
        Self::Magnitude,
        Self::YearOfDetection,
        Self::Duration,
        Self::Prevalence,
        Self::Rate,
    ];

    /// Order of the printed product summaries.
    pub const SUMMARY_ORDER: [LayerKind; 5] = [
        Self::Magnitude,
        Self::Duration,
        Self::YearOfDetection,
        Self::Rate,
        Self::Prevalence,
    ];

    /// Band name in the detection output.
    pub fn band(&self) -> &'static str {
        match self {
            Self::Magnitude => "mag",
            Self::YearOfDetection => "yod",
            Self::Duration => "dur",
            Self::Prevalence => "preval",
            Self::Rate => "rate",
        }
    }

    /// Layer name shown in the map's layer list.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Magnitude => "Magnitude of Change",
            Self::YearOfDetection => "Year of Detection (binned)",
            Self::Duration => "Duration",
            Self::Prevalence => "Prevalence",
            Self::Rate => "Rate",
        }
    }

    pub fn legend_title(&self) -> &'static str {
        match self {
            Self::Duration => "Duration (years)",
            other => other.display_name(),
        }
    }

    /// Short guide to reading the product.
    pub fn description(&self) -> &'static [&'static str] {
        match self {
            Self::Magnitude => &[
                "Spectral distance between the pre-disturbance value and the disturbance trough.",
                "High values point to severe loss (stand-replacing fire, clearcut).",
                "Low values suggest subtle change such as thinning.",
            ],
            Self::YearOfDetection => &[
                "Calendar year in which the disturbance segment starts.",
                "Grouped into bins; each color covers the years in its label.",
                "Links events to fire records, storms or land-use change.",
            ],
            Self::Duration => &[
                "Number of consecutive years the disturbance lasts.",
                "1-2 years: abrupt events. 5-20 years: gradual decline or chronic stress.",
            ],
            Self::Prevalence => &[
                "Index value before the disturbance.",
                "High: dense vegetation before the event. Low: already sparse or degraded.",
                "The same magnitude means more on a low starting value.",
            ],
            Self::Rate => &[
                "Slope of the disturbance segment: magnitude divided by duration.",
                "Steep rates mean abrupt change; gentle rates mean slow decline.",
            ],
        }
    }
}

/// Source of the product summaries.
pub const SUMMARY_REFERENCE: &str =
    "OpenMRV LandTrendr Module, https://openmrv.org/web/guest/w/modules/mrv/modules_2/landtrendr";
