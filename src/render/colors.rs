//! Color definitions for legend images

/// Legend overlay background (white card, as on the map)
pub(super) const COLOR_BACKGROUND: &str = "#FFFFFF";
pub(super) const COLOR_TEXT: &str = "#222222"; // Near black
pub(super) const COLOR_LABEL: &str = "#444444"; // Entry labels
