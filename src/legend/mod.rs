//! Legend composition: entries, panels and the composite container
//!
//! Plain data builders. Turning the tree into pixels or terminal text is
//! the job of a [`crate::render::LegendRenderer`].

mod container;
mod entry;
mod panel;

pub use container::{LegendContainer, Orientation};
pub use entry::{LegendEntry, build_entries};
pub use panel::LegendPanel;

#[cfg(test)]
mod tests;
