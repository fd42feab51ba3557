//! Detection-year classification and range labels

mod binner;
mod expr;
mod field;
mod labels;

pub use binner::{Bin, BinScheme};
pub use expr::Expr;
pub use field::{BandStack, Field};
pub use labels::{bin_labels, continuous_labels};
