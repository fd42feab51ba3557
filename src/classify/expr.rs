//! Deferred per-pixel expressions
//!
//! An [`Expr`] describes a pixel transform without running it. The compute
//! platform (here [`BandStack`]) evaluates it on demand, possibly several
//! times; evaluation has no side effects, so every run gives the same field.

use std::fmt;
use std::ops::{Div, Sub};

use super::field::{BandStack, Field};
use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A named input band.
    Band(String),
    Constant(f64),
    Sub(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Floor(Box<Expr>),
    /// Truncate toward zero.
    ToInt(Box<Expr>),
    /// Pixelwise minimum, used to clamp from above.
    Min(Box<Expr>, Box<Expr>),
    /// 1.0 where `lhs >= rhs`, else 0.0.
    Gte(Box<Expr>, Box<Expr>),
    /// Keep the value where the mask is non-zero, no-data elsewhere.
    Mask(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn band(name: &str) -> Self {
        Self::Band(name.to_string())
    }

    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    pub fn floor(self) -> Self {
        Self::Floor(Box::new(self))
    }

    pub fn to_int(self) -> Self {
        Self::ToInt(Box::new(self))
    }

    pub fn at_most(self, ceiling: Expr) -> Self {
        Self::Min(Box::new(self), Box::new(ceiling))
    }

    pub fn gte(self, rhs: Expr) -> Self {
        Self::Gte(Box::new(self), Box::new(rhs))
    }

    pub fn update_mask(self, mask: Expr) -> Self {
        Self::Mask(Box::new(self), Box::new(mask))
    }

    /// Names of the bands this expression reads, in first-use order.
    pub fn bands(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_bands(&mut names);
        names
    }

    fn collect_bands<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Band(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Self::Constant(_) => {}
            Self::Floor(a) | Self::ToInt(a) => a.collect_bands(names),
            Self::Sub(a, b)
            | Self::Div(a, b)
            | Self::Min(a, b)
            | Self::Gte(a, b)
            | Self::Mask(a, b) => {
                a.collect_bands(names);
                b.collect_bands(names);
            }
        }
    }

    /// Evaluate against concrete bands. Missing bands are reported before
    /// any pixel is computed.
    pub fn evaluate(&self, stack: &BandStack) -> Result<Field, EvalError> {
        let inputs = self
            .bands()
            .into_iter()
            .map(|name| stack.band(name).map(|field| (name, field)))
            .collect::<Result<Vec<_>, _>>()?;

        let values = (0..stack.pixel_count())
            .map(|i| self.eval_pixel(&inputs, i))
            .collect();
        Ok(Field::new(values))
    }

    fn eval_pixel(&self, inputs: &[(&str, &Field)], i: usize) -> Option<f64> {
        match self {
            Self::Band(name) => inputs
                .iter()
                .find(|(n, _)| n == name)
                .and_then(|(_, field)| field.get(i)),
            Self::Constant(c) => Some(*c),
            Self::Sub(a, b) => Some(a.eval_pixel(inputs, i)? - b.eval_pixel(inputs, i)?),
            Self::Div(a, b) => Some(a.eval_pixel(inputs, i)? / b.eval_pixel(inputs, i)?),
            Self::Floor(a) => Some(a.eval_pixel(inputs, i)?.floor()),
            Self::ToInt(a) => Some(a.eval_pixel(inputs, i)?.trunc()),
            Self::Min(a, b) => Some(a.eval_pixel(inputs, i)?.min(b.eval_pixel(inputs, i)?)),
            Self::Gte(a, b) => {
                let hit = a.eval_pixel(inputs, i)? >= b.eval_pixel(inputs, i)?;
                Some(if hit { 1.0 } else { 0.0 })
            }
            Self::Mask(value, mask) => {
                if mask.eval_pixel(inputs, i)? != 0.0 {
                    value.eval_pixel(inputs, i)
                } else {
                    None
                }
            }
        }
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Band(name) => write!(f, "{}", name),
            Self::Constant(c) => write!(f, "{}", c),
            Self::Sub(a, b) => write!(f, "({} - {})", a, b),
            Self::Div(a, b) => write!(f, "({} / {})", a, b),
            Self::Floor(a) => write!(f, "floor{}", Parens(a)),
            Self::ToInt(a) => write!(f, "int{}", Parens(a)),
            Self::Min(a, b) => write!(f, "min({}, {})", a, b),
            Self::Gte(a, b) => write!(f, "({} >= {})", a, b),
            Self::Mask(value, mask) => write!(f, "mask({}, {})", value, mask),
        }
    }
}

/// Wraps a function argument in parentheses unless it already has them.
struct Parens<'a>(&'a Expr);

impl fmt::Display for Parens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Sub(..) | Expr::Div(..) | Expr::Gte(..) => write!(f, "{}", self.0),
            other => write!(f, "({})", other),
        }
    }
}
