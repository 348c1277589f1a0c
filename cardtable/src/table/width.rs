//! Column widths: the requested-width grammar and the render-time
//! distribution of weight columns.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::serialization::{SerializationContext, ValidationEventKind};

static WIDTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)(px|\*)?$").expect("Invalid width pattern")
});

/// Width of a column, requested or resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Share of the flexible space, relative to the other weight columns.
    /// Once resolved, the value is a percentage of that space.
    Weight(f64),
    /// Absolute width in pixels.
    Pixel(f64),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Weight(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid column width \"{0}\"")]
pub struct InvalidColumnWidth(pub String);

impl ColumnWidth {
    pub fn value(self) -> f64 {
        match self {
            Self::Weight(v) | Self::Pixel(v) => v,
        }
    }

    pub fn is_pixel(self) -> bool {
        matches!(self, Self::Pixel(_))
    }

    pub fn is_weight(self) -> bool {
        matches!(self, Self::Weight(_))
    }

    /// Read the `width` property of a column. Missing values take the
    /// default; anything unusable is reported and also takes the default.
    pub(crate) fn from_json(value: Option<&Value>, context: &mut SerializationContext) -> Self {
        let parsed = match value {
            None | Some(Value::Null) => return Self::default(),
            Some(Value::Number(n)) => n
                .as_f64()
                .filter(|v| v.is_finite() && *v > 0.0)
                .map(Self::Weight),
            Some(Value::String(s)) => s.parse().ok(),
            Some(_) => None,
        };

        parsed.unwrap_or_else(|| {
            let shown = value.map(Value::to_string).unwrap_or_default();
            context.log_parse_event(
                ValidationEventKind::InvalidPropertyValue,
                Some("ColumnDefinition"),
                format!("invalid column width: {shown}"),
            );
            Self::default()
        })
    }

    /// Pixel widths are written as `"<n>px"`, weights as plain numbers.
    pub(crate) fn to_json(self) -> Value {
        match self {
            Self::Pixel(_) => Value::String(self.to_string()),
            Self::Weight(v) => number(v),
        }
    }
}

impl FromStr for ColumnWidth {
    type Err = InvalidColumnWidth;

    /// Accepts `<n>`, `<n>*` (weights) and `<n>px` (pixels); `n` must be
    /// greater than zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColumnWidth(s.to_owned());
        let captures = WIDTH_PATTERN.captures(s).ok_or_else(invalid)?;
        let size: f64 = captures[1].parse().map_err(|_| invalid())?;

        if size <= 0.0 {
            return Err(invalid());
        }

        match captures.get(2).map(|m| m.as_str()) {
            Some("px") => Ok(Self::Pixel(size)),
            _ => Ok(Self::Weight(size)),
        }
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel(v) => write!(f, "{v}px"),
            Self::Weight(v) => write!(f, "{v}"),
        }
    }
}

/// Integral values are written as JSON integers so `1` survives a round trip as `1`.
fn number(v: f64) -> Value {
    if v.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&v) {
        Value::from(v as u64)
    } else {
        serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
    }
}

/// Resolve requested widths for one render pass.
///
/// Pixel columns keep their size. Weight columns become their percentage
/// share of the summed weights. When there is no weight to share (no weight
/// columns, or weights summing to zero) weight columns resolve to `0`.
pub fn compute_column_widths(requested: &[ColumnWidth]) -> Vec<ColumnWidth> {
    let total_weight: f64 = requested
        .iter()
        .filter_map(|w| match w {
            ColumnWidth::Weight(v) => Some(*v),
            ColumnWidth::Pixel(_) => None,
        })
        .sum();

    requested
        .iter()
        .map(|width| match *width {
            ColumnWidth::Pixel(px) => ColumnWidth::Pixel(px),
            ColumnWidth::Weight(_) if total_weight <= 0.0 => ColumnWidth::Weight(0.0),
            ColumnWidth::Weight(weight) => ColumnWidth::Weight(100.0 / total_weight * weight),
        })
        .collect()
}
