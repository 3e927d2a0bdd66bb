//! Loosely typed table values and the coercions applied to them.

/// Tokens read as a missing value, in addition to empty or blank text.
pub const NULL_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
];

/// One value read from a label table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Build a cell from raw text, mapping blanks and [`NULL_TOKENS`] to [`Cell::Missing`].
    pub fn from_text(text: &str) -> Cell {
        let trimmed = text.trim();
        if trimmed.is_empty() || NULL_TOKENS.contains(&trimmed) {
            Cell::Missing
        } else {
            Cell::Text(text.to_string())
        }
    }

    /// Missing, or a float that is not a number.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Integer view of the cell. Decimals are truncated toward zero.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Cell::Missing => None,
            Cell::Bool(b) => Some(i64::from(*b)),
            Cell::Int(v) => Some(*v),
            Cell::Float(v) => float_to_i64(*v),
            Cell::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_i64))
            }
        }
    }

    /// Finite floating point view of the cell.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Cell::Missing => None,
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }

    /// Text view of the cell; numbers are rendered in their shortest form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Missing => None,
            Cell::Bool(b) => Some(b.to_string()),
            Cell::Int(v) => Some(v.to_string()),
            Cell::Float(v) if v.is_nan() => None,
            Cell::Float(v) => Some(v.to_string()),
            Cell::Text(s) => Some(s.clone()),
        }
    }

    /// Boolean view: `true`/`false` text (any case), or a number compared against zero.
    pub fn to_flag(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            Cell::Text(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    self.to_f64().map(|v| v != 0.0)
                }
            }
            _ => self.to_f64().map(|v| v != 0.0),
        }
    }
}

fn float_to_i64(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}
