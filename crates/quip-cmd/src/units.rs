//! Unit table and conversion engine.
//!
//! Units are grouped into disjoint categories fixed at compile time. A
//! category is either *linear* (each symbol carries a multiplicative
//! factor to the category's implicit base unit) or *formula* (each symbol
//! carries an explicit to-canonical/from-canonical function pair around an
//! arbitrary pivot; temperature pivots on Celsius).
//!
//! Symbols match case-insensitively. No rounding happens here; trimming
//! trailing zero fractions is a display rule, see [`format_value`].

use thiserror::Error;

/// Conversion function used by formula categories.
pub type UnitFn = fn(f64) -> f64;

/// A closed set of mutually convertible units sharing one conversion
/// mechanism.
#[derive(Debug)]
pub enum Category {
    /// Units related to an implicit base unit by a multiplicative factor.
    Linear {
        /// Category name, for diagnostics.
        name: &'static str,
        /// `(symbol, factor-to-base)` pairs.
        factors: &'static [(&'static str, f64)],
    },
    /// Units related through an explicit function pair around a fixed
    /// canonical pivot.
    Formula {
        /// Category name, for diagnostics.
        name: &'static str,
        /// `(symbol, to-canonical, from-canonical)` triples.
        units: &'static [(&'static str, UnitFn, UnitFn)],
    },
}

/// Error produced when two unit symbols cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The symbols are unknown or belong to different categories.
    #[error("unknown or incompatible units: {0} and {1}")]
    UnknownOrIncompatible(String, String),
}

fn identity(v: f64) -> f64 {
    v
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

/// The static unit table. Every symbol appears in exactly one category.
pub static CATEGORIES: &[Category] = &[
    Category::Linear {
        name: "length",
        factors: &[
            ("mm", 0.001),
            ("cm", 0.01),
            ("m", 1.0),
            ("km", 1000.0),
            ("in", 0.0254),
            ("ft", 0.3048),
            ("yd", 0.9144),
            ("mi", 1609.344),
        ],
    },
    Category::Linear {
        name: "mass",
        factors: &[
            ("mg", 1e-6),
            ("g", 0.001),
            ("kg", 1.0),
            ("t", 1000.0),
            ("oz", 0.028349523125),
            ("lb", 0.45359237),
        ],
    },
    Category::Linear {
        name: "volume",
        factors: &[
            ("ml", 0.001),
            ("cl", 0.01),
            ("dl", 0.1),
            ("l", 1.0),
            ("pt", 0.473176473),
            ("qt", 0.946352946),
            ("gal", 3.785411784),
        ],
    },
    Category::Linear {
        name: "time",
        factors: &[
            ("ms", 0.001),
            ("s", 1.0),
            ("min", 60.0),
            ("h", 3600.0),
            ("d", 86400.0),
            ("w", 604800.0),
        ],
    },
    Category::Linear {
        name: "data",
        factors: &[
            ("b", 1.0),
            ("kb", 1e3),
            ("mb", 1e6),
            ("gb", 1e9),
            ("tb", 1e12),
            ("kib", 1024.0),
            ("mib", 1048576.0),
            ("gib", 1073741824.0),
        ],
    },
    Category::Formula {
        name: "temperature",
        units: &[
            ("c", identity, identity),
            ("f", fahrenheit_to_celsius, celsius_to_fahrenheit),
            ("k", kelvin_to_celsius, celsius_to_kelvin),
        ],
    },
];

impl Category {
    /// Category name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear { name, .. } => name,
            Self::Formula { name, .. } => name,
        }
    }

    /// Whether a symbol (case-insensitive) belongs to this category.
    pub fn contains(&self, symbol: &str) -> bool {
        match self {
            Self::Linear { factors, .. } => {
                factors.iter().any(|(s, _)| s.eq_ignore_ascii_case(symbol))
            }
            Self::Formula { units, .. } => {
                units.iter().any(|(s, _, _)| s.eq_ignore_ascii_case(symbol))
            }
        }
    }

    /// Convert `value` from one symbol of this category to another.
    ///
    /// Returns `None` if either symbol is not part of this category.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Option<f64> {
        match self {
            Self::Linear { factors, .. } => {
                let from = factors
                    .iter()
                    .find(|(s, _)| s.eq_ignore_ascii_case(from))?
                    .1;
                let to = factors.iter().find(|(s, _)| s.eq_ignore_ascii_case(to))?.1;
                Some(value * from / to)
            }
            Self::Formula { units, .. } => {
                let to_canonical = units
                    .iter()
                    .find(|(s, _, _)| s.eq_ignore_ascii_case(from))?
                    .1;
                let from_canonical = units.iter().find(|(s, _, _)| s.eq_ignore_ascii_case(to))?.2;
                Some(from_canonical(to_canonical(value)))
            }
        }
    }
}

/// Find the single category containing both symbols (case-insensitive).
///
/// Returns `None` for unknown symbols and for symbols from disjoint
/// categories; the caller turns that into a user-facing validation error.
pub fn find_category(a: &str, b: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|cat| cat.contains(a) && cat.contains(b))
}

/// Convert between two unit symbols, finding their common category first.
pub fn convert_units(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    find_category(from, to)
        .and_then(|cat| cat.convert(value, from, to))
        .ok_or_else(|| UnitError::UnknownOrIncompatible(from.to_string(), to.to_string()))
}

/// Render a conversion result, dropping the fractional part when it
/// consists only of zero digits: `5.0` renders as `5`, `5.25` unchanged.
///
/// This reproduces the display behavior downstream consumers expect; it is
/// a presentation rule, not a precision guarantee.
pub fn format_value(value: f64) -> String {
    let rendered = format!("{value}");
    if let Some((integral, fractional)) = rendered.split_once('.') {
        if !fractional.is_empty() && fractional.chars().all(|c| c == '0') {
            return integral.to_string();
        }
    }
    rendered
}
