//! Locale handling and numeral localization.
//!
//! Profile pages render every number in the reader's script. For Nepali
//! that means substituting Devanagari digit glyphs character by character;
//! everything else (decimal points, signs, percent marks) passes through
//! untouched. The substitution is a one-way transform: localized output is
//! not expected to convert back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, Arabic digits.
    En,
    /// Nepali, Devanagari digits.
    Ne,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Ne
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ne => write!(f, "ne"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ne" => Ok(Locale::Ne),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Localize the digits of an already-formatted string.
///
/// Total function: any input maps to an output, no failure path.
pub fn localize_str(value: &str, locale: Locale) -> String {
    match locale {
        Locale::En => value.to_string(),
        Locale::Ne => value
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    DEVANAGARI_DIGITS[c.to_digit(10).unwrap_or(0) as usize]
                } else {
                    c
                }
            })
            .collect(),
    }
}

/// Localize a number's default string form.
pub fn localize_number<T: fmt::Display>(value: T, locale: Locale) -> String {
    localize_str(&value.to_string(), locale)
}

/// Round to one decimal place, half away from zero, and format.
///
/// `f64::round` ties away from zero, unlike `format!("{:.1}")` which ties
/// to even, so round the scaled value first.
pub fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1}", rounded)
}

/// One-decimal rounding plus digit localization in one step.
pub fn localize_one_decimal(value: f64, locale: Locale) -> String {
    localize_str(&format_one_decimal(value), locale)
}
