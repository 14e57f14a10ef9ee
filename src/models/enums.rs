//! Shared domain enums

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Interface language tags.
///
/// Cosmetic only: selecting a language changes the stored tag, not the
/// displayed copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    Es,
    En,
    Pt,
}

impl Language {
    /// Every selectable language, in selector order.
    pub const ALL: [Language; 3] = [Language::Es, Language::En, Language::Pt];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Language::Es => "ES",
            Language::En => "EN",
            Language::Pt => "PT",
        };
        write!(f, "{}", tag)
    }
}

impl std::str::FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ES" => Ok(Language::Es),
            "EN" => Ok(Language::En),
            "PT" => Ok(Language::Pt),
            other => Err(AppError::Validation(format!(
                "unknown language tag: {}",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Selectable display currencies.
///
/// Catalog prices are stored in the base currency (EUR) and converted for
/// display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Cop,
    Mxn,
    Usd,
}

impl Currency {
    /// Every selectable currency, in selector order.
    pub const ALL: [Currency; 3] = [Currency::Cop, Currency::Mxn, Currency::Usd];
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Currency::Cop => "COP",
            Currency::Mxn => "MXN",
            Currency::Usd => "USD",
        };
        write!(f, "{}", tag)
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "COP" => Ok(Currency::Cop),
            "MXN" => Ok(Currency::Mxn),
            "USD" => Ok(Currency::Usd),
            other => Err(AppError::Validation(format!(
                "unknown currency tag: {}",
                other
            ))),
        }
    }
}
