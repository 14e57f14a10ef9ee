//! Display settings

use rust_decimal::Decimal;

use crate::models::{Currency, Language};
use crate::services::pricing;

/// Session-scoped display settings.
///
/// Passed explicitly from the composition root instead of living as ambient
/// global state. The setters return the updated value; within a session the
/// most recently produced value wins. Reset to the configured defaults when a
/// new session starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplaySettings {
    language: Language,
    currency: Currency,
}

impl DisplaySettings {
    pub fn new(language: Language, currency: Currency) -> Self {
        Self { language, currency }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    #[must_use]
    pub fn with_currency(self, currency: Currency) -> Self {
        Self { currency, ..self }
    }

    /// Format a base-currency amount in the currently selected currency.
    pub fn format_price(&self, amount_in_base: Decimal) -> String {
        pricing::format_in(amount_in_base, Some(self.currency))
    }
}
