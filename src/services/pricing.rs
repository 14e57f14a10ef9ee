//! Price display formatting
//!
//! Catalog prices are stored in the base currency (EUR). Display conversion
//! applies a fixed demo exchange rate per selectable currency and renders the
//! amount with the grouping and symbol placement of the locale tied to that
//! currency (es-ES/EUR, es-CO/COP, es-MX/MXN, en-US/USD).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Currency;

/// Non-breaking space, emitted between amount and symbol by the locales we
/// mirror.
const NBSP: char = '\u{a0}';

struct LocaleSpec {
    rate: Decimal,
    symbol: &'static str,
    /// Symbol before the amount (false: after).
    symbol_leads: bool,
    /// NBSP between symbol and amount.
    spaced: bool,
    grouping: char,
}

fn locale_spec(currency: Option<Currency>) -> LocaleSpec {
    match currency {
        // es-CO
        Some(Currency::Cop) => LocaleSpec {
            rate: Decimal::from(4400),
            symbol: "$",
            symbol_leads: true,
            spaced: true,
            grouping: '.',
        },
        // es-MX
        Some(Currency::Mxn) => LocaleSpec {
            rate: Decimal::from(19),
            symbol: "$",
            symbol_leads: true,
            spaced: false,
            grouping: ',',
        },
        // en-US
        Some(Currency::Usd) => LocaleSpec {
            rate: Decimal::new(11, 1),
            symbol: "$",
            symbol_leads: true,
            spaced: false,
            grouping: ',',
        },
        // es-ES, base currency
        None => LocaleSpec {
            rate: Decimal::ONE,
            symbol: "€",
            symbol_leads: false,
            spaced: true,
            grouping: '.',
        },
    }
}

/// Format a base-currency amount for display in `currency` (`None` keeps the
/// base currency, EUR).
///
/// Pure function of (amount, currency): zero decimal places, midpoints
/// rounded away from zero as in standard currency display rounding.
pub fn format_in(amount_in_base: Decimal, currency: Option<Currency>) -> String {
    let spec = locale_spec(currency);
    let converted = (amount_in_base * spec.rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = group_digits(&converted.normalize().to_string(), spec.grouping);

    if spec.symbol_leads {
        if spec.spaced {
            format!("{}{}{}", spec.symbol, NBSP, digits)
        } else {
            format!("{}{}", spec.symbol, digits)
        }
    } else if spec.spaced {
        format!("{}{}{}", digits, NBSP, spec.symbol)
    } else {
        format!("{}{}", digits, spec.symbol)
    }
}

/// Insert a grouping separator every three digits, counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let count = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
