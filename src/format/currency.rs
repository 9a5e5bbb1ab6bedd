//! Currency formatting rules
//!
//! Each supported currency code maps to a locale hint which decides the
//! symbol, its placement, and the digit separators. Codes outside the table
//! fall back to the default (en-US style) with the code itself as the symbol,
//! so formatting degrades instead of erroring on an unsupported currency.

use crate::models::Money;

/// How a currency renders: symbol, placement, separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    /// Currency symbol (or the raw code when unknown)
    pub symbol: &'static str,

    /// Locale hint (e.g. "en-US", "de-DE")
    pub locale: &'static str,

    /// Symbol before the number (true) or after (false)
    pub symbol_prefix: bool,

    /// Thousands separator
    pub group_sep: char,

    /// Decimal separator
    pub decimal_sep: char,
}

const DEFAULT_STYLE: CurrencyStyle = CurrencyStyle {
    symbol: "$",
    locale: "en-US",
    symbol_prefix: true,
    group_sep: ',',
    decimal_sep: '.',
};

/// Static table of known currencies, keyed by ISO code
const STYLES: &[(&str, CurrencyStyle)] = &[
    ("USD", DEFAULT_STYLE),
    (
        "EUR",
        CurrencyStyle {
            symbol: "€",
            locale: "de-DE",
            symbol_prefix: false,
            group_sep: '.',
            decimal_sep: ',',
        },
    ),
    (
        "GBP",
        CurrencyStyle {
            symbol: "£",
            locale: "en-GB",
            symbol_prefix: true,
            group_sep: ',',
            decimal_sep: '.',
        },
    ),
    (
        "JPY",
        CurrencyStyle {
            symbol: "¥",
            locale: "ja-JP",
            symbol_prefix: true,
            group_sep: ',',
            decimal_sep: '.',
        },
    ),
    (
        "PHP",
        CurrencyStyle {
            symbol: "₱",
            locale: "en-PH",
            symbol_prefix: true,
            group_sep: ',',
            decimal_sep: '.',
        },
    ),
    (
        "INR",
        CurrencyStyle {
            symbol: "₹",
            locale: "en-IN",
            symbol_prefix: true,
            group_sep: ',',
            decimal_sep: '.',
        },
    ),
    (
        "CAD",
        CurrencyStyle {
            symbol: "CA$",
            locale: "en-CA",
            symbol_prefix: true,
            group_sep: ',',
            decimal_sep: '.',
        },
    ),
    (
        "AUD",
        CurrencyStyle {
            symbol: "A$",
            locale: "en-AU",
            symbol_prefix: true,
            group_sep: ',',
            decimal_sep: '.',
        },
    ),
    (
        "CHF",
        CurrencyStyle {
            symbol: "CHF",
            locale: "de-CH",
            symbol_prefix: true,
            group_sep: '\'',
            decimal_sep: '.',
        },
    ),
];

/// Look up the style for a currency code, falling back to the default
pub fn style_for_currency(code: &str) -> CurrencyStyle {
    let code = code.to_ascii_uppercase();
    STYLES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| *s)
        .unwrap_or(DEFAULT_STYLE)
}

/// Locale hint for a currency code ("en-US" when unknown)
pub fn locale_for_currency(code: &str) -> &'static str {
    style_for_currency(code).locale
}

/// Symbol for a currency code, echoing the code itself when not in the table
pub fn currency_symbol(code: &str) -> String {
    let upper = code.to_ascii_uppercase();
    match STYLES.iter().find(|(c, _)| *c == upper) {
        Some((_, style)) => style.symbol.to_string(),
        None => upper,
    }
}

/// Format an amount in the style of the given currency code
pub fn format_currency(amount: Money, code: &str) -> String {
    let style = style_for_currency(code);
    let symbol = currency_symbol(code);

    let units = amount.units().abs();
    let grouped = group_digits(units, style.group_sep);
    let number = format!("{}{}{:02}", grouped, style.decimal_sep, amount.cents_part());

    let sign = if amount.is_negative() { "-" } else { "" };
    if style.symbol_prefix {
        format!("{}{}{}", sign, symbol, number)
    } else {
        format!("{}{} {}", sign, number, symbol)
    }
}

/// Insert a separator every three digits from the right
fn group_digits(units: i64, sep: char) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_format() {
        assert_eq!(format_currency(Money::from_cents(123_456_78), "USD"), "$123,456.78");
        assert_eq!(format_currency(Money::from_cents(99), "USD"), "$0.99");
    }

    #[test]
    fn test_eur_format() {
        assert_eq!(format_currency(Money::from_cents(123_456_78), "EUR"), "123.456,78 €");
    }

    #[test]
    fn test_negative_format() {
        assert_eq!(format_currency(Money::from_cents(-1050), "USD"), "-$10.50");
        assert_eq!(format_currency(Money::from_cents(-1050), "EUR"), "-10,50 €");
    }

    #[test]
    fn test_unknown_code_degrades() {
        // Unknown codes keep the default locale style and echo the code
        assert_eq!(format_currency(Money::from_cents(1050), "XYZ"), "XYZ10.50");
        assert_eq!(locale_for_currency("XYZ"), "en-US");
        assert_eq!(currency_symbol("xyz"), "XYZ");
    }

    #[test]
    fn test_locale_lookup() {
        assert_eq!(locale_for_currency("USD"), "en-US");
        assert_eq!(locale_for_currency("eur"), "de-DE");
        assert_eq!(locale_for_currency("JPY"), "ja-JP");
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("GBP"), "£");
        assert_eq!(currency_symbol("PHP"), "₱");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(1_234_567, '.'), "1.234.567");
    }
}
