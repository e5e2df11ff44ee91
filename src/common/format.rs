// src/common/format.rs

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::middleware::i18n::Locale;

// Funções puras de formatação para exibição. As regras de moeda e de
// separadores pertencem a este módulo; o resto do sistema só carrega
// números e o `Locale` negociado pelo Accept-Language.

/// Formata um valor em unidades maiores como moeda ("$1,234.56" / "R$ 1.234,56").
pub fn format_currency(value: Decimal, locale: &Locale) -> String {
    // Arredonda para 2 casas (meio termo afasta do zero) e trabalha em
    // centavos inteiros daqui em diante.
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let total_cents = (rounded.abs() * Decimal::from(100))
        .to_i64()
        .unwrap_or_default();

    let units = group_thousands((total_cents / 100) as u64, thousands_separator(locale));
    let cents = total_cents % 100;

    let sign = if rounded.is_sign_negative() && total_cents != 0 {
        "-"
    } else {
        ""
    };

    match locale {
        Locale::En => format!("{sign}${units}.{cents:02}"),
        Locale::Pt => format!("{sign}R$ {units},{cents:02}"),
    }
}

/// Formata um inteiro com separador de milhar ("1,234" / "1.234").
pub fn format_number(value: i64, locale: &Locale) -> String {
    let digits = group_thousands(value.unsigned_abs(), thousands_separator(locale));
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

fn thousands_separator(locale: &Locale) -> char {
    match locale {
        Locale::En => ',',
        Locale::Pt => '.',
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_in_english_uses_dollar_and_comma() {
        assert_eq!(format_currency(Decimal::from(10), &Locale::En), "$10.00");
        assert_eq!(
            format_currency(Decimal::new(123_456, 2), &Locale::En),
            "$1,234.56"
        );
    }

    #[test]
    fn currency_in_portuguese_swaps_separators() {
        assert_eq!(
            format_currency(Decimal::new(123_456, 2), &Locale::Pt),
            "R$ 1.234,56"
        );
        assert_eq!(format_currency(Decimal::ZERO, &Locale::Pt), "R$ 0,00");
    }

    #[test]
    fn currency_rounds_to_two_decimal_places() {
        assert_eq!(
            format_currency(Decimal::new(10_005, 3), &Locale::En),
            "$10.01"
        );
    }

    #[test]
    fn number_groups_thousands_per_locale() {
        assert_eq!(format_number(1_234, &Locale::En), "1,234");
        assert_eq!(format_number(1_234_567, &Locale::Pt), "1.234.567");
        assert_eq!(format_number(999, &Locale::En), "999");
        assert_eq!(format_number(0, &Locale::En), "0");
    }

    #[test]
    fn negative_values_keep_the_sign_outside_the_grouping() {
        assert_eq!(format_number(-1_234, &Locale::En), "-1,234");
        assert_eq!(format_currency(Decimal::new(-150, 2), &Locale::En), "-$1.50");
    }
}
