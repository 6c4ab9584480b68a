use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

/// Format a signed amount for display: rounded to whole units, thousands
/// separators from `locale`, negatives in parentheses instead of a minus sign.
///
/// Anything that rounds to zero is shown as a bare `0`, never `(0)`.
pub fn format_amount(amount: Decimal, locale: &Locale) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return "0".to_string();
    }
    let formatted = rounded
        .abs()
        .to_u128()
        .unwrap_or_default()
        .to_formatted_string(locale);
    if rounded < Decimal::ZERO {
        format!("({})", formatted)
    } else {
        formatted
    }
}

/// One-decimal percentage, e.g. `-12.5%`.
pub(crate) fn format_percentage(percentage: Decimal) -> String {
    format!(
        "{:.1}%",
        percentage.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn groups_thousands_with_locale_separator() {
        assert_eq!(format_amount(dec!(1234567), &Locale::pt), "1.234.567");
        assert_eq!(format_amount(dec!(1234567), &Locale::en), "1,234,567");
        assert_eq!(format_amount(dec!(999), &Locale::pt), "999");
    }

    #[test]
    fn negatives_are_parenthesized() {
        assert_eq!(format_amount(dec!(-1500), &Locale::pt), "(1.500)");
    }

    #[test]
    fn rounds_to_whole_units_half_away_from_zero() {
        assert_eq!(format_amount(dec!(1234.5), &Locale::pt), "1.235");
        assert_eq!(format_amount(dec!(-1234.5), &Locale::pt), "(1.235)");
        assert_eq!(format_amount(dec!(1234.49), &Locale::pt), "1.234");
    }

    #[test]
    fn zero_is_a_bare_digit() {
        assert_eq!(format_amount(Decimal::ZERO, &Locale::pt), "0");
        assert_eq!(format_amount(dec!(-0.4), &Locale::pt), "0");
        assert_eq!(format_amount(dec!(0.4), &Locale::pt), "0");
    }

    #[test]
    fn amounts_beyond_u64_keep_their_digits() {
        assert_eq!(
            format_amount(dec!(-20000000000000000000), &Locale::pt),
            "(20.000.000.000.000.000.000)"
        );
        assert_eq!(
            format_amount(dec!(79228162514264337593543950335), &Locale::en),
            "79,228,162,514,264,337,593,543,950,335"
        );
    }

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(format_percentage(dec!(-160)), "-160.0%");
        assert_eq!(format_percentage(dec!(12.25)), "12.3%");
        assert_eq!(format_percentage(dec!(33.3)), "33.3%");
    }
}
