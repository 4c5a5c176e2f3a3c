//! Price formatting.
//!
//! Calculators work in `f64` against the rate tables. The figure handed back
//! to a caller is a [`Decimal`] at cent precision, cut down to the cent below
//! the binary floating-point value (`floor(value * 100) / 100`).

use rust_decimal::Decimal;

/// Formats a price to exactly two decimal places.
///
/// The value is truncated to the cent at or below it, computed on the `f64`
/// value as-is. Non-finite input yields `0.00`.
///
/// No epsilon is applied before truncating, so a value that reads as an exact
/// cent but whose `value * 100.0` lands just under the integer loses that
/// cent: `19.99` formats as `19.98`, `1.13` as `1.12` and `4.35` as `4.34`.
/// Callers relying on exact cents must pass amounts whose scaled product is
/// representable, such as `22.04` or `84.75`.
///
/// # Examples
///
/// ```
/// use benefits_pricing::calculation::format_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_price(33.323), Decimal::new(3332, 2));
/// assert_eq!(format_price(10.0).to_string(), "10.00");
/// ```
pub fn format_price(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::new(0, 2);
    }

    let cents = (value * 100.0).floor();
    Decimal::new(cents as i64, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_returns_price_with_two_decimal_places() {
        assert_eq!(format_price(33.323), dec("33.32"));
    }

    #[test]
    fn test_whole_number_keeps_two_decimal_places() {
        let price = format_price(10.0);
        assert_eq!(price, dec("10"));
        assert_eq!(price.scale(), 2);
        assert_eq!(price.to_string(), "10.00");
    }

    #[test]
    fn test_exact_half_cent_goes_to_lower_cent() {
        assert_eq!(format_price(39.375), dec("39.37"));
    }

    #[test]
    fn test_float_just_below_cent_goes_to_lower_cent() {
        // 79 - 7.9 is 71.09999999999999 in binary floating point
        assert_eq!(format_price(79.0 - 79.0 * (10.0 / 100.0)), dec("71.09"));
    }

    #[test]
    fn test_representable_cents_are_preserved() {
        assert_eq!(format_price(22.04), dec("22.04"));
        assert_eq!(format_price(84.75), dec("84.75"));
    }

    #[test]
    fn test_exact_cent_below_its_float_product_loses_a_cent() {
        // 19.99 * 100.0 is 1998.9999999999998
        assert_eq!(format_price(19.99), dec("19.98"));
        assert_eq!(format_price(1.13), dec("1.12"));
        assert_eq!(format_price(4.35), dec("4.34"));
        assert_eq!(format_price(39.37), dec("39.36"));
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_price(0.0).to_string(), "0.00");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(format_price(f64::NAN), dec("0.00"));
        assert_eq!(format_price(f64::INFINITY), dec("0.00"));
    }
}
