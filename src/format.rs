//! Presentation formatting helpers
//!
//! Display conventions follow pt-BR: `.` as thousands separator, `,` as the
//! decimal mark, dates as day/month/year.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Render a monetary amount with two decimal places and thousands separators,
/// e.g. `1.234.567,89`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{},{}", sign, grouped, frac_part)
}

/// Render a timestamp as `dd/mm/yyyy`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    #[test]
    fn amounts_are_grouped_and_comma_separated() {
        assert_eq!(format_amount(Decimal::new(123456789, 2)), "1.234.567,89");
        assert_eq!(format_amount(Decimal::new(100000, 2)), "1.000,00");
        assert_eq!(format_amount(Decimal::ZERO), "0,00");
        assert_eq!(format_amount(Decimal::new(95, 1)), "9,50");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_amount(Decimal::new(-123450, 2)), "-1.234,50");
    }

    #[test]
    fn amounts_round_to_two_places() {
        assert_eq!(format_amount(Decimal::new(12345, 3)), "12,35");
    }

    #[test]
    fn dates_are_day_month_year() {
        let date = Utc.with_ymd_and_hms(2025, 3, 7, 14, 30, 0).unwrap();
        assert_eq!(format_date(date), "07/03/2025");
    }
}
