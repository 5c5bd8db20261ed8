use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::*;
use crate::tz::Tz;

const DAYS_OF_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    assert!(
        (1..=12).contains(&month),
        "month out of range: {}",
        month
    );

    let days = DAYS_OF_MONTH[month as usize - 1];
    if month == 2 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Weekday of the first day of `month` in `year`, taken at the start of that
/// day in `tz`.
pub fn first_weekday(year: i32, month: u32, tz: &Tz) -> Result<Weekday> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidArgument,
            &format!("{:04}-{:02}-01 is not a representable date", year, month),
        )
    })?;

    Ok(tz.start_of_day(first)?.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        let years = [
            (1900, false),
            (1901, false),
            (1902, false),
            (1903, false),
            (1904, true),
            (1905, false),
            (1999, false),
            (2000, true),
            (2001, false),
            (2004, true),
            (2100, false),
        ];

        for (year, leap) in years.iter() {
            assert_eq!(is_leap_year(*year), *leap, "year {}", year);
        }
    }

    #[test]
    fn leap_rule_matches_chrono() {
        for year in 1..=3000 {
            let chrono_leap = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
            assert_eq!(is_leap_year(year as i64), chrono_leap, "year {}", year);
        }
    }

    #[test]
    fn leap_rule_holds_for_non_positive_years() {
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn days_in_every_month() {
        for year in [1900, 2000, 2023, 2024].iter() {
            for month in 1..=12 {
                let days = days_in_month(*year, month);
                assert!((28..=31).contains(&days));
                assert_eq!(days == 29, month == 2 && is_leap_year(*year));

                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(*year as i32 + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(*year as i32, month + 1, 1)
                }
                .unwrap();
                let first = NaiveDate::from_ymd_opt(*year as i32, month, 1).unwrap();
                assert_eq!(
                    next.signed_duration_since(first).num_days(),
                    days as i64,
                    "{}-{}",
                    year,
                    month
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn days_in_month_rejects_month_thirteen() {
        days_in_month(2023, 13);
    }

    #[test]
    fn first_weekdays() {
        let tz = Tz::Iana(chrono_tz::Europe::Berlin);

        assert_eq!(first_weekday(2023, 11, &tz).unwrap(), Weekday::Wed);
        assert_eq!(first_weekday(2023, 10, &tz).unwrap(), Weekday::Sun);
        assert_eq!(first_weekday(2021, 2, &tz).unwrap(), Weekday::Mon);
        assert_eq!(first_weekday(2006, 1, &tz).unwrap(), Weekday::Sun);
        assert_eq!(first_weekday(1, 1, &Tz::utc()).unwrap(), Weekday::Mon);
    }

    #[test]
    fn first_weekday_does_not_depend_on_zone() {
        let zones = [
            Tz::utc(),
            Tz::Local,
            Tz::Iana(chrono_tz::Pacific::Kiritimati),
            Tz::Iana(chrono_tz::Pacific::Pago_Pago),
        ];

        for tz in zones.iter() {
            assert_eq!(first_weekday(2024, 2, tz).unwrap(), Weekday::Thu);
        }
    }

    #[test]
    fn unrepresentable_dates_are_invalid() {
        assert!(first_weekday(2023, 13, &Tz::utc())
            .unwrap_err()
            .is_invalid_argument());
        assert!(first_weekday(i32::MAX, 1, &Tz::utc())
            .unwrap_err()
            .is_invalid_argument());
    }
}
