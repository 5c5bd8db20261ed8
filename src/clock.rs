use chrono::NaiveDate;

use crate::tz::Tz;

/// Source of the current date used for calendar defaults.
pub trait Clock {
    fn today(&self, tz: &Tz) -> NaiveDate;
}

/// Reads the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self, tz: &Tz) -> NaiveDate {
        tz.today()
    }
}

/// Always reports the same date, regardless of timezone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self, _tz: &Tz) -> NaiveDate {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDate,
{
    fn today(&self, _tz: &Tz) -> NaiveDate {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_ignores_timezone() {
        let date = NaiveDate::from_ymd_opt(2006, 1, 15).unwrap();
        let clock = FixedClock(date);

        assert_eq!(clock.today(&Tz::Local), date);
        assert_eq!(clock.today(&Tz::utc()), date);
    }

    #[test]
    fn closures_are_clocks() {
        let clock = || NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(
            Clock::today(&clock, &Tz::Local),
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()
        );
    }
}
