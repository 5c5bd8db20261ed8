use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use serde_with::DeserializeFromStr;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::*;

/// Timezone in which "today" and the start of a day are evaluated.
#[derive(Clone, Copy, Debug, Default, DeserializeFromStr, PartialEq)]
pub enum Tz {
    #[default]
    Local,
    Iana(chrono_tz::Tz),
}

impl Tz {
    const LOCAL_ID: &'static str = "local";

    pub fn utc() -> Self {
        Self::Iana(chrono_tz::UTC)
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Tz::Local => Local::now().date_naive(),
            Tz::Iana(tz) => Utc::now().with_timezone(tz).date_naive(),
        }
    }

    /// First representable instant of `date` in this timezone.
    pub fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<FixedOffset>> {
        // Midnight may fall into a DST gap; noon is tried next.
        [0, 12]
            .iter()
            .filter_map(|&hour| date.and_hms_opt(hour, 0, 0))
            .find_map(|ndt| self.resolve(&ndt))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::Environment,
                    &format!("could not resolve {} in timezone '{}'", date, self),
                )
            })
    }

    fn resolve(&self, ndt: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Tz::Local => fix(Local.from_local_datetime(ndt)),
            Tz::Iana(tz) => fix(tz.from_local_datetime(ndt)),
        }
    }
}

fn fix<T: TimeZone>(local: LocalResult<DateTime<T>>) -> Option<DateTime<FixedOffset>> {
    local
        .earliest()
        .map(|dt| dt.with_timezone(&dt.offset().fix()))
}

impl FromStr for Tz {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Self::LOCAL_ID) {
            return Ok(Tz::Local);
        }

        s.parse::<chrono_tz::Tz>().map(Tz::Iana).map_err(|e| {
            Error::new(
                ErrorKind::Environment,
                &format!("unknown timezone '{}': {}", s, e),
            )
        })
    }
}

impl Display for Tz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tz::Local => write!(f, "{}", Self::LOCAL_ID),
            Tz::Iana(tz) => write!(f, "{}", tz.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_local_and_iana() {
        assert_eq!("local".parse::<Tz>().unwrap(), Tz::Local);
        assert_eq!(" Local ".parse::<Tz>().unwrap(), Tz::Local);
        assert_eq!(
            "Europe/Berlin".parse::<Tz>().unwrap(),
            Tz::Iana(chrono_tz::Europe::Berlin)
        );
    }

    #[test]
    fn unknown_zone_is_an_environment_error() {
        let err = "Mars/Olympus_Mons".parse::<Tz>().unwrap_err();
        assert!(err.is_environment());
    }

    #[test]
    fn start_of_day_in_iana_zone() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let start = Tz::Iana(chrono_tz::Europe::Berlin)
            .start_of_day(date)
            .unwrap();

        assert_eq!(start.date_naive(), date);
        assert_eq!(start.hour(), 0);
        assert_eq!(start.offset().local_minus_utc(), 3600);
        assert_eq!(start.weekday(), chrono::Weekday::Wed);
    }

    #[test]
    fn midnight_gap_falls_back_to_noon() {
        // Sao Paulo switched to DST at 00:00 on 2018-11-04.
        let date = NaiveDate::from_ymd_opt(2018, 11, 4).unwrap();
        let start = Tz::Iana(chrono_tz::America::Sao_Paulo)
            .start_of_day(date)
            .unwrap();

        assert_eq!(start.date_naive(), date);
        assert_eq!(start.hour(), 12);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let tz = Tz::Iana(chrono_tz::Asia::Tokyo);
        assert_eq!(tz.to_string().parse::<Tz>().unwrap(), tz);
        assert_eq!(Tz::Local.to_string(), "local");
    }
}
