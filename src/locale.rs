use chrono::Weekday;
use phf::phf_map;

use crate::error::*;

pub const DEFAULT_LOCALE: &str = "de";

/// Two letter weekday abbreviations, Monday first.
static WEEKDAY_LABELS: phf::Map<&'static str, [&'static str; 7]> = phf_map! {
    "de" => ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
    "en" => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
    "es" => ["Lu", "Ma", "Mi", "Ju", "Vi", "Sá", "Do"],
    "fr" => ["Lu", "Ma", "Me", "Je", "Ve", "Sa", "Di"],
    "it" => ["Lu", "Ma", "Me", "Gi", "Ve", "Sa", "Do"],
    "nl" => ["Ma", "Di", "Wo", "Do", "Vr", "Za", "Zo"],
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekdayLabels([String; 7]);

impl WeekdayLabels {
    pub const WIDTH: usize = 2;

    pub fn for_locale(locale: &str) -> Result<Self> {
        let labels = WEEKDAY_LABELS.get(locale).ok_or_else(|| {
            Error::new(
                ErrorKind::Config,
                &format!(
                    "unknown locale '{}', expected one of: {}",
                    locale,
                    Self::locales().join(", ")
                ),
            )
        })?;

        Ok(WeekdayLabels(labels.map(str::to_owned)))
    }

    /// Builds labels from seven entries, Monday first.
    pub fn custom<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        if labels.len() != 7 {
            return Err(Error::new(
                ErrorKind::Config,
                &format!("expected 7 weekday labels, got {}", labels.len()),
            ));
        }

        if let Some(bad) = labels
            .iter()
            .map(|label| label.as_ref())
            .find(|label| label.chars().count() != Self::WIDTH)
        {
            return Err(Error::new(
                ErrorKind::Config,
                &format!(
                    "weekday label '{}' must be exactly {} characters wide",
                    bad,
                    Self::WIDTH
                ),
            ));
        }

        let mut owned: [String; 7] = Default::default();
        for (slot, label) in owned.iter_mut().zip(labels) {
            *slot = label.as_ref().to_owned();
        }

        Ok(WeekdayLabels(owned))
    }

    pub fn locales() -> Vec<&'static str> {
        let mut names: Vec<_> = WEEKDAY_LABELS.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn label(&self, weekday: Weekday) -> &str {
        &self.0[weekday.num_days_from_monday() as usize]
    }
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        WeekdayLabels(WEEKDAY_LABELS[DEFAULT_LOCALE].map(str::to_owned))
    }
}
