use chrono::Weekday;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::*;
use crate::locale::{WeekdayLabels, DEFAULT_LOCALE};
use crate::render::Layout;
use crate::tz::Tz;

const CONFIG_PATH_ENV_VAR: &str = "MONTHCAL_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> io::Result<Vec<PathBuf>> {
    let config_env = env::var_os(CONFIG_PATH_ENV_VAR).map(PathBuf::from);

    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::Other, "Unable to find home directory")
    })?;

    let home_config = home.join(".monthcal.toml");

    let config_xdg = dirs::config_dir()
        .unwrap_or_else(|| home.join(".config"))
        .join("monthcal")
        .join("config.toml");

    let mut locations = vec![config_xdg, home_config];

    if let Some(path) = config_env {
        locations.insert(0, path);
    }

    Ok(locations)
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub locale: String,
    /// Monday first, takes precedence over `locale`.
    pub weekday_labels: Option<Vec<String>>,
    pub week_start: Weekday,
    pub timezone: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: DEFAULT_LOCALE.to_owned(),
            weekday_labels: None,
            week_start: Weekday::Mon,
            timezone: Tz::Local,
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::from(e).with_msg(&format!("could not read '{}'", path.display()))
        })?;

        content.parse().map_err(|e: Error| {
            let msg = format!(
                "{} (in '{}')",
                e.message.as_deref().unwrap_or_default(),
                path.display()
            );
            e.with_msg(&msg)
        })
    }

    pub fn layout(&self) -> Result<Layout> {
        let labels = match &self.weekday_labels {
            Some(labels) => WeekdayLabels::custom(labels)?,
            None => WeekdayLabels::for_locale(&self.locale)?,
        };

        Ok(Layout::new(labels, self.week_start))
    }
}

/// Loads `path` if given, otherwise the first existing file of the default
/// locations, otherwise the defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Using config file '{}'", path.display());
        return Config::load(path);
    }

    let locations = match find_configfile_locations() {
        Ok(locations) => locations,
        Err(e) => {
            log::warn!("{}", e);
            Vec::new()
        }
    };

    match locations.iter().find(|location| location.is_file()) {
        Some(location) => {
            log::info!("Using config file '{}'", location.display());
            Config::load(location)
        }
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
