extern crate monthcal as lib;

use chrono::Weekday;
use flexi_logger::{FileSpec, Logger};
use lib::calendar::{CalendarBuilder, CalendarOption};
use lib::error::{Error, ErrorKind};
use lib::tz::Tz;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mcal",
    about = "Prints the calendar of a single month.",
    setting = structopt::clap::AppSettings::AllowNegativeNumbers
)]
pub struct Args {
    #[structopt(
        name = "YEAR",
        help = "year to show, defaults to the current year"
    )]
    pub year: Option<i64>,

    #[structopt(
        name = "MONTH",
        help = "month to show (1-12), defaults to the current month"
    )]
    pub month: Option<i64>,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(short = "z", long = "timezone", help = "'local' or an IANA timezone name")]
    pub timezone: Option<String>,

    #[structopt(short = "l", long = "locale", help = "locale of the weekday labels")]
    pub locale: Option<String>,

    #[structopt(short = "w", long = "week-start", help = "first day of the week")]
    pub week_start: Option<String>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "info"
    } else {
        "warn"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let mut config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    if let Some(timezone) = args.timezone {
        config.timezone = timezone.parse::<Tz>()?;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
        config.weekday_labels = None;
    }
    if let Some(week_start) = args.week_start {
        config.week_start = week_start.parse::<Weekday>().map_err(|_| {
            Error::new(
                ErrorKind::InvalidArgument,
                &format!("'{}' is not a weekday", week_start),
            )
        })?;
    }

    log::debug!("{:?}", config);

    let layout = config.layout()?;

    let options = args
        .year
        .map(CalendarOption::Year)
        .into_iter()
        .chain(args.month.map(CalendarOption::Month));

    let calendar = CalendarBuilder::new()
        .timezone(config.timezone)
        .options(options)
        .build()?;

    Ok(layout.render(&calendar))
}

fn main() {
    let args = Args::from_args();

    match run(args) {
        Ok(calendar) => println!("{}", calendar),
        Err(err) => {
            println!("mcal: {}", err);
            std::process::exit(1);
        }
    }
}
