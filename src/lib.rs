pub mod calendar;
pub mod clock;
pub mod config;
pub mod datemath;
pub mod error;
pub mod locale;
pub mod render;
pub mod tz;

pub use calendar::{Calendar, CalendarBuilder, CalendarOption};
pub use datemath::is_leap_year;
pub use error::{Error, ErrorKind, Result};
pub use render::Layout;
