//! Clock time display utilities.
//!
//! Wrapper types formatting minutes since midnight with `jiff`, so grid labels
//! and task ranges read the same everywhere.

use std::fmt;

use jiff::civil::Time;

const MINUTES_PER_DAY: u32 = 24 * 60;

fn civil_time(clock_min: u32) -> Result<Time, fmt::Error> {
    let hour = i8::try_from(clock_min / 60).map_err(|_| fmt::Error)?;
    let minute = i8::try_from(clock_min % 60).map_err(|_| fmt::Error)?;
    Time::new(hour, minute, 0, 0).map_err(|_| fmt::Error)
}

/// 24-hour clock time, `HH:MM`. Midnight at the end of the day prints as
/// `24:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime(pub u32);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= MINUTES_PER_DAY {
            return f.write_str("24:00");
        }
        write!(f, "{}", civil_time(self.0)?.strftime("%H:%M"))
    }
}

/// 12-hour grid label, e.g. `9:00 AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourLabel(pub u32);

impl fmt::Display for HourLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = civil_time(self.0 % MINUTES_PER_DAY)?;
        write!(f, "{}", time.strftime("%-I:%M %p"))
    }
}
