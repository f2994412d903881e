use jiff::{ToSpan, Zoned};

/// When a broadcast job fires
///
/// Pure civil-time arithmetic over zoned timestamps; the runner loop
/// sleeps until the computed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Once a day at the given hour, on the hour
    DailyAt { hour: i8 },
    /// At the top of every hour from `start` through `end` (inclusive)
    HourlyBetween { start: i8, end: i8 },
}

impl Schedule {
    /// The first firing instant strictly after `now`
    pub fn next_after(self, now: &Zoned) -> Result<Zoned, jiff::Error> {
        match self {
            Self::DailyAt { hour } => {
                let candidate = now
                    .with()
                    .hour(hour)
                    .minute(0)
                    .second(0)
                    .subsec_nanosecond(0)
                    .build()?;
                if candidate > *now {
                    Ok(candidate)
                } else {
                    candidate.checked_add(1.day())
                }
            }
            Self::HourlyBetween { start, end } => {
                let top_of_hour = now
                    .with()
                    .minute(0)
                    .second(0)
                    .subsec_nanosecond(0)
                    .build()?;
                let candidate = top_of_hour.checked_add(1.hour())?;

                if candidate.hour() < start {
                    candidate.with().hour(start).build()
                } else if candidate.hour() > end {
                    candidate.checked_add(1.day())?.with().hour(start).build()
                } else {
                    Ok(candidate)
                }
            }
        }
    }
}
