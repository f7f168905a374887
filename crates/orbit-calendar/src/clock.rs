use chrono::Utc;
use chrono_tz::America::New_York;

use crate::date_key::{DayKey, MonthKey};

/// Resolves "today" for content scheduling.
///
/// Content rolls over at midnight in America/New_York wall time regardless
/// of where the reader is, so daily readings land on the same calendar day
/// for everyone. An override pins the clock to a fixed day; the admin UI's
/// date-override harness uses this to preview future content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentClock {
    override_day: Option<DayKey>,
}

impl ContentClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(day: DayKey) -> Self {
        Self {
            override_day: Some(day),
        }
    }

    pub fn today(&self) -> DayKey {
        match self.override_day {
            Some(day) => day,
            None => DayKey::new(Utc::now().with_timezone(&New_York).date_naive()),
        }
    }

    pub fn current_month(&self) -> MonthKey {
        self.today().month_key()
    }
}
