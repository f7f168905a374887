use std::collections::BTreeMap;

use crate::clock::ContentClock;
use crate::date_key::{DayKey, MonthKey};
use crate::records::{MonthlyAction, ScriptureReading};

/// Date-keyed content authored through the admin UI: at most one scripture
/// reading per day and one devotional action per month.
///
/// This is the in-memory shape behind the admin calendar and queue views;
/// durable persistence lives outside this crate.
#[derive(Clone, Debug, Default)]
pub struct ContentCalendar {
    readings: BTreeMap<DayKey, ScriptureReading>,
    actions: BTreeMap<MonthKey, MonthlyAction>,
}

impl ContentCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the reading for its day. Returns the reading that
    /// was displaced, if any.
    pub fn schedule_reading(&mut self, reading: ScriptureReading) -> Option<ScriptureReading> {
        self.readings.insert(reading.date, reading)
    }

    pub fn reading_for(&self, day: DayKey) -> Option<&ScriptureReading> {
        self.readings.get(&day)
    }

    pub fn remove_reading(&mut self, day: DayKey) -> Option<ScriptureReading> {
        self.readings.remove(&day)
    }

    /// Today's reading and everything scheduled after it, in date order,
    /// capped at `limit` entries. Backs the admin content queue.
    pub fn upcoming(&self, clock: &ContentClock, limit: usize) -> Vec<&ScriptureReading> {
        self.readings
            .range(clock.today()..)
            .map(|(_, reading)| reading)
            .take(limit)
            .collect()
    }

    /// All scheduled readings in date order.
    pub fn readings(&self) -> impl Iterator<Item = &ScriptureReading> {
        self.readings.values()
    }

    pub fn set_action(&mut self, action: MonthlyAction) -> Option<MonthlyAction> {
        self.actions.insert(action.month, action)
    }

    pub fn action_for(&self, month: MonthKey) -> Option<&MonthlyAction> {
        self.actions.get(&month)
    }

    /// The action for the clock's current month, if one is authored.
    pub fn current_action(&self, clock: &ContentClock) -> Option<&MonthlyAction> {
        self.actions.get(&clock.current_month())
    }
}
