//! Content-calendar primitives for the orbit prayer app.
//!
//! The admin UI schedules one scripture reading per calendar day and one
//! devotional action per month. This crate owns the date keys those records
//! are filed under (`YYYY-MM-DD` / `YYYY-MM`), the America/New_York rollover
//! clock with its test-date override, and the in-memory calendar the queue
//! and calendar views read from. Scripture references inside the records are
//! produced by [`orbit_scripture`].

mod calendar;
mod clock;
mod date_key;
mod records;

pub use calendar::ContentCalendar;
pub use clock::ContentClock;
pub use date_key::{DateKeyError, DayKey, MonthKey};
pub use records::{MonthlyAction, ScriptureReading};
