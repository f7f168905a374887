use orbit_scripture::ScriptureRef;
use serde::{Deserialize, Serialize};

use crate::date_key::{DayKey, MonthKey};

/// An admin-scheduled daily scripture reading.
///
/// `reference` is the canonical string passed verbatim to the content
/// provider (`JHN.3.16`); `display` is the human form confirmed to the admin
/// when the reading was scheduled (`John 3:16`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureReading {
    pub date: DayKey,
    pub reference: String,
    pub display: String,
}

impl ScriptureReading {
    /// Build a reading from a reference that already passed
    /// [`orbit_scripture::validate`].
    pub fn new(date: DayKey, reference: &ScriptureRef) -> Self {
        Self {
            date,
            reference: reference.formatted(),
            display: reference.display(),
        }
    }
}

/// A monthly devotional action authored in the admin editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAction {
    pub month: MonthKey,
    pub title: String,
    /// Rich-text HTML from the admin editor, stored opaquely.
    pub content: String,
}
