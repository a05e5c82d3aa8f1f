//! Milestone file loading.
//!
//! ```json
//! {
//!   "time_zone": "Europe/Amsterdam",
//!   "milestones": [
//!     { "label": "Started", "date": "2016-09-01" },
//!     { "label": "Moved", "date": "2019-04-15" }
//!   ]
//! }
//! ```
//!
//! Milestones are reported in file order.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{MilestoneError, MilestoneResult};

/// A labelled calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    pub date: NaiveDate,
}

impl Milestone {
    pub fn new(label: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            date,
        }
    }
}

/// Contents of a milestone file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MilestoneFile {
    /// IANA time-zone identifier used to decide what "today" is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Milestones, in output order
    pub milestones: Vec<Milestone>,
}

impl MilestoneFile {
    /// Load and validate a milestone file.
    pub fn from_file(path: &Path) -> MilestoneResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| MilestoneError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: Self = serde_json::from_str(&content).map_err(|source| MilestoneError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> MilestoneResult<()> {
        if let Some(index) = self
            .milestones
            .iter()
            .position(|m| m.label.trim().is_empty())
        {
            return Err(MilestoneError::EmptyLabel { index });
        }
        Ok(())
    }

    /// Resolve the time zone: `override_tz` first, then the file, then UTC.
    pub fn resolve_time_zone(&self, override_tz: Option<&str>) -> MilestoneResult<Tz> {
        match override_tz.or(self.time_zone.as_deref()) {
            Some(name) => parse_time_zone(name),
            None => Ok(Tz::UTC),
        }
    }
}

/// Look up an IANA time-zone identifier.
pub fn parse_time_zone(name: &str) -> MilestoneResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| MilestoneError::UnknownTimeZone(name.to_string()))
}
