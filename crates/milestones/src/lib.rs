//! Years, months and days elapsed since a list of milestone dates.
//!
//! Milestones are loaded from a JSON file ([`MilestoneFile`]), "today" is taken
//! in a fixed IANA time zone ([`clock::today_in`]) and each milestone is
//! reported as a calendar [`Period`]:
//!
//! ```text
//! Started: 9 year(s), 4 month(s), 15 day(s).
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod period;

use chrono::NaiveDate;
use serde::Serialize;

pub use config::{parse_time_zone, Milestone, MilestoneFile};
pub use error::{MilestoneError, MilestoneResult};
pub use period::Period;

/// Time elapsed since one milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Elapsed {
    pub label: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub period: Period,
}

impl Elapsed {
    /// `"<label>: <years> year(s), <months> month(s), <days> day(s)."`
    pub fn line(&self) -> String {
        format!("{}: {}.", self.label, self.period)
    }
}

/// Compute the period from each milestone to `today`, in input order.
pub fn elapsed(milestones: &[Milestone], today: NaiveDate) -> Vec<Elapsed> {
    milestones
        .iter()
        .map(|m| Elapsed {
            label: m.label.clone(),
            date: m.date,
            period: Period::between(m.date, today),
        })
        .collect()
}
