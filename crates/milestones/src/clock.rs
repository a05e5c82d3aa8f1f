//! Zoned "today".

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// The current calendar date in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}
