use chrono::{Days, NaiveDate, Utc};

/// An inclusive `from`/`to` window in Finnhub's `YYYY-MM-DD` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The window from `days` ago until today (UTC).
pub fn date_range(days: u32) -> DateRange {
    date_range_from(Utc::now().date_naive(), days)
}

/// The window from `days` before `today` until `today`.
pub fn date_range_from(today: NaiveDate, days: u32) -> DateRange {
    let from = today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);
    DateRange {
        from: from.format(DATE_FORMAT).to_string(),
        to: today.format(DATE_FORMAT).to_string(),
    }
}
