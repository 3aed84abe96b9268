//! Heuristic date resolution for calendar fragments.
//!
//! Three independent parsers are tried in a fixed priority order, each
//! returning an optional result; the first success wins. A fragment that
//! matches a pattern's shape but names an impossible date (month 13, day
//! 32) falls through to the next parser instead of failing the chain.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crocette_shared::config::CalendarConfig;

/// ISO-like numeric date: `YYYY-M-D` with `-`, `/` or `.` separators.
static ISO_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})").expect("valid regex"));

/// Day-first numeric date: `D-M-YY` or `D-M-YYYY`.
static DAY_FIRST_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[-/.](\d{1,2})[-/.](\d{2,4})").expect("valid regex"));

/// Day + Italian month name, with an optional explicit year.
static DAY_MONTH_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})\s+([a-zà-ù]+)\.?(?:\s+(\d{4}))?").expect("valid regex")
});

/// The two reference years used to infer a year for yearless dates.
///
/// A sports season straddles the calendar year boundary: months from
/// August onward belong to `early_year`, months before August to
/// `late_year`. The years come from deployment configuration and must be
/// rolled forward each season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    /// Year assigned to months 8-12.
    pub early_year: i32,
    /// Year assigned to months 1-7.
    pub late_year: i32,
}

impl SeasonWindow {
    /// Creates a season window from its two reference years.
    #[must_use]
    pub const fn new(early_year: i32, late_year: i32) -> Self {
        Self {
            early_year,
            late_year,
        }
    }

    /// Returns the inferred year for a month with no explicit year.
    #[must_use]
    pub const fn infer_year(self, month: u32) -> i32 {
        if month >= 8 {
            self.early_year
        } else {
            self.late_year
        }
    }
}

impl From<&CalendarConfig> for SeasonWindow {
    fn from(config: &CalendarConfig) -> Self {
        Self::new(config.season_early_year, config.season_late_year)
    }
}

/// Resolves a date from a loosely formatted fragment.
///
/// Returns `None` when no pattern yields a valid calendar date; the caller
/// treats this as "no date", not an error.
#[must_use]
pub fn resolve(fragment: &str, season: SeasonWindow) -> Option<NaiveDate> {
    let fragment = fragment.trim().to_lowercase();
    iso_numeric(&fragment)
        .or_else(|| day_first_numeric(&fragment))
        .or_else(|| day_month_name(&fragment, season))
}

fn iso_numeric(fragment: &str) -> Option<NaiveDate> {
    let caps = ISO_NUMERIC.captures(fragment)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn day_first_numeric(fragment: &str) -> Option<NaiveDate> {
    let caps = DAY_FIRST_NUMERIC.captures(fragment)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn day_month_name(fragment: &str, season: SeasonWindow) -> Option<NaiveDate> {
    let caps = DAY_MONTH_NAME.captures(fragment)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_from_name(caps[2].trim_end_matches('.'))?;
    let year = match caps.get(3) {
        Some(explicit) => explicit.as_str().parse().ok()?,
        None => season.infer_year(month),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Maps an Italian month name or standard abbreviation to its number.
fn month_from_name(name: &str) -> Option<u32> {
    match name {
        "gen" | "gennaio" => Some(1),
        "feb" | "febbraio" => Some(2),
        "mar" | "marzo" => Some(3),
        "apr" | "aprile" => Some(4),
        "mag" | "maggio" => Some(5),
        "giu" | "giugno" => Some(6),
        "lug" | "luglio" => Some(7),
        "ago" | "agosto" => Some(8),
        "set" | "sett" | "settembre" => Some(9),
        "ott" | "ottobre" => Some(10),
        "nov" | "novembre" => Some(11),
        "dic" | "dicembre" => Some(12),
        _ => None,
    }
}
