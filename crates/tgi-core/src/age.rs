//! Account-age estimation.
//!
//! Telegram ids are allocated roughly monotonically, so a handful of known
//! (id, creation-date) anchor points let us interpolate a creation date for
//! any id. This is a heuristic, not an authoritative timestamp; every output
//! that carries these values labels them as estimates.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Known (id, creation date) pairs, ascending by id.
const ANCHORS: [(i64, (i32, u32, u32)); 4] = [
    (100_000_000, (2013, 8, 1)),
    (1_273_841_502, (2020, 8, 13)),
    (1_500_000_000, (2021, 5, 1)),
    (2_000_000_000, (2022, 12, 1)),
];

/// Observed allocation rate: ~20M ids per day.
const IDS_PER_DAY: f64 = 20_000_000.0;

/// Estimate the creation instant for an account id.
///
/// Picks the anchor with minimum |id - anchor| (ties go to the lower anchor
/// id) and extrapolates linearly at [`IDS_PER_DAY`]. Fractional days are
/// carried as seconds and only truncated when the date is formatted.
pub fn estimate_creation(id: i64) -> NaiveDateTime {
    let (anchor_id, (y, m, d)) = ANCHORS
        .iter()
        .min_by_key(|(anchor_id, _)| (id - anchor_id).abs())
        .copied()
        .unwrap_or(ANCHORS[0]);

    let anchor = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap_or(NaiveDate::MIN)
        .and_hms_opt(0, 0, 0)
        .unwrap_or(NaiveDateTime::MIN);

    let offset_secs = (id - anchor_id) as f64 / IDS_PER_DAY * 86_400.0;
    anchor + Duration::seconds(offset_secs as i64)
}

/// Calendar-aware span between two dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgeSpan {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl AgeSpan {
    pub const ZERO: AgeSpan = AgeSpan {
        years: 0,
        months: 0,
        days: 0,
    };
}

impl std::fmt::Display for AgeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

/// Proper calendar difference between `from` and `to` (not a flat day count).
///
/// Counts whole months first (clamping the day-of-month at month ends, so
/// Jan 31 + 1 month lands on Feb 28/29), then the leftover days. A `from` in
/// the future (extrapolation past today) clamps to zero.
pub fn calendar_span(from: NaiveDate, to: NaiveDate) -> AgeSpan {
    if from > to {
        return AgeSpan::ZERO;
    }

    let mut total_months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if add_months(from, total_months) > to {
        total_months -= 1;
    }

    let anchored = add_months(from, total_months);
    let days = (to - anchored).num_days() as i32;

    AgeSpan {
        years: total_months / 12,
        months: total_months % 12,
        days,
    }
}

/// `date` shifted by `n` whole months, day-of-month clamped to the target
/// month's length.
fn add_months(date: NaiveDate, n: i32) -> NaiveDate {
    let zero_based = date.year() * 12 + date.month() as i32 - 1 + n;
    let year = zero_based.div_euclid(12);
    let month = (zero_based.rem_euclid(12) + 1) as u32;

    let mut day = date.day();
    loop {
        if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
            return d;
        }
        day -= 1; // clamp 31 -> 30 -> 29 -> 28
    }
}
