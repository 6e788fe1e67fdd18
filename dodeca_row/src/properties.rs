// Boolean row properties: all-interval and retrograde symmetries.
//
// Interval successions here are the open (non-wrapping) ones, 11 intervals
// for a twelve-tone row.

use crate::row::Row;

/// Every directed interval 1-11 occurs in the row's succession. With
/// `require_twelve_tone`, rows that aren't twelve-tone are never
/// all-interval.
pub fn is_all_interval(row: &Row, require_twelve_tone: bool) -> bool {
    if require_twelve_tone && !row.is_twelve_tone() {
        return false;
    }
    let intervals = row.intervals(false);
    (1..12).all(|interval| intervals.contains(&interval))
}

/// The retrograde is a transposition of the row itself.
pub fn is_self_retrograde(row: &Row) -> bool {
    row.retrograde().transpose_to(i32::from(row.first().value())) == *row
}

/// The interval succession reads the same backwards, so the retrograde
/// inversion is a transposition of the row.
pub fn is_self_retrograde_inversion(row: &Row) -> bool {
    let intervals = row.intervals(false);
    intervals.iter().eq(intervals.iter().rev())
}
