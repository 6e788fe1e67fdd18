// Contiguous sub-segments of a row, and repeated set classes among them.
//
// Three segmentations are offered:
// - overlapping: every contiguous slice of `size` members, stopping at the
//   end of the row (len - size + 1 slices)
// - cyclic: overlapping slices that wrap around the end of the row, one
//   starting on every member (len slices)
// - discrete: the non-overlapping partition from offset 0; `size` must
//   divide the row length
//
// In every case `size` must lie in 1..len. A "segment" as large as the whole
// row is the row itself and is rejected rather than silently returned.

use crate::row::Row;
use dodeca_pcset::{PcSet, Result, SerialError};

fn check_size(row: &Row, size: usize) -> Result<()> {
    if size == 0 || size >= row.len() {
        return Err(SerialError::invalid_row(format!(
            "segment size {size} must be between 1 and {} for a row of {} members",
            row.len().saturating_sub(1),
            row.len()
        )));
    }
    Ok(())
}

/// Contiguous slices of `size` members. With `overlapping`, one slice per
/// start position up to the end of the row; otherwise the discrete partition,
/// which fails unless `size` divides the row length.
pub fn subsegments(row: &Row, size: usize, overlapping: bool) -> Result<Vec<Row>> {
    check_size(row, size)?;
    let pcs = row.pitch_classes();
    if overlapping {
        return Ok(pcs.windows(size).map(Row::from_slice).collect());
    }
    if row.len() % size != 0 {
        return Err(SerialError::invalid_row(format!(
            "segment size {size} does not divide a row of {} members",
            row.len()
        )));
    }
    Ok(pcs.chunks(size).map(Row::from_slice).collect())
}

/// Overlapping slices that wrap around the end of the row: slice `i` starts
/// on member `i`, giving exactly `len` slices.
pub fn cyclic_subsegments(row: &Row, size: usize) -> Result<Vec<Row>> {
    check_size(row, size)?;
    let pcs = row.pitch_classes();
    let mut extended = pcs.to_vec();
    extended.extend_from_slice(&pcs[..size - 1]);
    Ok(extended
        .windows(size)
        .take(row.len())
        .map(Row::from_slice)
        .collect())
}

/// Prime forms that occur in more than one segment, in order of first
/// occurrence. With `exactly_one`, the result is non-empty only when every
/// segment belongs to one and the same set class.
pub fn repeated_set_classes(segments: &[Row], exactly_one: bool) -> Vec<PcSet> {
    let mut counts: Vec<(PcSet, usize)> = Vec::new();
    for segment in segments {
        let prime = segment.to_pc_set().prime_form();
        match counts.iter_mut().find(|(p, _)| *p == prime) {
            Some((_, count)) => *count += 1,
            None => counts.push((prime, 1)),
        }
    }
    if exactly_one && counts.len() != 1 {
        return Vec::new();
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(prime, _)| prime)
        .collect()
}
