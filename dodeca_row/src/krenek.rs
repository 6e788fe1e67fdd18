// Krenek's rotation and pair-swap cycles for twelve-member rows.
//
// - rotate_hexachords: rotate both hexachords one step at a time until they
//   come full circle (7 rows, the input first and last). Optionally each
//   rotated hexachord is transposed back to start on its hexachord's original
//   first pitch, which usually breaks the twelve-tone property.
// - pair_swap: alternately swap the adjacent pairs starting on the second
//   member and those starting on the first. Twelve swaps later the row has
//   become its own retrograde (13 rows).

use crate::row::Row;
use dodeca_pcset::{PitchClass, Result, SerialError};

fn ensure_twelve_members(row: &Row) -> Result<()> {
    if row.len() != 12 {
        return Err(SerialError::invalid_row(format!(
            "{row} has {} members, Krenek cycles need 12",
            row.len()
        )));
    }
    Ok(())
}

pub fn rotate_hexachords(row: &Row, transpose_iterations: bool) -> Result<Vec<Row>> {
    ensure_twelve_members(row)?;
    let first = Row::from_slice(&row.pitch_classes()[..6]);
    let second = Row::from_slice(&row.pitch_classes()[6..]);

    let mut rows = vec![row.clone()];
    for step in 1..6 {
        let mut a = first.rotate(step);
        let mut b = second.rotate(step);
        if transpose_iterations {
            a = a.transpose_to(i32::from(first.first().value()));
            b = b.transpose_to(i32::from(second.first().value()));
        }
        let pcs: Vec<PitchClass> = a.iter().chain(b.iter()).collect();
        rows.push(Row::from_slice(&pcs));
    }
    rows.push(row.clone());
    Ok(rows)
}

pub fn pair_swap(row: &Row) -> Result<Vec<Row>> {
    ensure_twelve_members(row)?;
    let mut pcs = row.pitch_classes().to_vec();
    let mut rows = vec![row.clone()];
    for _ in 0..6 {
        for offset in [1, 0] {
            for i in (offset..11).step_by(2) {
                pcs.swap(i, i + 1);
            }
            rows.push(Row::from_slice(&pcs));
        }
    }
    Ok(rows)
}
