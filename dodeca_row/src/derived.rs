// Derived rows: rows whose discrete segments all share one set class.
//
// Segment 0 is the generator. A row is derived at a segment size when every
// discrete segment has the generator's set class, which for equal-sized
// segments means each segment's content is a T or I image of the
// generator's. For each segment we record the form that carries its content
// back onto the generator and, when the segment is an ordered serial form of
// the generator, the ordered form that does the same.
//
// Self-rotational rows are the rare derived rows in which each segment is
// the previous one transposed by a single fixed interval, member by member.

use crate::forms::SerialForm;
use crate::row::Row;
use crate::segments::{repeated_set_classes, subsegments};
use dodeca_pcset::{PcSet, Result, SerialError};
use serde::Serialize;

/// How one segment relates to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentDerivation {
    pub index: usize,
    pub segment: Row,
    /// First T/I form mapping the segment's content onto the generator's.
    pub to_generator: SerialForm,
    /// First of the 48 forms mapping the ordered segment onto the ordered
    /// generator, if any.
    pub ordered_to_generator: Option<SerialForm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRow {
    pub segment_size: usize,
    pub generator: Row,
    /// Prime form shared by every segment.
    pub set_class: PcSet,
    pub segments: Vec<SegmentDerivation>,
}

impl DerivedRow {
    /// True if every segment is an ordered serial form of the generator.
    pub fn is_strictly_ordered(&self) -> bool {
        self.segments
            .iter()
            .all(|s| s.ordered_to_generator.is_some())
    }
}

/// Check whether the discrete segments of `row` at `size` all derive from
/// the first. Returns `None` when they don't, and fails with `InvalidRow`
/// when `size` doesn't partition the row.
pub fn derived_row_check(row: &Row, size: usize) -> Result<Option<DerivedRow>> {
    let segments = subsegments(row, size, false)?;
    let generator = segments[0].clone();
    let generator_content = generator.to_pc_set();

    let mut derivations = Vec::with_capacity(segments.len());
    for (index, segment) in segments.into_iter().enumerate() {
        let content = segment.to_pc_set();
        let Some(from_generator) =
            SerialForm::ti_forms().find(|form| form.apply_to_set(generator_content) == content)
        else {
            return Ok(None);
        };
        let ordered_to_generator = SerialForm::all()
            .find(|form| form.apply(&generator) == segment)
            .map(SerialForm::inverse);
        derivations.push(SegmentDerivation {
            index,
            segment,
            to_generator: from_generator.inverse(),
            ordered_to_generator,
        });
    }

    tracing::debug!(%row, size, "derived row");
    Ok(Some(DerivedRow {
        segment_size: size,
        set_class: generator_content.prime_form(),
        generator,
        segments: derivations,
    }))
}

/// True if each segment is the previous one transposed by the same interval.
/// Fails with `InvalidRow` unless the segments form a derived row: at least
/// two equal-length segments of a single set class.
pub fn is_self_rotational(segments: &[Row]) -> Result<bool> {
    let same_length = segments
        .first()
        .is_some_and(|first| segments.iter().all(|s| s.len() == first.len()));
    if !same_length || repeated_set_classes(segments, true).is_empty() {
        return Err(SerialError::invalid_row(
            "segments do not form a derived row",
        ));
    }
    let step = segments[0].first().interval_to(segments[1].first());
    Ok(segments.windows(2).all(|pair| {
        pair[0]
            .iter()
            .zip(pair[1].iter())
            .all(|(a, b)| a.interval_to(b) == step)
    }))
}
