// Full per-row analysis under an `AnalysisConfig`.
//
// `analyse_row` bundles everything the row analyser knows about one row
// into a serializable `RowReport`. Segment descriptors go through a shared
// `DescriptorCache`, so analysing an anthology classifies each set class
// once. Any failure (a bad row, a segment size that doesn't fit, a set class
// missing from the table) aborts the report; nothing is silently skipped.
//
// Combinatoriality is only defined for twelve-tone rows. When the config
// allows other rows through, those fields are left empty for them, and
// segment sizes that don't fit the row's length are skipped rather than
// reported as errors.

use crate::combinatoriality::{
    CombinatorialityResult, combinatorial_type, combinatoriality, summarize,
};
use crate::config::AnalysisConfig;
use crate::derived::{DerivedRow, derived_row_check};
use crate::properties::{is_all_interval, is_self_retrograde, is_self_retrograde_inversion};
use crate::row::Row;
use crate::segments::{cyclic_subsegments, repeated_set_classes, subsegments};
use dodeca_pcset::{Combinatoriality, DescriptorCache, PcSet, Result, SetDescriptor};
use serde::Serialize;

/// Overlapping segments of one size and their classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSurvey {
    pub size: usize,
    pub segments: Vec<Row>,
    pub descriptors: Vec<SetDescriptor>,
    /// Prime forms occurring in more than one segment.
    pub repeated: Vec<PcSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowReport {
    pub row: Row,
    pub twelve_tone: bool,
    pub all_interval: bool,
    pub self_retrograde: bool,
    pub self_retrograde_inversion: bool,
    pub intervals: Vec<u8>,
    pub overlapping: Vec<SegmentSurvey>,
    /// Sizes at which the row is derived, with their derivations.
    pub derived: Vec<DerivedRow>,
    pub combinatoriality: Vec<CombinatorialityResult>,
    pub combinatorial_type: Option<Combinatoriality>,
    /// Hexachordal T/I/RI summary, e.g. `T6; I11; RI5`.
    pub summary: String,
}

pub fn analyse_row(
    row: &Row,
    config: &AnalysisConfig,
    cache: &DescriptorCache,
) -> Result<RowReport> {
    if config.require_twelve_tone {
        row.ensure_twelve_tone()?;
    }
    let twelve_tone = row.is_twelve_tone();
    let lenient = !config.require_twelve_tone;

    let mut overlapping = Vec::with_capacity(config.overlapping_sizes.len());
    for &size in &config.overlapping_sizes {
        if lenient && !fits_overlapping(row, size) {
            continue;
        }
        let segments = if config.wrap {
            cyclic_subsegments(row, size)?
        } else {
            subsegments(row, size, true)?
        };
        let descriptors = segments
            .iter()
            .map(|segment| cache.describe(segment.to_pc_set()))
            .collect::<Result<Vec<_>>>()?;
        let repeated = repeated_set_classes(&segments, false);
        overlapping.push(SegmentSurvey {
            size,
            segments,
            descriptors,
            repeated,
        });
    }

    let mut derived = Vec::new();
    for &size in &config.derived_sizes {
        if lenient && !fits_discrete(row, size) {
            continue;
        }
        if let Some(found) = derived_row_check(row, size)? {
            derived.push(found);
        }
    }

    let mut results = Vec::new();
    let mut hexachord_type = None;
    let mut summary = String::new();
    if twelve_tone {
        for &size in &config.partition_sizes {
            results.push(combinatoriality(row, size)?);
        }
        hexachord_type = combinatorial_type(row)?;
        summary = match results.iter().find(|r| r.partition_size == 6) {
            Some(hexachordal) => summarize(hexachordal),
            None => summarize(&combinatoriality(row, 6)?),
        };
    }

    tracing::debug!(%row, derived = derived.len(), "row analysed");
    Ok(RowReport {
        row: row.clone(),
        twelve_tone,
        all_interval: is_all_interval(row, true),
        self_retrograde: is_self_retrograde(row),
        self_retrograde_inversion: is_self_retrograde_inversion(row),
        intervals: row.intervals(false),
        overlapping,
        derived,
        combinatoriality: results,
        combinatorial_type: hexachord_type,
        summary,
    })
}

fn fits_overlapping(row: &Row, size: usize) -> bool {
    size > 0 && size < row.len()
}

fn fits_discrete(row: &Row, size: usize) -> bool {
    fits_overlapping(row, size) && row.len() % size == 0
}
