// Dodeca row engine: ordered pitch-class material.
//
// Tone rows and their transformations, segmentation and serial analysis,
// built on the order-free classification in `dodeca_pcset`. A `Row` is
// ordered; whenever an answer must not depend on order the row converts to
// a `PcSet` explicitly.
//
// Architecture:
// - row.rs: `Row`, validation (twelve-tone, distinct) and parsing
// - transform.rs: the row transformer (T, I, R, rotation, M) and
//   `Transformation`, an explicit ordered composition of steps
// - forms.rs: the 48 serial forms (Tn, In, Rn, RIn) and the row matrix
// - krenek.rs: hexachord rotation and pair-swap cycles
// - segments.rs: overlapping, cyclic and discrete sub-segments
// - derived.rs: derived-row check and self-rotation
// - combinatoriality.rs: combinatorial forms at any partition size
// - properties.rs: all-interval, self-R and self-RI tests
// - config.rs: `AnalysisConfig`, what a full report covers
// - report.rs: `RowReport`, everything above for one row
// - batch.rs: parallel reports for many rows (rayon)
//
// The `serial` binary (main.rs) is a thin command-line front end.

pub mod batch;
pub mod combinatoriality;
pub mod config;
pub mod derived;
pub mod forms;
pub mod krenek;
pub mod properties;
pub mod report;
pub mod row;
pub mod segments;
pub mod transform;

pub use batch::{analyse_rows, analyse_rows_with};
pub use combinatoriality::{
    CombinatorialityResult, PartitionMatches, SegmentMatch, combinatorial_pair,
    combinatorial_summary, combinatorial_transpositions, combinatorial_type, combinatoriality,
};
pub use config::AnalysisConfig;
pub use derived::{DerivedRow, SegmentDerivation, derived_row_check, is_self_rotational};
pub use dodeca_pcset::{PcSet, PitchClass, Result, SerialError};
pub use forms::{FormKind, SerialForm, row_forms};
pub use krenek::{pair_swap, rotate_hexachords};
pub use properties::{is_all_interval, is_self_retrograde, is_self_retrograde_inversion};
pub use report::{RowReport, SegmentSurvey, analyse_row};
pub use row::Row;
pub use segments::{cyclic_subsegments, repeated_set_classes, subsegments};
pub use transform::{Step, Transformation};
