// Combinatoriality: serial forms whose partitions exchange content with the
// source row's.
//
// The row is cut into discrete partitions of `partition_size`. A serial form
// F is combinatorial at that size when every partition of F(row) holds
// exactly the pitch-class content of a *different* partition of the source.
// Because a twelve-tone row's partitions are disjoint and exhaustive, pairing
// a partition of the source with the matching partition of F(row) then
// always completes an aggregate in the classic hexachordal sense, and the
// same condition generalizes to trichords, tetrachords and so on.
//
// The search space is fixed and small: the 48 serial forms (24 T/I images
// and their retrogrades), enumerated exhaustively in `SerialForm::all()`
// order. R0 always qualifies at hexachord size; summaries in the
// traditional T/I/RI notation leave R out.
//
// Alongside the whole-row forms, each partition lists every T/I form that
// carries its content onto another partition's, which is what a composer
// scanning for local exchanges wants.

use crate::forms::{FormKind, SerialForm};
use crate::row::Row;
use crate::segments::subsegments;
use dodeca_pcset::{Combinatoriality, PcSet, Result, set_class_table};
use serde::Serialize;

/// A T/I form taking one partition's content onto partition `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentMatch {
    pub form: SerialForm,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionMatches {
    pub index: usize,
    pub content: PcSet,
    pub matches: Vec<SegmentMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinatorialityResult {
    pub partition_size: usize,
    pub partitions: Vec<PartitionMatches>,
    /// Whole-row forms meeting the combinatorial condition.
    pub forms: Vec<SerialForm>,
}

impl CombinatorialityResult {
    pub fn is_combinatorial(&self) -> bool {
        !self.forms.is_empty()
    }

    /// Operation indices of the qualifying forms of one kind.
    pub fn indices_of(&self, kind: FormKind) -> Vec<u8> {
        self.forms
            .iter()
            .filter(|form| form.kind == kind)
            .map(|form| form.n)
            .collect()
    }
}

/// Search all 48 serial forms of a twelve-tone `row` for combinatoriality at
/// `partition_size`. Fails with `InvalidRow` if the row is not twelve-tone or
/// the size does not partition it.
pub fn combinatoriality(row: &Row, partition_size: usize) -> Result<CombinatorialityResult> {
    row.ensure_twelve_tone()?;
    let contents: Vec<PcSet> = subsegments(row, partition_size, false)?
        .iter()
        .map(Row::to_pc_set)
        .collect();

    let partitions = contents
        .iter()
        .enumerate()
        .map(|(index, &content)| PartitionMatches {
            index,
            content,
            matches: SerialForm::ti_forms()
                .flat_map(|form| {
                    let image = form.apply_to_set(content);
                    contents
                        .iter()
                        .enumerate()
                        .filter(move |&(target, &other)| target != index && other == image)
                        .map(move |(target, _)| SegmentMatch { form, target })
                })
                .collect(),
        })
        .collect();

    let forms: Vec<SerialForm> = SerialForm::all()
        .filter(|form| exchanges_partitions(&form.apply(row), partition_size, &contents))
        .collect();

    tracing::trace!(%row, partition_size, found = forms.len(), "combinatoriality search");
    Ok(CombinatorialityResult {
        partition_size,
        partitions,
        forms,
    })
}

/// Every partition of `transformed` equals a different source partition.
fn exchanges_partitions(transformed: &Row, size: usize, source: &[PcSet]) -> bool {
    transformed
        .pitch_classes()
        .chunks(size)
        .enumerate()
        .all(|(index, chunk)| {
            let content: PcSet = chunk.iter().copied().collect();
            source
                .iter()
                .enumerate()
                .any(|(other, &partition)| other != index && partition == content)
        })
}

/// True if the first hexachords of two twelve-tone rows together form an
/// aggregate.
pub fn combinatorial_pair(a: &Row, b: &Row) -> Result<bool> {
    a.ensure_twelve_tone()?;
    b.ensure_twelve_tone()?;
    let first = |row: &Row| -> PcSet { row.pitch_classes()[..6].iter().copied().collect() };
    Ok(first(a).is_disjoint(first(b)))
}

/// Hexachordal combinatoriality status of a twelve-tone row, looked up from
/// its first hexachord in the set-class table.
pub fn combinatorial_type(row: &Row) -> Result<Option<Combinatoriality>> {
    row.ensure_twelve_tone()?;
    let hexachord: PcSet = row.pitch_classes()[..6].iter().copied().collect();
    set_class_table().combinatoriality_of(hexachord)
}

/// Operation indices n (0-11) of the `kind` forms that are hexachordally
/// combinatorial with `row`.
pub fn combinatorial_transpositions(row: &Row, kind: FormKind) -> Result<Vec<u8>> {
    Ok(combinatoriality(row, 6)?.indices_of(kind))
}

/// The hexachordal combinatorial forms in T/I/RI notation, e.g.
/// `T6; I11; RI5`. Empty for a non-combinatorial row.
pub fn combinatorial_summary(row: &Row) -> Result<String> {
    Ok(summarize(&combinatoriality(row, 6)?))
}

/// Format a search result's T, I and RI forms.
pub fn summarize(result: &CombinatorialityResult) -> String {
    let mut parts = Vec::new();
    for kind in [
        FormKind::Prime,
        FormKind::Inversion,
        FormKind::RetrogradeInversion,
    ] {
        let indices = result.indices_of(kind);
        if indices.is_empty() {
            continue;
        }
        let joined: Vec<String> = indices.iter().map(u8::to_string).collect();
        parts.push(format!("{}{}", kind.label(), joined.join(",")));
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodeca_pcset::SerialError;

    fn row(values: &[i32]) -> Row {
        Row::twelve_tone(values).unwrap()
    }

    fn labels(result: &CombinatorialityResult) -> Vec<String> {
        result.forms.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_chromatic_hexachords() {
        let result = combinatoriality(&Row::chromatic(), 6).unwrap();
        assert_eq!(labels(&result), vec!["T6", "I11", "R0", "RI5"]);
        assert!(result.is_combinatorial());
        assert_eq!(combinatorial_summary(&Row::chromatic()).unwrap(), "T6; I11; RI5");
    }

    #[test]
    fn test_chromatic_partition_matches() {
        let result = combinatoriality(&Row::chromatic(), 6).unwrap();
        assert_eq!(result.partitions.len(), 2);
        let first = &result.partitions[0];
        assert_eq!(first.content, PcSet::from_integers(&[0, 1, 2, 3, 4, 5]));
        assert_eq!(
            first.matches,
            vec![
                SegmentMatch {
                    form: "T6".parse().unwrap(),
                    target: 1
                },
                SegmentMatch {
                    form: "I11".parse().unwrap(),
                    target: 1
                },
            ]
        );
    }

    #[test]
    fn test_chromatic_smaller_partitions() {
        let tetrachords = combinatoriality(&Row::chromatic(), 4).unwrap();
        assert_eq!(labels(&tetrachords), vec!["T4", "T8", "RI3", "RI7"]);
        let trichords = combinatoriality(&Row::chromatic(), 3).unwrap();
        assert_eq!(
            labels(&trichords),
            vec!["T3", "T6", "T9", "I5", "I11", "R0", "R6", "RI2", "RI5", "RI8"]
        );
    }

    #[test]
    fn test_quartet_tetrachord_exchanges() {
        let quartet = row(&[0, 11, 2, 1, 5, 6, 3, 4, 8, 7, 10, 9]);
        let result = combinatoriality(&quartet, 4).unwrap();
        assert_eq!(labels(&result), vec!["T4", "T8", "RI1", "RI5"]);
        let targets: Vec<(String, usize)> = result.partitions[0]
            .matches
            .iter()
            .map(|m| (m.form.to_string(), m.target))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("T4".to_string(), 1),
                ("T8".to_string(), 2),
                ("I5".to_string(), 1),
                ("I9".to_string(), 2),
            ]
        );
        assert_eq!(summarize(&combinatoriality(&quartet, 6).unwrap()), "I9");
    }

    #[test]
    fn test_all_combinatorial_rows() {
        let berg = row(&[0, 11, 7, 4, 2, 9, 3, 8, 10, 1, 5, 6]);
        let smith = row(&[0, 5, 6, 4, 10, 11, 7, 2, 1, 3, 9, 8]);
        assert_eq!(combinatorial_summary(&berg).unwrap(), "T6; I5; RI11");
        assert_eq!(combinatorial_summary(&smith).unwrap(), "T3,9; I1,7; RI4,10");
        for r in [&Row::chromatic(), &berg, &smith] {
            assert_eq!(combinatorial_type(r).unwrap(), Some(Combinatoriality::All));
        }
        assert!(combinatoriality(&berg, 4).unwrap().forms.is_empty());
    }

    #[test]
    fn test_semi_combinatorial_rows() {
        let lutyens = row(&[0, 11, 7, 3, 8, 10, 9, 6, 4, 5, 1, 2]);
        assert_eq!(
            combinatorial_type(&lutyens).unwrap(),
            Some(Combinatoriality::Transposition)
        );
        assert_eq!(
            combinatorial_transpositions(&lutyens, FormKind::Prime).unwrap(),
            vec![6]
        );
        assert!(
            combinatorial_transpositions(&lutyens, FormKind::Inversion)
                .unwrap()
                .is_empty()
        );

        let wilson = row(&[0, 8, 9, 4, 2, 6, 7, 11, 10, 3, 5, 1]);
        assert_eq!(
            combinatorial_type(&wilson).unwrap(),
            Some(Combinatoriality::Inversion)
        );
        assert_eq!(
            combinatorial_transpositions(&wilson, FormKind::Inversion).unwrap(),
            vec![7]
        );
        assert!(
            combinatorial_transpositions(&wilson, FormKind::Prime)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_non_combinatorial_row() {
        let all_interval = row(&[0, 1, 4, 2, 3, 9, 6, 5, 7, 11, 10, 8]);
        let result = combinatoriality(&all_interval, 6).unwrap();
        assert_eq!(labels(&result), vec!["R0"]);
        assert_eq!(summarize(&result), "");
        assert_eq!(combinatorial_type(&all_interval).unwrap(), None);
    }

    #[test]
    fn test_combinatorial_pair() {
        let chromatic = Row::chromatic();
        assert!(combinatorial_pair(&chromatic, &chromatic.transpose(6)).unwrap());
        assert!(!combinatorial_pair(&chromatic, &chromatic.transpose(5)).unwrap());
        assert!(combinatorial_pair(&chromatic, &Row::new(&[0, 1, 2]).unwrap()).is_err());
    }

    #[test]
    fn test_requires_twelve_tone_row() {
        let short = Row::new(&[0, 1, 2, 3, 4, 5]).unwrap();
        assert!(matches!(
            combinatoriality(&short, 3),
            Err(SerialError::InvalidRow { .. })
        ));
        assert!(combinatoriality(&Row::chromatic(), 5).is_err());
        assert!(combinatorial_type(&short).is_err());
    }
}
