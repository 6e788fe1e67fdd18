// The row transformer: pure Row -> Row operations and their composition.
//
// Basic operations (all preserve length):
// - transpose(n): add n to every member
// - invert(axis): m -> axis - m (axis 0 is negation)
// - retrograde: reverse the order
// - rotate(k): start on the k-th member; k may be negative or exceed the
//   length and is reduced mod the row length
// - multiply(n): m -> n * m. Only n coprime to 12 (1, 5, 7, 11) is a
//   bijection; other n merge pitch classes and it is up to the caller not to
//   ask for that when a twelve-tone result is needed.
//
// A `Transformation` is a value: an ordered list of `Step`s applied left to
// right exactly as given. Nothing reorders steps into a canonical order, so
// "invert, then retrograde, then transpose" and "transpose, then invert" are
// different transformations.

use crate::row::Row;
use dodeca_pcset::PitchClass;
use serde::{Deserialize, Serialize};
use std::fmt;

impl Row {
    pub fn transpose(&self, semitones: i32) -> Row {
        self.map(|pc| pc.transpose(semitones))
    }

    /// Transpose so the row starts on `start`.
    pub fn transpose_to(&self, start: i32) -> Row {
        let offset = start - i32::from(self.first().value());
        self.transpose(offset)
    }

    pub fn invert(&self, axis: i32) -> Row {
        self.map(|pc| pc.invert(axis))
    }

    pub fn retrograde(&self) -> Row {
        let mut pcs = self.pitch_classes().to_vec();
        pcs.reverse();
        Row::from_slice(&pcs)
    }

    /// Cyclic shift so the result starts on member `steps` (mod length).
    pub fn rotate(&self, steps: i32) -> Row {
        let len = self.len();
        let start = steps.rem_euclid(len as i32) as usize;
        let mut pcs = self.pitch_classes()[start..].to_vec();
        pcs.extend_from_slice(&self.pitch_classes()[..start]);
        Row::from_slice(&pcs)
    }

    pub fn multiply(&self, n: i32) -> Row {
        self.map(|pc| pc.multiply(n))
    }

    /// Directed intervals between successive members, each in 0-11. With
    /// `wrap`, the interval from the last member back to the first is
    /// appended.
    pub fn intervals(&self, wrap: bool) -> Vec<u8> {
        let pcs = self.pitch_classes();
        let mut intervals: Vec<u8> = pcs.windows(2).map(|w| w[0].interval_to(w[1])).collect();
        if wrap {
            intervals.push(pcs[pcs.len() - 1].interval_to(self.first()));
        }
        intervals
    }

    fn map(&self, f: impl Fn(PitchClass) -> PitchClass) -> Row {
        let pcs: Vec<PitchClass> = self.iter().map(f).collect();
        Row::from_slice(&pcs)
    }
}

/// One primitive row operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "by", rename_all = "snake_case")]
pub enum Step {
    Transpose(i32),
    /// Reflect about the given axis.
    Invert(i32),
    Retrograde,
    Rotate(i32),
    Multiply(i32),
}

impl Step {
    pub fn apply(self, row: &Row) -> Row {
        match self {
            Step::Transpose(n) => row.transpose(n),
            Step::Invert(axis) => row.invert(axis),
            Step::Retrograde => row.retrograde(),
            Step::Rotate(k) => row.rotate(k),
            Step::Multiply(n) => row.multiply(n),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Transpose(n) => write!(f, "T{n}"),
            Step::Invert(axis) => write!(f, "I@{axis}"),
            Step::Retrograde => write!(f, "R"),
            Step::Rotate(k) => write!(f, "rot{k}"),
            Step::Multiply(n) => write!(f, "M{n}"),
        }
    }
}

/// An ordered composition of steps, applied first to last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transformation {
    steps: Vec<Step>,
}

impl Transformation {
    /// The empty composition.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<Step>) -> Self {
        Transformation { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn transpose(self, semitones: i32) -> Self {
        self.then(Step::Transpose(semitones))
    }

    pub fn invert(self, axis: i32) -> Self {
        self.then(Step::Invert(axis))
    }

    pub fn retrograde(self) -> Self {
        self.then(Step::Retrograde)
    }

    pub fn rotate(self, steps: i32) -> Self {
        self.then(Step::Rotate(steps))
    }

    pub fn multiply(self, n: i32) -> Self {
        self.then(Step::Multiply(n))
    }

    pub fn apply(&self, row: &Row) -> Row {
        self.steps
            .iter()
            .fold(row.clone(), |current, step| step.apply(&current))
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("identity");
        }
        let steps: Vec<String> = self.steps.iter().map(Step::to_string).collect();
        f.write_str(&steps.join(" then "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[i32]) -> Row {
        Row::new(values).unwrap()
    }

    #[test]
    fn test_transpose_chromatic_by_one() {
        let result = Row::chromatic().transpose(1);
        assert_eq!(result.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]);
    }

    #[test]
    fn test_retrograde_chromatic() {
        let result = Row::chromatic().retrograde();
        assert_eq!(result.to_vec(), vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_transpose_to() {
        let boulez = row(&[3, 2, 9, 8, 7, 6, 4, 1, 0, 10, 5, 11]);
        let zeroed = boulez.transpose_to(0);
        assert_eq!(zeroed.to_vec(), vec![0, 11, 6, 5, 4, 3, 1, 10, 9, 7, 2, 8]);
        assert_eq!(zeroed.transpose_to(3), boulez);
        assert_eq!(
            boulez.transpose(2).to_vec(),
            vec![5, 4, 11, 10, 9, 8, 6, 3, 2, 0, 7, 1]
        );
    }

    #[test]
    fn test_invert_about_axis() {
        assert_eq!(row(&[0, 1, 4, 6]).invert(0).to_vec(), vec![0, 11, 8, 6]);
        assert_eq!(row(&[2, 3, 6]).invert(4).to_vec(), vec![2, 1, 10]);
    }

    #[test]
    fn test_rotate_normalizes_steps() {
        let luto = row(&[0, 6, 5, 11, 10, 4, 3, 9, 8, 2, 1, 7]);
        for i in 0..12 {
            assert_eq!(luto.rotate(i as i32).first(), luto.pitch_classes()[i]);
        }
        assert_eq!(luto.rotate(15), luto.rotate(3));
        assert_eq!(luto.rotate(-1).first().value(), 7);
        assert_eq!(row(&[0, 1, 2]).rotate(4).to_vec(), vec![1, 2, 0]);
    }

    #[test]
    fn test_multiply() {
        let m5 = Row::chromatic().multiply(5);
        assert_eq!(m5.to_vec(), vec![0, 5, 10, 3, 8, 1, 6, 11, 4, 9, 2, 7]);
        assert!(m5.is_twelve_tone());
        // Non-coprime factors collapse pitch classes.
        assert!(Row::chromatic().multiply(2).has_duplicates());
    }

    #[test]
    fn test_intervals() {
        assert_eq!(Row::chromatic().intervals(false), vec![1; 11]);
        assert_eq!(Row::chromatic().retrograde().intervals(false), vec![11; 11]);
        let wrapped = Row::chromatic().intervals(true);
        assert_eq!(wrapped.len(), 12);
        assert_eq!(wrapped[11], 1);
        assert_eq!(row(&[0, 4, 7]).intervals(true), vec![4, 3, 5]);
    }

    #[test]
    fn test_composition_order_is_preserved() {
        let source = row(&[0, 1, 4]);
        let invert_then_transpose = Transformation::identity().invert(0).transpose(2);
        let transpose_then_invert = Transformation::identity().transpose(2).invert(0);
        assert_eq!(invert_then_transpose.apply(&source).to_vec(), vec![2, 1, 10]);
        assert_eq!(transpose_then_invert.apply(&source).to_vec(), vec![10, 9, 6]);
    }

    #[test]
    fn test_transposed_retrograde_inversion() {
        let source = row(&[0, 1, 4]);
        let tri = Transformation::identity().invert(0).retrograde().transpose(3);
        assert_eq!(tri.apply(&source).to_vec(), vec![11, 2, 3]);
        assert_eq!(tri.to_string(), "I@0 then R then T3");
        assert_eq!(Transformation::identity().apply(&source), source);
        assert_eq!(Transformation::identity().to_string(), "identity");
    }

    #[test]
    fn test_transformation_serde() {
        let t = Transformation::identity().rotate(2).multiply(7).retrograde();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(
            json,
            r#"[{"op":"rotate","by":2},{"op":"multiply","by":7},{"op":"retrograde"}]"#
        );
        let back: Transformation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
