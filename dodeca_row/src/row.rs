// Ordered pitch-class sequences (tone rows and sub-rows).
//
// A `Row` is never empty, so every transformation on it is total. It may
// hold any number of pitch classes with repeats: partial orderings and
// segments are rows too, and operations like `multiply` can legitimately
// merge members. Analyses that need a bijection call `ensure_distinct` or
// `ensure_twelve_tone` first and fail with `InvalidRow` otherwise.
//
// Order is meaningful here. Order-free questions go through `to_pc_set()`.
//
// Parsing (`FromStr`) accepts the common textual spellings of a row:
// comma-separated (`0, 1, 4`), whitespace-separated (`0 1 4`), or compact
// single-character (`014295B38A76`), with optional surrounding brackets.

use dodeca_pcset::{PcSet, PitchClass, Result, SerialError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered, non-empty sequence of pitch classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<u8>")]
pub struct Row {
    pcs: Vec<PitchClass>,
}

impl Row {
    /// Build a row from integers, each reduced mod 12.
    pub fn new(values: &[i32]) -> Result<Self> {
        Row::from_pitch_classes(values.iter().copied().map(PitchClass::new).collect())
    }

    pub fn from_pitch_classes(pcs: Vec<PitchClass>) -> Result<Self> {
        if pcs.is_empty() {
            return Err(SerialError::invalid_row("a row needs at least one pitch class"));
        }
        Ok(Row { pcs })
    }

    /// Build a row and require it to be a twelve-tone row.
    pub fn twelve_tone(values: &[i32]) -> Result<Self> {
        let row = Row::new(values)?;
        row.ensure_twelve_tone()?;
        Ok(row)
    }

    /// The members of a set in ascending order.
    pub fn from_pc_set(set: PcSet) -> Result<Self> {
        Row::from_pitch_classes(set.iter().collect())
    }

    /// 0, 1, 2, ... 11.
    pub fn chromatic() -> Self {
        Row {
            pcs: PitchClass::all().collect(),
        }
    }

    /// Internal constructor for slices already known to be non-empty.
    pub(crate) fn from_slice(pcs: &[PitchClass]) -> Self {
        debug_assert!(!pcs.is_empty());
        Row { pcs: pcs.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }

    pub fn pitch_classes(&self) -> &[PitchClass] {
        &self.pcs
    }

    pub fn first(&self) -> PitchClass {
        self.pcs[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.pcs.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.pcs.iter().map(|pc| pc.value()).collect()
    }

    /// The order-free content of the row.
    pub fn to_pc_set(&self) -> PcSet {
        self.pcs.iter().copied().collect()
    }

    pub fn has_duplicates(&self) -> bool {
        self.to_pc_set().len() != self.pcs.len()
    }

    /// Exactly twelve members, each pitch class once.
    pub fn is_twelve_tone(&self) -> bool {
        self.pcs.len() == 12 && !self.has_duplicates()
    }

    pub fn ensure_distinct(&self) -> Result<()> {
        if self.has_duplicates() {
            return Err(SerialError::invalid_row(format!(
                "{self} repeats a pitch class"
            )));
        }
        Ok(())
    }

    pub fn ensure_twelve_tone(&self) -> Result<()> {
        if self.pcs.len() != 12 {
            return Err(SerialError::invalid_row(format!(
                "{self} has {} members, a twelve-tone row needs 12",
                self.pcs.len()
            )));
        }
        self.ensure_distinct()
    }
}

impl TryFrom<Vec<i32>> for Row {
    type Error = SerialError;

    fn try_from(values: Vec<i32>) -> Result<Self> {
        Row::new(&values)
    }
}

impl From<Row> for Vec<u8> {
    fn from(row: Row) -> Self {
        row.to_vec()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.pcs.iter().map(|pc| pc.to_string()).collect();
        write!(f, "<{}>", members.join(" "))
    }
}

impl FromStr for Row {
    type Err = SerialError;

    fn from_str(s: &str) -> Result<Self> {
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '(' | ')' | '<' | '>' | '{' | '}'))
            .collect();
        let cleaned = cleaned.trim();

        let tokens: Vec<String> = if cleaned.contains(',') {
            cleaned.split(',').map(|t| t.trim().to_string()).collect()
        } else if cleaned.contains(char::is_whitespace) {
            cleaned.split_whitespace().map(str::to_string).collect()
        } else {
            cleaned.chars().map(String::from).collect()
        };

        let pcs = tokens
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<PitchClass>())
            .collect::<Result<Vec<_>>>()?;
        Row::from_pitch_classes(pcs)
    }
}
