// The 48 standard serial forms of a row.
//
// Forms are operations, labelled by the operation index n rather than by the
// first pitch of the result:
// - Tn  (prime)                 m -> m + n
// - In  (inversion)             m -> n - m
// - Rn  (retrograde)            reverse of Tn
// - RIn (retrograde-inversion)  reverse of In
//
// For a row that starts on 0 these agree with the usual P/I/R/RI labels of
// the row's prime. Each form converts to an explicit `Transformation`, and
// also acts on unordered content (`apply_to_set`), where R and RI collapse
// onto T and I.

use crate::row::Row;
use crate::transform::Transformation;
use dodeca_pcset::{PcSet, Result, SerialError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormKind {
    Prime,
    Inversion,
    Retrograde,
    RetrogradeInversion,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Prime,
        FormKind::Inversion,
        FormKind::Retrograde,
        FormKind::RetrogradeInversion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormKind::Prime => "T",
            FormKind::Inversion => "I",
            FormKind::Retrograde => "R",
            FormKind::RetrogradeInversion => "RI",
        }
    }

    pub fn is_inversion(self) -> bool {
        matches!(self, FormKind::Inversion | FormKind::RetrogradeInversion)
    }

    pub fn is_retrograde(self) -> bool {
        matches!(self, FormKind::Retrograde | FormKind::RetrogradeInversion)
    }
}

/// One of the 48 serial forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SerialForm {
    pub kind: FormKind,
    /// Operation index, 0-11.
    pub n: u8,
}

impl SerialForm {
    pub fn new(kind: FormKind, n: i32) -> Self {
        SerialForm {
            kind,
            n: n.rem_euclid(12) as u8,
        }
    }

    pub fn identity() -> Self {
        SerialForm::new(FormKind::Prime, 0)
    }

    /// All 48 forms: T0..T11, I0..I11, R0..R11, RI0..RI11.
    pub fn all() -> impl Iterator<Item = SerialForm> {
        FormKind::ALL
            .into_iter()
            .flat_map(|kind| (0..12).map(move |n| SerialForm::new(kind, n)))
    }

    /// The 24 non-retrograde forms (the T/I group).
    pub fn ti_forms() -> impl Iterator<Item = SerialForm> {
        SerialForm::all().filter(|form| !form.kind.is_retrograde())
    }

    fn index(self) -> i32 {
        i32::from(self.n)
    }

    pub fn apply(self, row: &Row) -> Row {
        match self.kind {
            FormKind::Prime => row.transpose(self.index()),
            FormKind::Inversion => row.invert(self.index()),
            FormKind::Retrograde => row.transpose(self.index()).retrograde(),
            FormKind::RetrogradeInversion => row.invert(self.index()).retrograde(),
        }
    }

    /// The form's action on unordered content.
    pub fn apply_to_set(self, set: PcSet) -> PcSet {
        if self.kind.is_inversion() {
            set.invert(self.index())
        } else {
            set.transpose(self.index())
        }
    }

    /// The same operation as an explicit step composition.
    pub fn transformation(self) -> Transformation {
        let base = if self.kind.is_inversion() {
            Transformation::identity().invert(0).transpose(self.index())
        } else {
            Transformation::identity().transpose(self.index())
        };
        if self.kind.is_retrograde() {
            base.retrograde()
        } else {
            base
        }
    }

    /// The form that undoes this one.
    pub fn inverse(self) -> SerialForm {
        match self.kind {
            FormKind::Prime | FormKind::Retrograde => SerialForm::new(self.kind, -self.index()),
            FormKind::Inversion | FormKind::RetrogradeInversion => self,
        }
    }
}

impl fmt::Display for SerialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.label(), self.n)
    }
}

/// Parses labels like `T6`, `P6`, `I11`, `R0`, `RI5`.
impl FromStr for SerialForm {
    type Err = SerialError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim().to_ascii_uppercase();
        let (kind, digits) = if let Some(rest) = label.strip_prefix("RI") {
            (FormKind::RetrogradeInversion, rest)
        } else if let Some(rest) = label.strip_prefix('R') {
            (FormKind::Retrograde, rest)
        } else if let Some(rest) = label.strip_prefix('I') {
            (FormKind::Inversion, rest)
        } else if let Some(rest) = label.strip_prefix('T').or_else(|| label.strip_prefix('P')) {
            (FormKind::Prime, rest)
        } else {
            return Err(SerialError::invalid_row(format!("'{s}' is not a serial form label")));
        };
        let n: i32 = digits
            .parse()
            .map_err(|_| SerialError::invalid_row(format!("'{s}' has no operation index")))?;
        Ok(SerialForm::new(kind, n))
    }
}

impl From<SerialForm> for String {
    fn from(form: SerialForm) -> Self {
        form.to_string()
    }
}

impl TryFrom<String> for SerialForm {
    type Error = SerialError;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

/// Every serial form of `row`, in `SerialForm::all()` order.
pub fn row_forms(row: &Row) -> Vec<(SerialForm, Row)> {
    SerialForm::all().map(|form| (form, form.apply(row))).collect()
}
