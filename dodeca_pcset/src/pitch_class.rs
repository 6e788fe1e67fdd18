// Pitch-class arithmetic modulo 12.
//
// `PitchClass` is the leaf type of the whole engine. Its constructor reduces
// any integer to its residue mod 12, so no value outside 0-11 can exist and
// downstream code never repeats inline modulo logic. Addition, negation and
// subtraction are provided as operator impls; `interval_between` gives the
// directed interval and `interval_class` the unordered one (0-6).

use crate::error::SerialError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Number of pitch classes in the octave.
pub const OCTAVE: i32 = 12;

/// An equal-tempered pitch reduced modulo the octave (0 = C, 1 = C#, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    /// Reduce any integer to its pitch class.
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(OCTAVE) as u8)
    }

    /// All twelve pitch classes in ascending order.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..OCTAVE).map(PitchClass::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(i32::from(self.0) + semitones)
    }

    /// Reflect about `axis`: m -> axis - m. Axis 0 is plain negation.
    pub fn invert(self, axis: i32) -> Self {
        PitchClass::new(axis - i32::from(self.0))
    }

    /// Multiply by `n` mod 12 (the M5/M7 operations when n is 5 or 7).
    pub fn multiply(self, n: i32) -> Self {
        PitchClass::new(i32::from(self.0) * n)
    }

    /// Directed interval from `self` up to `other`, in 0-11.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        interval_between(self, other)
    }

    /// Unordered interval class between `self` and `other`, in 0-6.
    pub fn interval_class(self, other: PitchClass) -> u8 {
        let interval = self.interval_to(other);
        interval.min(12 - interval)
    }
}

/// Directed interval from `a` up to `b`, in 0-11.
pub fn interval_between(a: PitchClass, b: PitchClass) -> u8 {
    (b.0 + 12 - a.0) % 12
}

impl From<i32> for PitchClass {
    fn from(value: i32) -> Self {
        PitchClass::new(value)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl Add for PitchClass {
    type Output = PitchClass;

    fn add(self, rhs: PitchClass) -> PitchClass {
        PitchClass((self.0 + rhs.0) % 12)
    }
}

impl Sub for PitchClass {
    type Output = PitchClass;

    fn sub(self, rhs: PitchClass) -> PitchClass {
        PitchClass((self.0 + 12 - rhs.0) % 12)
    }
}

impl Neg for PitchClass {
    type Output = PitchClass;

    fn neg(self) -> PitchClass {
        PitchClass((12 - self.0) % 12)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses integers (reduced mod 12) plus the single-letter shorthands used
/// in the serial literature: `t`/`a` for 10 and `e`/`b` for 11.
impl FromStr for PitchClass {
    type Err = SerialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "t" | "a" => Ok(PitchClass(10)),
            "e" | "b" => Ok(PitchClass(11)),
            other => other
                .parse::<i32>()
                .map(PitchClass::new)
                .map_err(|_| SerialError::invalid_row(format!("'{token}' is not a pitch class"))),
        }
    }
}
