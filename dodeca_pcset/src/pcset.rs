// Unordered pitch-class sets and their order-free invariants.
//
// A `PcSet` is a 12-bit mask, so it has set semantics by construction:
// no duplicates, no order, and every operation here gives the same answer
// whatever order the members were supplied in. Ordered material is a `Row`
// (in the row crate) and converts to a `PcSet` explicitly.
//
// Classification follows Forte:
// - normal form: of all rotations of the ascending members, the one with the
//   smallest span, ties broken by the smallest interval from the first
//   member to the second, then to the third, and so on;
// - prime form: the better-packed of the normal forms of the set and its
//   inversion, transposed to start on 0 (the set itself wins exact ties).
//
// The 24 transposition/inversion images are enumerated by brute force; at
// this size that is both exact and fast.

use crate::pitch_class::{OCTAVE, PitchClass};
use serde::{Deserialize, Serialize};
use std::fmt;

const MASK: u16 = 0x0FFF;

/// An unordered set of pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<i32>", into = "Vec<u8>")]
pub struct PcSet {
    bits: u16,
}

impl PcSet {
    pub const EMPTY: PcSet = PcSet { bits: 0 };
    /// All twelve pitch classes.
    pub const AGGREGATE: PcSet = PcSet { bits: MASK };

    /// Build from a raw 12-bit mask (bit n set = pitch class n present).
    /// Bits above the twelfth are ignored.
    pub fn from_bits(bits: u16) -> Self {
        PcSet { bits: bits & MASK }
    }

    pub fn bits(self) -> u16 {
        self.bits
    }

    /// Distinct pitch classes of arbitrary integers (reduced mod 12,
    /// duplicates dropped).
    pub fn from_integers(values: &[i32]) -> Self {
        values.iter().copied().map(PitchClass::new).collect()
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.bits |= 1 << pc.value();
    }

    pub fn contains(self, pc: PitchClass) -> bool {
        self.bits & (1 << pc.value()) != 0
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = PitchClass> {
        let bits = self.bits;
        (0..OCTAVE)
            .filter(move |&n| bits & (1 << n) != 0)
            .map(PitchClass::new)
    }

    pub fn to_vec(self) -> Vec<u8> {
        self.iter().map(PitchClass::value).collect()
    }

    pub fn complement(self) -> Self {
        PcSet::from_bits(!self.bits)
    }

    pub fn union(self, other: PcSet) -> Self {
        PcSet::from_bits(self.bits | other.bits)
    }

    pub fn intersection(self, other: PcSet) -> Self {
        PcSet::from_bits(self.bits & other.bits)
    }

    pub fn is_disjoint(self, other: PcSet) -> bool {
        self.bits & other.bits == 0
    }

    /// Transpose every member by `semitones` (a 12-bit rotation).
    pub fn transpose(self, semitones: i32) -> Self {
        let n = semitones.rem_euclid(OCTAVE) as u32;
        PcSet::from_bits((self.bits << n) | (self.bits >> (12 - n)))
    }

    /// Reflect every member about `axis`: m -> axis - m.
    pub fn invert(self, axis: i32) -> Self {
        self.iter().map(|pc| pc.invert(axis)).collect()
    }

    /// Multiply every member by `n` mod 12. Non-coprime `n` merges members.
    pub fn multiply(self, n: i32) -> Self {
        self.iter().map(|pc| pc.multiply(n)).collect()
    }

    /// The rotation of the ascending members most packed to the left.
    pub fn normal_form(self) -> Vec<PitchClass> {
        let members: Vec<PitchClass> = self.iter().collect();
        (0..members.len())
            .map(|start| {
                let mut rotation = members[start..].to_vec();
                rotation.extend_from_slice(&members[..start]);
                rotation
            })
            .min_by_key(|rotation| packing_key(&zeroed(rotation)))
            .unwrap_or_default()
    }

    /// Forte prime form: the canonical T/I representative, starting on 0.
    pub fn prime_form(self) -> PcSet {
        if self.is_empty() {
            return PcSet::EMPTY;
        }
        let original = zeroed(&self.normal_form());
        let inverted = zeroed(&self.invert(0).normal_form());
        let best = if packing_key(&inverted) < packing_key(&original) {
            inverted
        } else {
            original
        };
        best.into_iter().map(|v| PitchClass::new(i32::from(v))).collect()
    }

    /// Count of each interval class 1-6 over all unordered pairs of members.
    pub fn interval_vector(self) -> [u8; 6] {
        let members: Vec<PitchClass> = self.iter().collect();
        let mut vector = [0u8; 6];
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                let ic = a.interval_class(*b);
                vector[usize::from(ic) - 1] += 1;
            }
        }
        vector
    }

    /// The 24 transposition/inversion images: T0..T11 then T0I..T11I.
    pub fn ti_images(self) -> impl Iterator<Item = PcSet> {
        (0..OCTAVE)
            .map(move |n| self.transpose(n))
            .chain((0..OCTAVE).map(move |n| self.invert(n)))
    }

    /// Number of distinct sets among the 24 T/I images. Always divides 24.
    pub fn transformation_count(self) -> usize {
        let mut images: Vec<u16> = self.ti_images().map(PcSet::bits).collect();
        images.sort_unstable();
        images.dedup();
        images.len()
    }

    /// True if some transposition of `self` equals `other`.
    pub fn is_transposition_equivalent(self, other: PcSet) -> bool {
        (0..OCTAVE).any(|n| self.transpose(n) == other)
    }

    /// True if `self` and `other` belong to the same T/I set class.
    pub fn is_ti_equivalent(self, other: PcSet) -> bool {
        self.len() == other.len() && self.prime_form() == other.prime_form()
    }
}

/// Intervals of each member above the first, in order.
fn zeroed(ordering: &[PitchClass]) -> Vec<u8> {
    match ordering.first() {
        Some(&first) => ordering.iter().map(|&pc| first.interval_to(pc)).collect(),
        None => Vec::new(),
    }
}

/// Span first, then the intervals from the first member to each later one.
fn packing_key(zeroed: &[u8]) -> Vec<u8> {
    let span = zeroed.last().copied().unwrap_or(0);
    std::iter::once(span)
        .chain(zeroed.iter().skip(1).copied())
        .collect()
}

impl FromIterator<PitchClass> for PcSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PcSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<PitchClass> for PcSet {
    fn extend<I: IntoIterator<Item = PitchClass>>(&mut self, iter: I) {
        for pc in iter {
            self.insert(pc);
        }
    }
}

impl From<Vec<i32>> for PcSet {
    fn from(values: Vec<i32>) -> Self {
        PcSet::from_integers(&values)
    }
}

impl From<PcSet> for Vec<u8> {
    fn from(set: PcSet) -> Self {
        set.to_vec()
    }
}

impl fmt::Display for PcSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.iter().map(|pc| pc.to_string()).collect();
        write!(f, "[{}]", members.join(","))
    }
}
