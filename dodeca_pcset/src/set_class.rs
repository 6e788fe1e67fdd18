// The set-class reference table (Forte catalogue, cardinalities 2-10).
//
// The table is a read-only data asset: `data/set_classes.json` at the
// workspace root, embedded with `include_str!` and parsed once on first use
// (`set_class_table()`). Each entry carries the Forte name (with its Z
// marker), prime form, interval vector, transformation count, and for
// hexachords the combinatoriality status.
//
// The engine never invents entries. A prime form that is not in the table
// is an `UnknownSet` error, so an incomplete table surfaces as an error
// rather than a guess.

use crate::error::{Result, SerialError};
use crate::pcset::PcSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Smallest and largest catalogued cardinalities.
pub const MIN_CARDINALITY: usize = 2;
pub const MAX_CARDINALITY: usize = 10;

/// Cardinalities an interval vector alone can be looked up for.
const VECTOR_CARDINALITIES: [usize; 4] = [2, 3, 4, 6];

/// Hexachordal combinatoriality status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combinatoriality {
    /// Combinatorial under transposition, inversion and retrograde-inversion.
    #[serde(rename = "A")]
    All,
    /// Transposition only.
    #[serde(rename = "T")]
    Transposition,
    /// Inversion only.
    #[serde(rename = "I")]
    Inversion,
    /// Retrograde-inversion only.
    #[serde(rename = "RI")]
    RetrogradeInversion,
}

impl Combinatoriality {
    pub fn label(self) -> &'static str {
        match self {
            Combinatoriality::All => "A",
            Combinatoriality::Transposition => "T",
            Combinatoriality::Inversion => "I",
            Combinatoriality::RetrogradeInversion => "RI",
        }
    }
}

impl fmt::Display for Combinatoriality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalogued set class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetClass {
    /// Forte name, e.g. "3-11" or "6-Z44".
    pub name: String,
    pub prime: PcSet,
    pub vector: [u8; 6],
    /// Distinct T/I images (24 divided by the invariance order).
    pub transformations: usize,
    /// Hexachords only; `None` for non-combinatorial or non-hexachordal sets.
    #[serde(default)]
    pub combinatoriality: Option<Combinatoriality>,
}

impl SetClass {
    pub fn cardinality(&self) -> usize {
        self.prime.len()
    }

    /// True for members of a Z-related pair (shared vector, different class).
    pub fn is_z_related(&self) -> bool {
        self.name.contains('Z')
    }
}

/// The top-level JSON structure of the reference table file.
#[derive(Debug, Deserialize)]
struct SetClassFile {
    set_classes: Vec<SetClass>,
}

/// The loaded catalogue with lookup indices.
#[derive(Debug, Clone)]
pub struct SetClassTable {
    /// Entries grouped by cardinality; index = cardinality.
    by_cardinality: Vec<Vec<SetClass>>,
    /// Prime form -> (cardinality, position within that cardinality).
    by_prime: FxHashMap<PcSet, (usize, usize)>,
}

impl SetClassTable {
    /// Parse a table from a JSON string. Entries keep file order within
    /// each cardinality, which is catalogue order.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: SetClassFile = serde_json::from_str(json)?;
        let mut by_cardinality: Vec<Vec<SetClass>> = vec![Vec::new(); MAX_CARDINALITY + 1];
        let mut by_prime = FxHashMap::default();

        for entry in file.set_classes {
            let cardinality = entry.cardinality();
            if !(MIN_CARDINALITY..=MAX_CARDINALITY).contains(&cardinality) {
                return Err(SerialError::InvalidCardinality(cardinality));
            }
            let slot = (cardinality, by_cardinality[cardinality].len());
            if by_prime.insert(entry.prime, slot).is_some() {
                return Err(SerialError::DuplicateSetClass {
                    prime: entry.prime.to_vec(),
                });
            }
            by_cardinality[cardinality].push(entry);
        }

        Ok(SetClassTable {
            by_cardinality,
            by_prime,
        })
    }

    /// All catalogued entries, by cardinality then catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &SetClass> {
        self.by_cardinality.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_prime.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_prime.is_empty()
    }

    /// Entries of one cardinality (2-10).
    pub fn set_classes(&self, cardinality: usize) -> Result<&[SetClass]> {
        if !(MIN_CARDINALITY..=MAX_CARDINALITY).contains(&cardinality) {
            return Err(SerialError::InvalidCardinality(cardinality));
        }
        Ok(&self.by_cardinality[cardinality])
    }

    /// Entry whose prime form is exactly `prime`.
    pub fn by_prime(&self, prime: PcSet) -> Option<&SetClass> {
        self.by_prime
            .get(&prime)
            .map(|&(cardinality, index)| &self.by_cardinality[cardinality][index])
    }

    pub fn by_name(&self, name: &str) -> Option<&SetClass> {
        self.iter().find(|entry| entry.name == name)
    }

    /// Entry for any set, via its computed prime form.
    pub fn lookup(&self, pcs: PcSet) -> Result<&SetClass> {
        let prime = pcs.prime_form();
        self.by_prime(prime).ok_or_else(|| SerialError::UnknownSet {
            prime: prime.to_vec(),
        })
    }

    /// Forte name ("cardinality-ordinal") of any set.
    pub fn forte_index(&self, pcs: PcSet) -> Result<&str> {
        self.lookup(pcs).map(|entry| entry.name.as_str())
    }

    /// Combinatoriality status recorded for a prime form.
    pub fn combinatoriality_of_prime(&self, prime: PcSet) -> Result<Option<Combinatoriality>> {
        self.by_prime(prime)
            .map(|entry| entry.combinatoriality)
            .ok_or_else(|| SerialError::UnknownSet {
                prime: prime.to_vec(),
            })
    }

    /// Combinatoriality status from an interval vector alone. Only dyads,
    /// trichords, tetrachords and hexachords are identified, from the vector
    /// total (n choose 2); any other total is an error. Z-related hexachords
    /// share a status, so the first match is authoritative.
    pub fn combinatoriality_of_interval_vector(
        &self,
        vector: [u8; 6],
    ) -> Result<Option<Combinatoriality>> {
        let total: usize = vector.iter().map(|&v| usize::from(v)).sum();
        let cardinality = VECTOR_CARDINALITIES
            .into_iter()
            .find(|n| n * (n - 1) / 2 == total)
            .ok_or(SerialError::InvalidIntervalVector(vector))?;
        self.by_cardinality[cardinality]
            .iter()
            .find(|entry| entry.vector == vector)
            .map(|entry| entry.combinatoriality)
            .ok_or(SerialError::InvalidIntervalVector(vector))
    }

    /// Combinatoriality status of any set.
    pub fn combinatoriality_of(&self, pcs: PcSet) -> Result<Option<Combinatoriality>> {
        self.lookup(pcs).map(|entry| entry.combinatoriality)
    }
}

/// The embedded reference table, parsed once on first use.
pub fn set_class_table() -> &'static SetClassTable {
    static TABLE: OnceLock<SetClassTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let json = include_str!("../../data/set_classes.json");
        let table = SetClassTable::from_json(json).expect("embedded set_classes.json is malformed");
        tracing::debug!(entries = table.len(), "loaded set-class reference table");
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[i32]) -> PcSet {
        PcSet::from_integers(values)
    }

    #[test]
    fn test_table_sizes_per_cardinality() {
        let table = set_class_table();
        let sizes: Vec<usize> = (2..=10)
            .map(|n| table.set_classes(n).unwrap().len())
            .collect();
        assert_eq!(sizes, vec![6, 12, 29, 38, 50, 38, 29, 12, 6]);
        assert_eq!(table.len(), 220);
    }

    #[test]
    fn test_out_of_range_cardinality() {
        let table = set_class_table();
        assert!(matches!(
            table.set_classes(1),
            Err(SerialError::InvalidCardinality(1))
        ));
        assert!(matches!(
            table.set_classes(11),
            Err(SerialError::InvalidCardinality(11))
        ));
    }

    #[test]
    fn test_every_entry_is_its_own_prime_form() {
        for entry in set_class_table().iter() {
            assert_eq!(entry.prime.prime_form(), entry.prime, "{}", entry.name);
            assert_eq!(entry.prime.interval_vector(), entry.vector, "{}", entry.name);
            assert_eq!(
                entry.prime.transformation_count(),
                entry.transformations,
                "{}",
                entry.name
            );
        }
    }

    #[test]
    fn test_forte_index_lookup() {
        let table = set_class_table();
        assert_eq!(table.forte_index(set(&[0, 1, 4])).unwrap(), "3-3");
        assert_eq!(table.forte_index(set(&[0, 4, 7])).unwrap(), "3-11");
        assert_eq!(table.forte_index(set(&[8, 2, 4, 7])).unwrap(), "4-Z15");
        assert_eq!(table.forte_index(set(&[0, 3, 6, 9])).unwrap(), "4-28");
    }

    #[test]
    fn test_uncatalogued_cardinalities_are_unknown() {
        let table = set_class_table();
        assert!(matches!(
            table.forte_index(set(&[5])),
            Err(SerialError::UnknownSet { .. })
        ));
        assert!(matches!(
            table.forte_index(PcSet::AGGREGATE),
            Err(SerialError::UnknownSet { .. })
        ));
    }

    #[test]
    fn test_z_pairs() {
        let table = set_class_table();
        let z15 = table.by_name("4-Z15").unwrap();
        let z29 = table.by_name("4-Z29").unwrap();
        assert!(z15.is_z_related() && z29.is_z_related());
        assert_eq!(z15.vector, z29.vector);
        assert!(!table.by_name("4-28").unwrap().is_z_related());
    }

    #[test]
    fn test_hexachord_combinatoriality_counts() {
        let hexachords = set_class_table().set_classes(6).unwrap();
        let count = |status: Option<Combinatoriality>| {
            hexachords
                .iter()
                .filter(|h| h.combinatoriality == status)
                .count()
        };
        assert_eq!(count(Some(Combinatoriality::All)), 6);
        assert_eq!(count(Some(Combinatoriality::Transposition)), 1);
        assert_eq!(count(Some(Combinatoriality::Inversion)), 13);
        assert_eq!(count(Some(Combinatoriality::RetrogradeInversion)), 14);
        assert_eq!(count(None), 16);
        let invariance_total: usize = hexachords.iter().map(|h| h.transformations).sum();
        assert_eq!(invariance_total, 924);
    }

    #[test]
    fn test_self_complementary_hexachords_are_not_z_related() {
        let table = set_class_table();
        let mut self_complementary = 0;
        for entry in table.set_classes(6).unwrap() {
            let complement_prime = entry.prime.complement().prime_form();
            if complement_prime == entry.prime {
                assert!(!entry.is_z_related(), "{}", entry.name);
                self_complementary += 1;
            } else {
                assert!(entry.is_z_related(), "{}", entry.name);
            }
        }
        assert_eq!(self_complementary, 20);
    }

    #[test]
    fn test_combinatoriality_lookups() {
        let table = set_class_table();
        assert_eq!(
            table.combinatoriality_of_prime(set(&[0, 1, 2, 3, 4, 5])).unwrap(),
            Some(Combinatoriality::All)
        );
        assert_eq!(
            table.combinatoriality_of(set(&[3, 4, 6, 7, 8, 11])).unwrap(),
            Some(Combinatoriality::Transposition)
        );
        assert_eq!(
            table.combinatoriality_of_interval_vector([5, 4, 3, 2, 1, 0]).unwrap(),
            Some(Combinatoriality::All)
        );
        assert_eq!(
            table.combinatoriality_of_interval_vector([1, 1, 1, 0, 0, 0]).unwrap(),
            None
        );
        assert!(matches!(
            table.combinatoriality_of_interval_vector([9, 9, 9, 9, 9, 9]),
            Err(SerialError::InvalidIntervalVector(_))
        ));
    }

    #[test]
    fn test_vector_lookup_covers_dyads_to_hexachords_only() {
        let table = set_class_table();
        assert_eq!(
            table.combinatoriality_of_interval_vector([0, 0, 0, 0, 0, 1]).unwrap(),
            None
        );
        assert_eq!(
            table.combinatoriality_of_interval_vector([0, 0, 4, 0, 0, 2]).unwrap(),
            None
        );
        // 5-20 and 7-35 are catalogued, but their vectors are not accepted.
        for vector in [[2, 1, 1, 2, 3, 1], [2, 5, 4, 3, 6, 1]] {
            assert!(matches!(
                table.combinatoriality_of_interval_vector(vector),
                Err(SerialError::InvalidIntervalVector(v)) if v == vector
            ));
        }
    }

    #[test]
    fn test_from_json_rejects_duplicate_primes() {
        let json = r#"{"set_classes": [
            {"name": "2-1", "prime": [0, 1], "vector": [1, 0, 0, 0, 0, 0], "transformations": 12},
            {"name": "2-X", "prime": [0, 1], "vector": [1, 0, 0, 0, 0, 0], "transformations": 12}
        ]}"#;
        assert!(matches!(
            SetClassTable::from_json(json),
            Err(SerialError::DuplicateSetClass { prime }) if prime == vec![0, 1]
        ));
    }

    #[test]
    fn test_from_json_rejects_uncatalogued_cardinality() {
        let json = r#"{"set_classes": [
            {"name": "1-1", "prime": [0], "vector": [0, 0, 0, 0, 0, 0], "transformations": 12}
        ]}"#;
        assert!(matches!(
            SetClassTable::from_json(json),
            Err(SerialError::InvalidCardinality(1))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            SetClassTable::from_json("{\"set_classes\": 3}"),
            Err(SerialError::Json(_))
        ));
    }
}
