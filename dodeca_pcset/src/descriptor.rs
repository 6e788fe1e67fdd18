// Set descriptors: the classification record handed to renderers.
//
// A `SetDescriptor` bundles prime form, interval vector, Forte index,
// transformation count and (for hexachords) combinatoriality status. All of
// these are invariant under transposition and inversion, so a descriptor is
// a pure function of the set class and `DescriptorCache` memoizes it keyed
// by prime form. Cache entries are idempotent: a lost race or a poisoned
// lock only costs a recomputation.

use crate::error::Result;
use crate::pcset::PcSet;
use crate::set_class::{Combinatoriality, SetClassTable, set_class_table};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Classification record for one set class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDescriptor {
    pub prime_form: PcSet,
    pub interval_vector: [u8; 6],
    pub forte_index: String,
    pub transformation_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinatoriality: Option<Combinatoriality>,
}

impl SetDescriptor {
    pub fn cardinality(&self) -> usize {
        self.prime_form.len()
    }

    /// Order of the set's T/I invariance group (24 / transformation count).
    /// `None` for a deserialized record with a zero count.
    pub fn symmetry(&self) -> Option<usize> {
        24usize.checked_div(self.transformation_count)
    }
}

/// Classify `pcs` against the embedded reference table.
pub fn describe(pcs: PcSet) -> Result<SetDescriptor> {
    describe_with(set_class_table(), pcs)
}

/// Classify `pcs` against a specific table.
pub fn describe_with(table: &SetClassTable, pcs: PcSet) -> Result<SetDescriptor> {
    let entry = table.lookup(pcs)?;
    Ok(SetDescriptor {
        prime_form: entry.prime,
        interval_vector: pcs.interval_vector(),
        forte_index: entry.name.clone(),
        transformation_count: pcs.transformation_count(),
        combinatoriality: entry.combinatoriality,
    })
}

/// Thread-safe memo of descriptors keyed by prime form.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: Mutex<FxHashMap<PcSet, SetDescriptor>>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describe(&self, pcs: PcSet) -> Result<SetDescriptor> {
        let prime = pcs.prime_form();
        if let Some(hit) = self.lock().get(&prime) {
            return Ok(hit.clone());
        }
        tracing::trace!(%prime, "descriptor cache miss");
        let descriptor = describe(prime)?;
        self.lock().insert(prime, descriptor.clone());
        Ok(descriptor)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<PcSet, SetDescriptor>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
