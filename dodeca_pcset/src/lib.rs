// Dodeca pitch-class set engine.
//
// Canonical classification of unordered pitch-class collections for
// post-tonal analysis. Everything here is a pure function of pitch-class
// content; the only shared state is the read-only reference table and an
// optional descriptor memo.
//
// Architecture:
// - pitch_class.rs: `PitchClass`, integer arithmetic modulo 12
// - pcset.rs: `PcSet` (12-bit mask), normal/prime form, interval vector,
//   T/I images and transformation count
// - set_class.rs: the embedded Forte reference table and its lookups
// - descriptor.rs: `SetDescriptor` records and the `DescriptorCache` memo
// - error.rs: `SerialError`, shared with the row crate
//
// Ordered material (tone rows) lives in `dodeca_row`, which converts to
// `PcSet` explicitly whenever an order-free answer is wanted.

pub mod descriptor;
pub mod error;
pub mod pcset;
pub mod pitch_class;
pub mod set_class;

pub use descriptor::{DescriptorCache, SetDescriptor, describe};
pub use error::{Result, SerialError};
pub use pcset::PcSet;
pub use pitch_class::{PitchClass, interval_between};
pub use set_class::{Combinatoriality, SetClass, SetClassTable, set_class_table};
