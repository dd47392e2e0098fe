/// Signed integer type stored by the map.
///
/// A 4-byte deployment swaps this alias for `i32`; the slot layout constants
/// below are derived from it and follow along.
pub type MapInt = i64;

/// Width in bytes of one encoded integer field.
pub const WORD_SIZE: usize = std::mem::size_of::<MapInt>();

/// Size in bytes of one slot: a normalized key followed by a value.
pub const SLOT_SIZE: usize = 2 * WORD_SIZE;

/// Byte range of the normalized key within a serialized slot.
pub const KEY_RANGE: std::ops::Range<usize> = 0..WORD_SIZE;

/// Byte range of the value within a serialized slot.
pub const VALUE_RANGE: std::ops::Range<usize> = WORD_SIZE..SLOT_SIZE;
