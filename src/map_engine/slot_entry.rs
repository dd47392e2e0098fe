use crate::map_engine::constants::*;

/// One decoded slot of the backing block.
///
/// ## Slot layout
///
/// Each slot is a fixed **16-byte** range holding two little-endian
/// two's-complement integers:
///
/// - Offset `0` → `WORD_SIZE`: **normalized key**
/// - Offset `WORD_SIZE` → `SLOT_SIZE`: **value**
///
/// A normalized key of `0` is reserved as the empty-slot sentinel; raw keys are
/// shifted on insert (see [`IntMap::put`](crate::map_engine::IntMap::put)) so no
/// live entry ever stores key `0`. Zero-filled memory therefore reads back as an
/// empty slot, which is what makes a freshly allocated block a valid empty
/// table.
///
/// ## Notes
/// - Deserialization is total: every 16-byte pattern decodes to *some* entry,
///   so arbitrary prior block contents never fail to parse.
/// - The value bytes of an empty slot carry no meaning and are never exposed
///   (see [`SlotEntry::value`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEntry {
    pub normalized_key: MapInt,
    pub value: MapInt,
}

impl SlotEntry {
    pub fn new(normalized_key: MapInt, value: MapInt) -> Self {
        Self {
            normalized_key,
            value,
        }
    }

    /// Serializes the entry into one slot's worth of bytes.
    ///
    /// Uses little-endian encoding for both fields, consistent across read and
    /// write; this is the persisted format other processes must agree on.
    #[inline]
    pub fn serialize(&self) -> [u8; SLOT_SIZE] {
        let mut buf = [0u8; SLOT_SIZE];

        buf[KEY_RANGE].copy_from_slice(&self.normalized_key.to_le_bytes());
        buf[VALUE_RANGE].copy_from_slice(&self.value.to_le_bytes());

        buf
    }

    /// Deserializes one slot's worth of bytes.
    ///
    /// Total over all bit patterns; all-zero bytes decode to the empty entry.
    #[inline]
    pub fn deserialize(data: &[u8]) -> Self {
        Self {
            normalized_key: MapInt::from_le_bytes(data[KEY_RANGE].try_into().unwrap()),
            value: MapInt::from_le_bytes(data[VALUE_RANGE].try_into().unwrap()),
        }
    }

    /// Whether this slot holds no entry. The normalized key is the only
    /// emptiness signal; there is no separate occupancy flag.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normalized_key == 0
    }

    /// Value stored in the slot, or `None` for an empty slot.
    #[inline]
    pub fn value(&self) -> Option<MapInt> {
        if self.is_empty() {
            return None;
        }

        Some(self.value)
    }
}
