use tracing::{debug, warn};

use crate::map_engine::block_store::BlockStore;
use crate::map_engine::constants::*;
use crate::map_engine::error::{Error, Result};
use crate::map_engine::slot_entry::SlotEntry;

/// Fixed-capacity map from signed integer keys to signed integer values, laid
/// out directly inside a caller-supplied memory block.
///
/// The block is divided into `capacity = block_len / SLOT_SIZE` slots. A key's
/// home slot is `|key| % capacity`; collisions resolve by linear probing with
/// wraparound, so any operation touches at most `capacity` slots. Lookups are
/// `O(1)` while the table is sparse and degrade toward `O(capacity)` as the
/// load factor approaches 1.
///
/// The table never grows or rehashes, and supports no deletion. Two keys are
/// reserved and rejected on every call: the type maximum (normalization shifts
/// non-negative keys up by one, which would overflow it) and the type minimum
/// (its magnitude has no positive counterpart of the same width).
///
/// ## Locking
///
/// `IntMap` performs no internal synchronization. When the block is genuinely
/// shared between processes or threads, the caller must serialize `put`/`get`
/// externally (a lock held around each call, or a single-writer protocol);
/// unsynchronized concurrent writers can lose updates or observe half-written
/// slots. That contract lives with the block's owner, not here.
pub struct IntMap<S: BlockStore> {
    block: S,
    capacity: usize,
}

impl<S: BlockStore> IntMap<S> {
    /// Wraps a caller-allocated block.
    ///
    /// `declared_len` must equal the block's true byte length; this is a
    /// consistency check on the caller's bookkeeping, not a derivation. The
    /// block contents are taken as-is: zero-filled regions read as empty slots
    /// and anything else as previously written entries, so prior zeroing is
    /// not assumed.
    ///
    /// # Parameters
    /// - `block`: The pre-allocated memory block, borrowed for the table's
    ///   lifetime.
    /// - `declared_len`: The byte length the caller believes the block has.
    ///
    /// # Returns
    /// - `Ok(IntMap)`: A table over the block.
    /// - `Err(Error::SizeMismatch)`: `declared_len` disagrees with the block.
    /// - `Err(Error::InsufficientCapacity)`: the block cannot hold one slot.
    pub fn new(block: S, declared_len: usize) -> Result<Self> {
        let actual = block.len();

        if declared_len != actual {
            return Err(Error::SizeMismatch {
                declared: declared_len,
                actual,
            });
        }

        let capacity = declared_len / SLOT_SIZE;

        if capacity < 1 {
            return Err(Error::InsufficientCapacity { len: declared_len });
        }

        if declared_len % SLOT_SIZE != 0 {
            warn!(
                "Block length {} leaves {} trailing bytes outside the slot range.",
                declared_len,
                declared_len % SLOT_SIZE
            );
        }

        debug!(
            "Attached table of {} slots to {} byte block.",
            capacity, declared_len
        );

        Ok(Self { block, capacity })
    }

    /// Number of slots the block holds. Fixed for the table's entire lifetime.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Counts occupied slots with a full scan of the block.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of slots currently holding an entry.
    /// - `Err(Error::Io)`: A raw block read failed.
    pub fn occupied(&self) -> Result<usize> {
        let mut count = 0;

        for index in 0..self.capacity {
            if !self.read_slot(index)?.is_empty() {
                count += 1;
            }
        }

        Ok(count)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Exactly one slot is written on success; nothing is written on any
    /// failure path.
    ///
    /// # Parameters
    /// - `key`: Any signed integer except the two reserved boundary values.
    /// - `value`: Any signed integer, full range.
    ///
    /// # Returns
    /// - `Ok(None)`: The key was absent; a fresh slot was claimed.
    /// - `Ok(Some(previous))`: The key was present; `previous` was replaced.
    /// - `Err(Error::KeyAboveMax | Error::KeyBelowMin)`: Reserved boundary key.
    /// - `Err(Error::CapacityExhausted)`: Every slot holds some other key; the
    ///   table is left unmodified.
    /// - `Err(Error::Io)`: The block failed a raw read or write.
    pub fn put(&mut self, key: MapInt, value: MapInt) -> Result<Option<MapInt>> {
        Self::validate_key(key)?;

        let (index, entry) = self.find_slot(key)?.ok_or(Error::CapacityExhausted)?;

        let previous = entry.value();

        self.write_slot(index, SlotEntry::new(Self::normalize_key(key), value))?;

        Ok(previous)
    }

    /// Looks up the value stored under `key`. Never writes.
    ///
    /// # Returns
    /// - `Ok(Some(value))`: The key is present.
    /// - `Ok(None)`: The key is absent, whether its probe ended on an empty
    ///   slot or walked a full table without a match.
    /// - `Err(Error::KeyAboveMax | Error::KeyBelowMin)`: Reserved boundary key.
    /// - `Err(Error::Io)`: The block failed a raw read.
    pub fn get(&self, key: MapInt) -> Result<Option<MapInt>> {
        Self::validate_key(key)?;

        match self.find_slot(key)? {
            Some((_, entry)) => Ok(entry.value()),
            None => Ok(None),
        }
    }

    /// Releases the borrowed block back to the caller.
    pub fn into_block(self) -> S {
        self.block
    }

    /// Walks the probe sequence for `key`: the home slot, then each successor
    /// index with wraparound, every slot visited at most once.
    ///
    /// Stops at the first slot that is empty or that already holds this key's
    /// normalized form. Returns `None` only after all `capacity` slots were
    /// visited without either; this is the only way a full table is detected.
    fn find_slot(&self, key: MapInt) -> Result<Option<(usize, SlotEntry)>> {
        let home = self.hash_key(key);
        let normalized = Self::normalize_key(key);

        for step in 0..self.capacity {
            let index = (home + step) % self.capacity;
            let entry = self.read_slot(index)?;

            if entry.is_empty() || entry.normalized_key == normalized {
                return Ok(Some((index, entry)));
            }
        }

        Ok(None)
    }

    /// Home slot for a key.
    ///
    /// Hashes the *raw* key while storage and comparison use the *normalized*
    /// key. The pair stays consistent between `put` and `get`, and existing
    /// blocks depend on this exact probe start: hashing the normalized key
    /// instead would shift every non-negative key's home slot by one.
    #[inline]
    fn hash_key(&self, key: MapInt) -> usize {
        (key.unsigned_abs() as u64 % self.capacity as u64) as usize
    }

    /// Shifts non-negative keys up by one so a stored key is never the all-zero
    /// empty sentinel. Injective over the usable key range; negative keys are
    /// already non-zero and stay unshifted.
    #[inline]
    fn normalize_key(key: MapInt) -> MapInt {
        if key >= 0 { key + 1 } else { key }
    }

    /// Rejects the two reserved boundary keys before any slot is touched.
    fn validate_key(key: MapInt) -> Result<()> {
        if key == MapInt::MAX {
            return Err(Error::KeyAboveMax { max: MapInt::MAX - 1 });
        }

        if key == MapInt::MIN {
            return Err(Error::KeyBelowMin { min: MapInt::MIN + 1 });
        }

        Ok(())
    }

    fn read_slot(&self, index: usize) -> Result<SlotEntry> {
        let mut buf = [0u8; SLOT_SIZE];
        self.block.read_at(index * SLOT_SIZE, &mut buf)?;

        Ok(SlotEntry::deserialize(&buf))
    }

    fn write_slot(&mut self, index: usize, entry: SlotEntry) -> Result<()> {
        self.block.write_at(index * SLOT_SIZE, &entry.serialize())?;

        Ok(())
    }
}
