//! Fixed-capacity map from signed integer keys to signed integer values,
//! persisted entirely inside a single pre-allocated memory block.
//!
//! The caller allocates the block once (a memory-mapped file, a heap buffer,
//! anything implementing [`BlockStore`]) and hands it to [`IntMap`] as raw
//! bytes together with its exact length. The table divides it into fixed
//! 16-byte slots and resolves collisions by linear probing with wraparound. It
//! never grows or rehashes and supports no deletion; see the type-level docs
//! on [`IntMap`] for the locking contract when the block is shared.

pub mod map_engine;
pub use map_engine::{
    BlockStore, Error, IntMap, KEY_RANGE, MapInt, MappedBlock, Result, SLOT_SIZE, SlotEntry,
    VALUE_RANGE, WORD_SIZE,
};

pub mod cli;

pub mod utils;
pub use utils::format_bytes;
