mod constants;
pub use constants::*;

mod error;
pub use error::{Error, Result};

mod block_store;
pub use block_store::{BlockStore, MappedBlock};

mod slot_entry;
pub use slot_entry::SlotEntry;

mod int_map;
pub use int_map::IntMap;
