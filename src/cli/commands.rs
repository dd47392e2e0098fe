use crate::map_engine::MapInt;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Allocate a new zero-filled block file with a fixed capacity
    Create {
        /// Number of slots the block should hold
        #[arg(long, value_name = "N", conflicts_with = "size")]
        slots: Option<u64>,

        /// Raw block size in bytes (accepts unit suffixes, e.g. "64kb")
        #[arg(long, value_name = "SIZE")]
        size: Option<String>,
    },

    /// Store a value under a key, printing the value it replaced
    Put {
        /// The key to store under
        #[arg(allow_negative_numbers = true)]
        key: MapInt,

        /// The value to store
        #[arg(allow_negative_numbers = true)]
        value: MapInt,
    },

    /// Read the value stored under a key
    Get {
        /// The key to look up
        #[arg(allow_negative_numbers = true)]
        key: MapInt,
    },

    /// Get current state of the block file
    Info,
}
