mod format_bytes;
pub use format_bytes::format_bytes;

mod parse_block_size;
pub use parse_block_size::parse_block_size;
