use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use memmap2::MmapMut;
use tracing::debug;

/// Raw access to a caller-allocated memory block.
///
/// The table borrows the block through this trait; it never allocates or frees
/// the underlying memory, and it must not retain it past the caller's
/// teardown. Implementations report the block's true byte length and move
/// whole byte ranges in and out; a partial read or write is an error, never a
/// short count.
pub trait BlockStore {
    /// True byte length of the block.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fills `buf` from the block starting at `offset`.
    ///
    /// # Returns
    /// - `Err(std::io::Error)` if the range falls outside the block.
    fn read_at(&self, offset: usize, buf: &mut [u8]) -> io::Result<()>;

    /// Writes all of `data` into the block starting at `offset`.
    ///
    /// # Returns
    /// - `Err(std::io::Error)` if the range falls outside the block.
    fn write_at(&mut self, offset: usize, data: &[u8]) -> io::Result<()>;
}

fn checked_range(block_len: usize, offset: usize, len: usize) -> io::Result<std::ops::Range<usize>> {
    let end = offset
        .checked_add(len)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "block range overflows"))?;

    if end > block_len {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("range {offset}..{end} outside block of {block_len} bytes"),
        ));
    }

    Ok(offset..end)
}

impl BlockStore for Vec<u8> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> io::Result<()> {
        let range = checked_range(self.as_slice().len(), offset, buf.len())?;
        buf.copy_from_slice(&self[range]);
        Ok(())
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> io::Result<()> {
        let range = checked_range(self.as_slice().len(), offset, data.len())?;
        self[range].copy_from_slice(data);
        Ok(())
    }
}

/// File-backed block mapped into the process address space.
///
/// This is the crate's stand-in for a shared-memory segment: one process
/// allocates the file at a fixed size with [`MappedBlock::create`], and any
/// process may later map the same file with [`MappedBlock::open`] and hand it
/// to the table. The block's size is fixed at allocation time and is never
/// changed here.
///
/// Dropping a `MappedBlock` unmaps it; the file itself stays where the caller
/// put it.
pub struct MappedBlock {
    mmap: MmapMut,
}

impl MappedBlock {
    /// Allocates a new zero-filled block file of exactly `len` bytes and maps it.
    ///
    /// Refuses to clobber an existing file: the block is allocated once, up
    /// front, by whoever owns it.
    ///
    /// # Returns
    /// - `Err(std::io::Error)` if the file exists, cannot be created, or
    ///   cannot be mapped.
    pub fn create(path: &Path, len: u64) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)?;

        file.set_len(len)?;

        let mmap = unsafe { MmapMut::map_mut(&file)? };

        debug!("Allocated {} byte block at {}", len, path.display());

        Ok(Self { mmap })
    }

    /// Maps an existing block file at its current length.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;

        let mmap = unsafe { MmapMut::map_mut(&file)? };

        Ok(Self { mmap })
    }

    /// Flushes outstanding changes through to the backing file.
    pub fn flush(&self) -> io::Result<()> {
        self.mmap.flush()
    }
}

impl BlockStore for MappedBlock {
    fn len(&self) -> usize {
        self.mmap.len()
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> io::Result<()> {
        let range = checked_range(self.mmap.len(), offset, buf.len())?;
        buf.copy_from_slice(&self.mmap[range]);
        Ok(())
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> io::Result<()> {
        let range = checked_range(self.mmap.len(), offset, data.len())?;
        self.mmap[range].copy_from_slice(data);
        Ok(())
    }
}
