#[cfg(test)]
mod tests {

    use blockmap::{BlockStore, Error, IntMap, SLOT_SIZE, SlotEntry};
    use std::io;

    /// Block that panics on any slot access; construction checks must run
    /// before the first read or write.
    struct UntouchableBlock {
        len: usize,
    }

    impl BlockStore for UntouchableBlock {
        fn len(&self) -> usize {
            self.len
        }

        fn read_at(&self, _offset: usize, _buf: &mut [u8]) -> io::Result<()> {
            panic!("slot read during construction");
        }

        fn write_at(&mut self, _offset: usize, _data: &[u8]) -> io::Result<()> {
            panic!("slot write during construction");
        }
    }

    #[test]
    fn test_declared_size_must_match_real_size() {
        let block = UntouchableBlock {
            len: 10 * SLOT_SIZE,
        };

        let result = IntMap::new(block, 1);

        assert!(
            matches!(result, Err(Error::SizeMismatch { declared: 1, .. })),
            "Mismatched declared size must fail without touching slots"
        );
    }

    #[test]
    fn test_block_below_one_slot_is_rejected() {
        let block = vec![0u8; SLOT_SIZE - 1];
        let len = block.len();

        let result = IntMap::new(block, len);

        assert!(matches!(
            result,
            Err(Error::InsufficientCapacity { .. })
        ));
    }

    #[test]
    fn test_capacity_is_floor_of_len_over_slot_size() {
        // 10 whole slots plus 5 stray bytes
        let block = vec![0u8; 10 * SLOT_SIZE + 5];
        let len = block.len();

        let map = IntMap::new(block, len).expect("Failed to construct table");

        assert_eq!(map.capacity(), 10, "Trailing bytes must not count");
    }

    #[test]
    fn test_single_slot_block_is_enough() {
        let block = vec![0u8; SLOT_SIZE];
        let len = block.len();

        let mut map = IntMap::new(block, len).expect("Failed to construct table");

        assert_eq!(map.capacity(), 1);
        map.put(7, 70).expect("Failed to put entry");
        assert_eq!(map.get(7).expect("Failed to get entry"), Some(70));
    }

    #[test]
    fn test_prior_block_contents_are_honoured() {
        // Hand-assemble a block holding one entry for key 1 (normalized 2,
        // home slot 1 of 10) so a fresh table must see it through the wire
        // layout alone.
        let mut block = vec![0u8; 10 * SLOT_SIZE];
        let encoded = SlotEntry::new(2, 99).serialize();
        block[SLOT_SIZE..2 * SLOT_SIZE].copy_from_slice(&encoded);

        let len = block.len();
        let map = IntMap::new(block, len).expect("Failed to construct table");

        assert_eq!(map.get(1).expect("Failed to get entry"), Some(99));
        assert_eq!(map.get(2).expect("Failed to get entry"), None);
        assert_eq!(map.occupied().expect("Failed to scan table"), 1);
    }

    #[test]
    fn test_stale_value_bytes_in_empty_slot_are_ignored() {
        // A zeroed key with leftover value bytes is still an empty slot.
        let mut block = vec![0u8; 10 * SLOT_SIZE];
        let dirty = SlotEntry::new(0, 12345).serialize();
        block[3 * SLOT_SIZE..4 * SLOT_SIZE].copy_from_slice(&dirty);

        let len = block.len();
        let mut map = IntMap::new(block, len).expect("Failed to construct table");

        // Key 3 homes onto the dirty slot and must read as absent.
        assert_eq!(map.get(3).expect("Failed to get entry"), None);

        // Claiming the dirty slot must not leak the stale bytes as a previous value.
        let previous = map.put(3, 1).expect("Failed to put entry");
        assert_eq!(previous, None);
    }
}
