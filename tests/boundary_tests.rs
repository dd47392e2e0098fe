#[cfg(test)]
mod tests {

    use blockmap::{Error, IntMap, MapInt, SLOT_SIZE};

    /// Helper function to create a fresh heap-backed table with the given slot count
    fn create_map(slots: usize) -> IntMap<Vec<u8>> {
        let block = vec![0u8; slots * SLOT_SIZE];
        let len = block.len();

        IntMap::new(block, len).expect("Failed to construct table")
    }

    #[test]
    fn test_put_with_max_key_is_rejected() {
        let mut map = create_map(10);

        let err = map.put(MapInt::MAX, 1).expect_err("Reserved key must fail");

        assert!(matches!(err, Error::KeyAboveMax { .. }));
        assert_eq!(err.to_string(), format!("max usable key is {}", MapInt::MAX - 1));
    }

    #[test]
    fn test_put_with_min_key_is_rejected() {
        let mut map = create_map(10);

        let err = map.put(MapInt::MIN, 1).expect_err("Reserved key must fail");

        assert!(matches!(err, Error::KeyBelowMin { .. }));
        assert_eq!(err.to_string(), format!("min usable key is {}", MapInt::MIN + 1));
    }

    #[test]
    fn test_get_with_reserved_keys_is_rejected() {
        let map = create_map(10);

        assert!(matches!(
            map.get(MapInt::MAX),
            Err(Error::KeyAboveMax { .. })
        ));
        assert!(matches!(
            map.get(MapInt::MIN),
            Err(Error::KeyBelowMin { .. })
        ));
    }

    #[test]
    fn test_adjacent_boundary_keys_work() {
        let mut map = create_map(10);

        let max_usable = MapInt::MAX - 1;
        let min_usable = MapInt::MIN + 1;

        let max_previous = map.put(max_usable, 2).expect("Failed to put entry");
        let min_previous = map.put(min_usable, 3).expect("Failed to put entry");

        assert_eq!(max_previous, None);
        assert_eq!(min_previous, None);

        assert_eq!(map.get(max_usable).expect("Failed to get entry"), Some(2));
        assert_eq!(map.get(min_usable).expect("Failed to get entry"), Some(3));
    }

    #[test]
    fn test_rejected_key_leaves_table_untouched() {
        let mut map = create_map(10);

        map.put(1, 2).expect("Failed to put entry");

        map.put(MapInt::MAX, 99).expect_err("Reserved key must fail");

        assert_eq!(map.occupied().expect("Failed to scan table"), 1);
        assert_eq!(map.get(1).expect("Failed to get entry"), Some(2));
    }
}
