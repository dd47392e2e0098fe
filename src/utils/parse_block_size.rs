/// Parses a block size argument such as `4096`, `64kb`, or `1mb` into bytes.
pub fn parse_block_size(size_str: &str) -> Result<u64, String> {
    let size_str = size_str.trim().to_lowercase();

    // Find the position where the numeric part ends
    let num_end = size_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(size_str.len());

    let (num_part, unit_part) = size_str.split_at(num_end);

    let multiplier: u64 = match unit_part {
        "" | "b" => 1, // No unit -> assume bytes
        "k" | "kb" => 1024,
        "m" | "mb" => 1024 * 1024,
        "g" | "gb" => 1024 * 1024 * 1024,
        _ => return Err(format!("Invalid block size unit: {}", unit_part)),
    };

    num_part
        .parse::<u64>()
        .map(|n| n * multiplier)
        .map_err(|_| format!("Failed to parse block size: {}", size_str))
}
