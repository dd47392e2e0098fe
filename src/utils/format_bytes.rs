/// Converts a byte count into a human-readable size for CLI output.
///
/// Sizes at or above 1 KB are shown with two decimal places in the largest
/// fitting unit; smaller sizes are shown in raw bytes.
///
/// # Examples
/// ```
/// use blockmap::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 bytes");
/// assert_eq!(format_bytes(2048), "2.00 KB");
/// assert_eq!(format_bytes(5_242_880), "5.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [(u64, &str); 3] = [
        (1024 * 1024 * 1024, "GB"),
        (1024 * 1024, "MB"),
        (1024, "KB"),
    ];

    for (scale, unit) in UNITS {
        if bytes >= scale {
            return format!("{:.2} {}", bytes as f64 / scale as f64, unit);
        }
    }

    format!("{} bytes", bytes)
}
