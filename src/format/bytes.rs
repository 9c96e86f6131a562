const UNIT_BASE: u64 = 1024;
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count as `"<value> <unit>"` with at most two decimals.
///
/// Counts of a petabyte or more stay in `TB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let index = (bytes.ilog(UNIT_BASE) as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / (UNIT_BASE as f64).powi(index as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[index])
}
