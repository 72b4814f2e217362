//! Human-readable size formatting for listing display.

const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count with the default two decimal places.
///
/// Trailing zeros are trimmed, so whole multiples render without a fraction:
/// `format_bytes(1024)` is `"1 KB"`, not `"1.00 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes, 2)
}

/// Formats a byte count as `"<value> <unit>"` with the given precision.
///
/// The unit index is `floor(log1024(bytes))`, clamped to the largest defined
/// unit. Zero formats as the literal `"0 Bytes"`.
pub fn format_bytes_with(bytes: u64, decimals: u32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut text = format!("{value:.precision$}", precision = decimals as usize);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    format!("{text} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes_is_the_literal_zero_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes_with(0, 0), "0 Bytes");
    }

    #[test]
    fn whole_multiples_drop_the_fraction() {
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn fractional_values_respect_requested_precision() {
        assert_eq!(format_bytes_with(1536, 1), "1.5 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes_with(1536, 0), "2 KB");
        assert_eq!(format_bytes_with(1234, 2), "1.21 KB");
    }

    #[test]
    fn values_below_one_kilobyte_stay_in_bytes() {
        assert_eq!(format_bytes(1023), "1023 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
    }

    #[test]
    fn astronomically_large_counts_clamp_to_defined_units() {
        // u64::MAX is ~16 EB, well inside the table; the clamp guards the
        // index arithmetic rather than a reachable formatting case.
        let text = format_bytes(u64::MAX);
        assert!(text.ends_with(" EB"), "unexpected unit in {text:?}");
    }
}
