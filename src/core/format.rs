//! Size formatting.

/// Bytes in one gigabyte (binary).
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Renders a byte count in gigabytes with exactly four decimals.
///
/// The unit never changes with magnitude, so small files show as
/// `0.0000 GB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    format!("{:.4} GB", bytes as f64 / GIB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0.0000 GB");
    }

    #[test]
    fn test_format_size_one_gib() {
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0000 GB");
    }

    #[test]
    fn test_format_size_small_file_rounds_to_zero() {
        assert_eq!(format_size(2048), "0.0000 GB");
    }

    #[test]
    fn test_format_size_fractional() {
        // 1.5 GiB
        assert_eq!(format_size(1_610_612_736), "1.5000 GB");
    }

    #[test]
    fn test_format_size_always_four_decimals() {
        for bytes in [1, 999, 123_456_789, 5 * 1024 * 1024 * 1024 * 1024] {
            let s = format_size(bytes);
            let number = s.strip_suffix(" GB").unwrap();
            let decimals = number.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 4, "{s}");
        }
    }
}
