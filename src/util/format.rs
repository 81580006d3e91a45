//! Text for the CLI's log and summary lines.

const SIZE_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Input size with a binary prefix, e.g. `4.00 KiB`. Plain byte counts below
/// 1 KiB are printed without decimals.
///
/// ```
/// use entrovis::util::format::format_bytes;
/// assert_eq!(format_bytes(4096), "4.00 KiB");
/// assert_eq!(format_bytes(17), "17 B");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    match unit {
        0 => format!("{bytes} B"),
        _ => format!("{value:.2} {}", SIZE_UNITS[unit]),
    }
}

/// Format the summary line printed after an analysis.
///
/// Format: `windows=N min=0.000000 max=0.000000 mean=0.000000`
pub fn format_stats(stats: Option<&crate::analysis::SequenceStats>) -> String {
    match stats {
        Some(s) => format!(
            "windows={} min={:.6} max={:.6} mean={:.6}",
            s.count, s.min, s.max, s.mean
        ),
        None => "windows=0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SequenceStats;

    #[test]
    fn test_format_bytes_binary_prefixes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(130_000), "126.95 KiB");
        assert_eq!(format_bytes(3 << 20), "3.00 MiB");
        // Largest unit keeps growing instead of running off the table.
        assert_eq!(format_bytes(2048 << 40), "2048.00 TiB");
    }

    #[test]
    fn test_format_stats() {
        assert_eq!(format_stats(None), "windows=0");
        let stats = SequenceStats {
            count: 3,
            min: 0.0,
            max: 0.5,
            mean: 0.25,
        };
        assert_eq!(
            format_stats(Some(&stats)),
            "windows=3 min=0.000000 max=0.500000 mean=0.250000"
        );
    }
}
