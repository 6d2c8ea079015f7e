//! Byte-size display helpers.

/// One mebibyte, the unit size limits are displayed in.
const MIB: u64 = 1024 * 1024;

/// A size ceiling in whole megabytes for error messages, rounded to
/// the nearest integer (`104_857_600` → `100`).
#[must_use]
pub const fn size_limit_mb(max_size_bytes: u64) -> u64 {
    (max_size_bytes + MIB / 2) / MIB
}

/// Human-readable file size for list display: `"512 B"`, `"2.0 KB"`,
/// `"4.8 MB"`, `"1.2 GB"`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[expect(clippy::cast_precision_loss)] // display only; file sizes fit f64 comfortably
    let bytes_f = bytes as f64;
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes_f / 1024.0)
    } else if bytes < MIB * 1024 {
        format!("{:.1} MB", bytes_f / 1_048_576.0)
    } else {
        format!("{:.1} GB", bytes_f / 1_073_741_824.0)
    }
}
