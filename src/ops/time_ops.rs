/// Parses one duration text field as a whole number of units.
/// Empty, non-numeric, or negative input counts as zero.
pub fn parse_duration_field(text: &str) -> u64 {
    text.trim()
        .parse::<i64>()
        .map(|n| n.max(0) as u64)
        .unwrap_or(0)
}

/// Formats whole seconds as a zero-padded MM:SS readout.
pub fn format_time(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
