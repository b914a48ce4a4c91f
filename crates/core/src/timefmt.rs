//! Game time formatting.

/// Format `secs` as `ss.f`, `mm:ss.f` or `hh:mm:ss.f`.
///
/// The fraction is truncated to `precision` digits and zero-padded. Negative
/// input is formatted by magnitude.
///
/// # Examples
///
/// ```
/// use term_snake_core::format_game_time;
///
/// assert_eq!(format_game_time(5.05, 2), "05.05");
/// assert_eq!(format_game_time(75.5, 2), "01:15.50");
/// assert_eq!(format_game_time(3725.123, 3), "01:02:05.123");
/// ```
pub fn format_game_time(secs: f64, precision: u32) -> String {
    let secs = if secs.is_finite() { secs.abs() } else { 0.0 };
    let precision = precision.min(6);
    let scale = 10u128.pow(precision);
    // Round at the microsecond first so 5.05 does not truncate to 5.04.
    let micros = (secs * 1_000_000.0).round() as u128;
    let scaled = micros * scale / 1_000_000;
    let whole = (scaled / scale) as u64;
    let frac = scaled % scale;

    let hours = whole / 3600;
    let minutes = (whole / 60) % 60;
    let seconds = whole % 60;

    let mut out = if whole < 60 {
        format!("{:02}", seconds)
    } else if whole < 3600 {
        format!("{:02}:{:02}", minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    };
    if precision > 0 {
        out.push_str(&format!(".{:0width$}", frac, width = precision as usize));
    }
    out
}
