//! Playback time formatting

/// Format a position in seconds for display
///
/// - `m:ss` below one hour (`3:04`)
/// - `h:mm:ss` from one hour up (`1:02:03`)
/// - `--:--` for `NaN` or infinite input
///
/// Fractions are truncated and negative input is shown as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--".to_string();
    }

    let total = seconds.max(0.0).floor() as u64;
    let minutes = total / 60;
    let secs = total % 60;

    if minutes >= 60 {
        format!("{}:{:02}:{:02}", minutes / 60, minutes % 60, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.99), "0:09");
        assert_eq!(format_time(184.0), "3:04");
        assert_eq!(format_time(3599.0), "59:59");
    }

    #[test]
    fn hours() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3723.0), "1:02:03");
    }

    #[test]
    fn non_finite_and_negative() {
        assert_eq!(format_time(f64::NAN), "--:--");
        assert_eq!(format_time(f64::INFINITY), "--:--");
        assert_eq!(format_time(-3.0), "0:00");
    }
}
