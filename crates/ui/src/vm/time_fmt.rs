/// Remaining countdown as `MM:SS`. Minutes are not wrapped into hours.
#[must_use]
pub fn format_countdown(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Time spent as `"1h 2min 3s"`. Zero parts are dropped, but a lone `"0s"` is kept.
#[must_use]
pub fn format_elapsed(secs: u32) -> String {
    let hours = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = secs % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}min"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_pads_both_fields() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(65), "01:05");
        assert_eq!(format_countdown(180 * 60), "180:00");
    }

    #[test]
    fn elapsed_omits_zero_parts() {
        assert_eq!(format_elapsed(0), "0s");
        assert_eq!(format_elapsed(60), "1min");
        assert_eq!(format_elapsed(3723), "1h 2min 3s");
        assert_eq!(format_elapsed(3600 + 5), "1h 5s");
    }
}
