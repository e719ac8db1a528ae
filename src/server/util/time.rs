use chrono::{DateTime, Timelike, Utc};

/// Truncates a timestamp to the start of its hour.
///
/// Enrollment start dates are stored hour-aligned so that "starts in the past"
/// checks compare whole hours instead of raw instants.
pub fn start_of_hour(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn truncates_to_hour() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 14, 13, 42, 57).unwrap();

        let truncated = start_of_hour(ts);

        assert_eq!(truncated, Utc.with_ymd_and_hms(2025, 8, 14, 13, 0, 0).unwrap());
    }

    #[test]
    fn already_aligned_timestamp_is_unchanged() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 14, 13, 0, 0).unwrap();

        assert_eq!(start_of_hour(ts), ts);
    }
}
