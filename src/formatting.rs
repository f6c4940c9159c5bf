// ABOUTME: Human-readable formatting for elapsed time and challenge progress
// ABOUTME: Used by the CLI status and live workout displays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sports Pulse Contributors

use chrono::{DateTime, Utc};
use pulse_core::models::Challenge;

/// `MM:SS`, or `HH:MM:SS` from one hour up
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// `"<current> / <target> <unit>"` with whole numbers
#[must_use]
pub fn format_progress(challenge: &Challenge) -> String {
    format!(
        "{} / {} {}",
        challenge.current_progress.trunc(),
        challenge.target_value.trunc(),
        challenge.unit
    )
}

/// Days left in the challenge window
#[must_use]
pub fn format_time_remaining(challenge: &Challenge, now: DateTime<Utc>) -> String {
    match challenge.remaining_days(now) {
        0 => "Expires today".to_owned(),
        1 => "1 day left".to_owned(),
        days => format!("{days} days left"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pulse_core::models::{ChallengeBuilder, ChallengeKind};

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(75), "01:15");
        assert_eq!(format_elapsed(3599), "59:59");
        assert_eq!(format_elapsed(3661), "01:01:01");
    }

    #[test]
    fn test_format_progress_truncates() {
        let mut challenge =
            ChallengeBuilder::new("Burn", ChallengeKind::Calories, 2000.0, Utc::now(), 7).build();
        challenge.current_progress = 512.7;
        assert_eq!(format_progress(&challenge), "512 / 2000 calories");
    }

    #[test]
    fn test_format_time_remaining() {
        let now = Utc::now();
        let challenge = ChallengeBuilder::new("Week", ChallengeKind::SessionCount, 5.0, now, 7)
            .build();
        assert_eq!(format_time_remaining(&challenge, now), "7 days left");
        assert_eq!(
            format_time_remaining(&challenge, now + Duration::days(6)),
            "1 day left"
        );
        assert_eq!(
            format_time_remaining(&challenge, now + Duration::days(9)),
            "Expires today"
        );
    }
}
