//! Clock, date and greeting formatting for the dashboard header.

use time::OffsetDateTime;

/// Local time, falling back to UTC where the local offset is unavailable
/// (sound default inside containers and stripped-down environments).
pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn format_time(now: OffsetDateTime, clock_24h: bool) -> String {
    let (minute, second) = (now.minute(), now.second());
    if clock_24h {
        format!("{:02}:{minute:02}:{second:02}", now.hour())
    } else {
        let hour = now.hour();
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour12:02}:{minute:02}:{second:02} {suffix}")
    }
}

pub fn format_date(now: OffsetDateTime) -> String {
    format!(
        "{}, {} {}, {}",
        now.weekday(),
        now.month(),
        now.day(),
        now.year()
    )
}

pub fn greeting(now: OffsetDateTime, user_name: &str) -> String {
    let base = match now.hour() {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    let name = user_name.trim();
    if name.is_empty() {
        base.to_string()
    } else {
        format!("{base}, {name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn twenty_four_hour_format() {
        assert_eq!(format_time(datetime!(2025-08-06 19:05:09 UTC), true), "19:05:09");
        assert_eq!(format_time(datetime!(2025-08-06 00:00:01 UTC), true), "00:00:01");
    }

    #[test]
    fn twelve_hour_format_handles_noon_and_midnight() {
        assert_eq!(
            format_time(datetime!(2025-08-06 19:05:09 UTC), false),
            "07:05:09 PM"
        );
        assert_eq!(
            format_time(datetime!(2025-08-06 12:00:00 UTC), false),
            "12:00:00 PM"
        );
        assert_eq!(
            format_time(datetime!(2025-08-06 00:30:00 UTC), false),
            "12:30:00 AM"
        );
    }

    #[test]
    fn date_line_spells_everything_out() {
        assert_eq!(
            format_date(datetime!(2025-08-06 10:00:00 UTC)),
            "Wednesday, August 6, 2025"
        );
    }

    #[test]
    fn greeting_follows_hour_and_name() {
        let morning = datetime!(2025-08-06 08:00:00 UTC);
        let evening = datetime!(2025-08-06 20:00:00 UTC);
        assert_eq!(greeting(morning, ""), "Good morning");
        assert_eq!(greeting(evening, "Ada"), "Good evening, Ada");
        assert_eq!(greeting(datetime!(2025-08-06 13:00:00 UTC), " "), "Good afternoon");
    }
}
