use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

/// Format used by the date-and-time picker.
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleTimeError {
    #[error("'{value}' is not a YYYY-MM-DDTHH:MM local time")]
    InvalidLocalInput { value: String },
    #[error("'{value}' is not an RFC 3339 timestamp")]
    InvalidTimestamp { value: String },
    #[error("'{value}' is not a UTC offset such as +02:00")]
    InvalidOffset { value: String },
}

/// Render an instant for the picker in the viewer's offset.
pub fn to_local_input(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant
        .with_timezone(&offset)
        .format(LOCAL_INPUT_FORMAT)
        .to_string()
}

/// Parse a picker value entered in `offset` back into a UTC instant.
pub fn from_local_input(value: &str, offset: FixedOffset) -> Result<DateTime<Utc>, ScheduleTimeError> {
    let invalid = || ScheduleTimeError::InvalidLocalInput {
        value: value.to_string(),
    };
    let naive = NaiveDateTime::parse_from_str(value.trim(), LOCAL_INPUT_FORMAT)
        .map_err(|_| invalid())?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(invalid)
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ScheduleTimeError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| ScheduleTimeError::InvalidTimestamp {
            value: value.to_string(),
        })
}

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Parse offsets such as `+02:00`, `-0530`, or `Z`.
pub fn parse_offset(value: &str) -> Result<FixedOffset, ScheduleTimeError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    trimmed
        .parse::<FixedOffset>()
        .map_err(|_| ScheduleTimeError::InvalidOffset {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).expect("valid offset")
    }

    #[test]
    fn local_input_round_trips_the_instant() {
        let instant = parse_timestamp("2025-10-05T14:00:00Z").expect("timestamp");
        let rendered = to_local_input(instant, offset(2));
        assert_eq!(rendered, "2025-10-05T16:00");
        assert_eq!(from_local_input(&rendered, offset(2)), Ok(instant));
    }

    #[test]
    fn negative_offsets_cross_midnight() {
        let instant = parse_timestamp("2025-10-05T02:30:00Z").expect("timestamp");
        let rendered = to_local_input(instant, offset(-5));
        assert_eq!(rendered, "2025-10-04T21:30");
        assert_eq!(from_local_input(&rendered, offset(-5)), Ok(instant));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(
            from_local_input("05/10/2025 14:00", offset(0)),
            Err(ScheduleTimeError::InvalidLocalInput { .. })
        ));
        assert!(matches!(
            parse_timestamp("tomorrow"),
            Err(ScheduleTimeError::InvalidTimestamp { .. })
        ));
        assert!(parse_offset("+25:99").is_err());
    }

    #[test]
    fn parses_offsets() {
        assert_eq!(parse_offset("Z").expect("utc"), offset(0));
        assert_eq!(parse_offset("+02:00").expect("plus two"), offset(2));
        assert_eq!(
            format_timestamp(parse_timestamp("2025-10-05T16:00:00+02:00").expect("ts")),
            "2025-10-05T14:00:00Z"
        );
    }
}
