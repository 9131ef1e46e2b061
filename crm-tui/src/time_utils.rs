use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// "Mar 05, 2024 at 2:30 PM"
pub fn format_card_date(dt: OffsetDateTime) -> String {
    let format = format_description!(
        "[month repr:short] [day], [year] at [hour repr:12 padding:none]:[minute] [period]"
    );
    dt.format(format).unwrap_or_else(|_| dt.to_string())
}

/// "2024-03-05 14:30", the editable form of a timestamp.
pub fn format_form_date(dt: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    dt.format(format).unwrap_or_default()
}

/// Parse a form date in the given offset and normalize it to UTC.
pub fn parse_form_date(input: &str, offset: UtcOffset) -> Option<OffsetDateTime> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    let input = input.trim().replacen('T', " ", 1);
    PrimitiveDateTime::parse(&input, format)
        .ok()
        .map(|dt| dt.assume_offset(offset).to_offset(UtcOffset::UTC))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn card_date_uses_twelve_hour_clock() {
        assert_eq!(
            format_card_date(datetime!(2024-03-05 14:30 UTC)),
            "Mar 05, 2024 at 2:30 PM"
        );
        assert_eq!(
            format_card_date(datetime!(2024-11-20 00:05 UTC)),
            "Nov 20, 2024 at 12:05 AM"
        );
    }

    #[test]
    fn form_date_parses_in_local_offset() {
        let parsed = parse_form_date("2024-03-05 14:30", offset!(+2)).unwrap();
        assert_eq!(parsed, datetime!(2024-03-05 12:30 UTC));
        assert_eq!(parsed.offset(), UtcOffset::UTC);
    }

    #[test]
    fn form_date_accepts_datetime_local_separator() {
        assert_eq!(
            parse_form_date("2024-03-05T14:30", UtcOffset::UTC),
            Some(datetime!(2024-03-05 14:30 UTC))
        );
    }

    #[test]
    fn malformed_form_date_is_rejected() {
        assert_eq!(parse_form_date("05/03/2024", UtcOffset::UTC), None);
        assert_eq!(parse_form_date("2024-13-01 10:00", UtcOffset::UTC), None);
    }

    #[test]
    fn form_date_round_trips_through_display() {
        let dt = datetime!(2024-07-09 08:05 UTC);
        assert_eq!(format_form_date(dt), "2024-07-09 08:05");
    }
}
