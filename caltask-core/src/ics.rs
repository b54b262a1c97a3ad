//! ICS feed parsing using the icalendar crate's parser.

use chrono::{DateTime, Utc};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{CalTaskError, CalTaskResult};
use crate::event::Event;

/// Parse every VEVENT in an ICS document, in document order.
///
/// Entries missing a UID, DTSTART or DTEND are dropped; an unparseable
/// document is an error.
pub fn parse_events(content: &str) -> CalTaskResult<Vec<Event>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| CalTaskError::Feed(e.to_string()))?;

    Ok(calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(parse_vevent)
        .collect())
}

fn parse_vevent(vevent: &Component<'_>) -> Option<Event> {
    let uid = vevent.find_prop("UID")?.val.to_string();
    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| "(No title)".to_string());
    let start = to_utc(DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?)?;
    let end = to_utc(DatePerhapsTime::try_from(vevent.find_prop("DTEND")?).ok()?)?;

    Some(Event {
        uid,
        summary,
        start,
        end,
    })
}

/// Resolve an ICS date or date-time to UTC.
///
/// All-day dates become midnight UTC; floating times are taken as UTC.
fn to_utc(dpt: DatePerhapsTime) -> Option<DateTime<Utc>> {
    match dpt {
        DatePerhapsTime::Date(d) => Some(d.and_hms_opt(0, 0, 0)?.and_utc()),
        DatePerhapsTime::DateTime(dt) => match dt {
            CalendarDateTime::Utc(dt) => Some(dt),
            CalendarDateTime::Floating(naive) => Some(naive.and_utc()),
            CalendarDateTime::WithTimezone { date_time, tzid } => {
                let tz: chrono_tz::Tz = tzid.parse().ok()?;
                date_time
                    .and_local_timezone(tz)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wrap(vevents: &str) -> String {
        format!(
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//test//EN\r\n{vevents}END:VCALENDAR\r\n"
        )
    }

    #[test]
    fn test_parse_well_formed_vevent() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
             UID:evt-1@example.com\r\n\
             SUMMARY:Acme Corp,Weekly sync\r\n\
             DTSTART:20250320T150000Z\r\n\
             DTEND:20250320T160000Z\r\n\
             END:VEVENT\r\n",
        );

        let events = parse_events(&ics).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.uid, "evt-1@example.com");
        assert_eq!(event.summary, "Acme Corp,Weekly sync");
        assert_eq!(
            event.start,
            Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap()
        );
        assert_eq!(
            event.end,
            Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_vevent_without_uid_is_dropped() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
             SUMMARY:No uid here\r\n\
             DTSTART:20250320T150000Z\r\n\
             DTEND:20250320T160000Z\r\n\
             END:VEVENT\r\n\
             BEGIN:VEVENT\r\n\
             UID:evt-2\r\n\
             SUMMARY:Kept\r\n\
             DTSTART:20250321T090000Z\r\n\
             DTEND:20250321T100000Z\r\n\
             END:VEVENT\r\n",
        );

        let events = parse_events(&ics).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].uid, "evt-2");
    }

    #[test]
    fn test_vevent_without_dtend_is_dropped() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
             UID:evt-3\r\n\
             SUMMARY:Half an event\r\n\
             DTSTART:20250320T150000Z\r\n\
             END:VEVENT\r\n",
        );

        assert!(parse_events(&ics).unwrap().is_empty());
    }

    #[test]
    fn test_missing_summary_gets_placeholder() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
             UID:evt-4\r\n\
             DTSTART:20250320T150000Z\r\n\
             DTEND:20250320T160000Z\r\n\
             END:VEVENT\r\n",
        );

        let events = parse_events(&ics).unwrap();
        assert_eq!(events[0].summary, "(No title)");
    }

    #[test]
    fn test_all_day_event_becomes_midnight_utc() {
        let ics = wrap(
            "BEGIN:VEVENT\r\n\
             UID:evt-5\r\n\
             SUMMARY:All day\r\n\
             DTSTART;VALUE=DATE:20250320\r\n\
             DTEND;VALUE=DATE:20250321\r\n\
             END:VEVENT\r\n",
        );

        let events = parse_events(&ics).unwrap();
        assert_eq!(
            events[0].start,
            Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap()
        );
    }
}
