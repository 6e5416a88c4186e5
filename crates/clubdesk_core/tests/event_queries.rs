use chrono::NaiveDate;
use clubdesk_core::db::open_db_in_memory;
use clubdesk_core::{CrudService, EntityValidationError, Event, EventService};
use std::error::Error;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn event_roundtrip_preserves_optional_description() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(&conn);

    let with_description =
        Event::new(1, "Open Night", 1, date(2024, 5, 1), 2).with_description("Bring a board");
    let without_description = Event::new(2, "Blitz", 1, date(2024, 5, 8), 0);
    service.save(&with_description).unwrap();
    service.save(&without_description).unwrap();

    assert_eq!(service.find_by_id(1).unwrap().unwrap(), with_description);
    assert_eq!(service.find_by_id(2).unwrap().unwrap(), without_description);
}

#[test]
fn undated_event_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(&conn);

    let mut event = Event::new(1, "Open Night", 1, date(2024, 5, 1), 2);
    event.event_date = None;
    let err = service.save(&event).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.source()
            .and_then(|cause| cause.downcast_ref::<EntityValidationError>()),
        Some(&EntityValidationError::MissingEventDate)
    );
    assert_eq!(service.count().unwrap(), 0);
}

#[test]
fn find_events_by_club_returns_only_matching_club() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(&conn);
    service.save(&Event::new(1, "A", 1, date(2024, 5, 1), 1)).unwrap();
    service.save(&Event::new(2, "B", 2, date(2024, 5, 2), 1)).unwrap();

    let events = service.find_events_by_club(2).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, 2);
    assert!(service.find_events_by_club(3).unwrap().is_empty());
}

#[test]
fn upcoming_events_are_on_or_after_today_in_date_order() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(&conn);
    let today = date(2024, 6, 15);

    service.save(&Event::new(1, "Past", 1, date(2024, 6, 14), 1)).unwrap();
    service.save(&Event::new(2, "Later", 1, date(2024, 12, 1), 1)).unwrap();
    service.save(&Event::new(3, "Today", 1, today, 1)).unwrap();
    service.save(&Event::new(4, "Soon", 1, date(2024, 7, 1), 1)).unwrap();
    service.save(&Event::new(5, "Also today", 1, today, 1)).unwrap();

    let upcoming = service.find_upcoming_events_from(today).unwrap();
    let ids = upcoming.iter().map(|event| event.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 5, 4, 2]);
    assert!(upcoming
        .windows(2)
        .all(|pair| pair[0].event_date <= pair[1].event_date));
}

#[test]
fn upcoming_events_against_local_clock_excludes_far_past() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(&conn);
    service.save(&Event::new(1, "Ancient", 1, date(1999, 1, 1), 1)).unwrap();
    service.save(&Event::new(2, "Future", 1, date(2999, 1, 1), 1)).unwrap();

    let upcoming = service.find_upcoming_events().unwrap();
    let ids = upcoming.iter().map(|event| event.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![2]);
}

#[test]
fn update_and_delete_signal_missing_rows_with_false() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(&conn);
    let event = Event::new(7, "Simul", 1, date(2024, 9, 9), 1);

    assert!(!service.update(&event).unwrap());
    assert!(!service.delete(7).unwrap());

    service.save(&event).unwrap();
    let moved = Event {
        event_date: Some(date(2024, 9, 10)),
        ..event
    };
    assert!(service.update(&moved).unwrap());
    assert_eq!(
        service.find_by_id(7).unwrap().unwrap().event_date,
        Some(date(2024, 9, 10))
    );
    assert!(service.delete(7).unwrap());
}
