use chrono::NaiveDate;
use clubdesk_core::db::open_db_in_memory;
use clubdesk_core::{
    Club, ClubService, CrudService, DanglingReferences, DashboardStats, Event, EventService,
    IntegrityService, Member, MemberService, StatsService, Venue, VenueService,
};
use rusqlite::Connection;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seed(conn: &Connection) {
    let clubs = ClubService::new(conn);
    clubs.save(&Club::new(1, "Chess Club", None)).unwrap();
    clubs.save(&Club::new(2, "Go Club", None)).unwrap();

    VenueService::new(conn)
        .save(&Venue::new(1, "Hall", None))
        .unwrap();

    let members = MemberService::new(conn);
    members
        .save(&Member::new(1, "Ana", "ana@club.org", date(2024, 1, 1), 1))
        .unwrap();
    members
        .save(&Member::new(2, "Bo", "bo@club.org", date(2024, 1, 2), 2))
        .unwrap();

    let events = EventService::new(conn);
    events.save(&Event::new(1, "Past", 1, date(2024, 1, 10), 1)).unwrap();
    events.save(&Event::new(2, "Next", 2, date(2024, 7, 1), 1)).unwrap();
    events.save(&Event::new(3, "Street", 2, date(2024, 8, 1), 0)).unwrap();
}

#[test]
fn dashboard_stats_count_every_table() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(
        StatsService::new(&conn).dashboard_stats().unwrap(),
        DashboardStats::default()
    );

    seed(&conn);
    let stats = StatsService::new(&conn)
        .dashboard_stats_on(date(2024, 6, 1))
        .unwrap();
    assert_eq!(
        stats,
        DashboardStats {
            clubs: 2,
            members: 2,
            events: 3,
            venues: 1,
            upcoming_events: 2,
        }
    );
}

#[test]
fn deleting_a_club_leaves_dependents_and_reports_them() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn);
    let integrity = IntegrityService::new(&conn);
    assert!(integrity.find_dangling_references().unwrap().is_clean());

    assert!(ClubService::new(&conn).delete(2).unwrap());
    assert!(VenueService::new(&conn).delete(1).unwrap());

    assert_eq!(MemberService::new(&conn).find_members_by_club(2).unwrap().len(), 1);
    let report = integrity.find_dangling_references().unwrap();
    assert_eq!(
        report,
        DanglingReferences {
            members_without_club: vec![2],
            events_without_club: vec![2, 3],
            events_without_venue: vec![1, 2],
        }
    );
}
