//! Booking coordinator integration tests
//!
//! Run against a real temp-file SQLite database with migrations applied,
//! exercising the transaction semantics that unit tests cannot: uniqueness
//! conflicts, rollback on failed edits, and concurrent submissions.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use reserve_server::booking::{self, BookingError, BookingRequest, BookingSubject};
use reserve_server::db::DbService;
use reserve_server::db::repository::{booking as booking_repo, seat, session, zone};
use shared::models::{SeatCreate, SeatType, SessionCreate, ZoneCreate};

struct TestDb {
    // Held so the database file outlives the pool
    _dir: tempfile::TempDir,
    pool: SqlitePool,
}

async fn open_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.db");
    let db = DbService::new(path.to_str().expect("utf8 path"))
        .await
        .expect("open test database");
    TestDb {
        _dir: dir,
        pool: db.pool,
    }
}

struct Fixture {
    zone_id: i64,
    session_a: i64,
    session_b: i64,
}

/// One zone, two seats ("A-01", "A-02" in section A), two sessions
async fn seed(pool: &SqlitePool) -> Fixture {
    let zone = zone::create(
        pool,
        ZoneCreate {
            name: "Reading Room".into(),
            description: None,
        },
    )
    .await
    .expect("create zone");

    for number in ["A-01", "A-02"] {
        seat::create(
            pool,
            SeatCreate {
                zone_id: zone.id,
                section: "A".into(),
                seat_number: number.into(),
                seat_type: SeatType::Normal,
                pos_x: 0.0,
                pos_y: 0.0,
                width: 60.0,
                height: 60.0,
                rotation: 0.0,
            },
        )
        .await
        .expect("create seat");
    }

    let mut sessions = Vec::new();
    for (name, start, end) in [("Morning", "09:00", "12:00"), ("Afternoon", "13:00", "17:00")] {
        let s = session::create(
            pool,
            SessionCreate {
                zone_id: zone.id,
                name: name.into(),
                start_time: start.into(),
                end_time: end.into(),
                display_order: None,
                weekdays: vec![0, 1, 2, 3, 4, 5, 6],
            },
        )
        .await
        .expect("create session");
        sessions.push(s.id);
    }

    Fixture {
        zone_id: zone.id,
        session_a: sessions[0],
        session_b: sessions[1],
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn self_service(student_id: &str) -> BookingSubject {
    BookingSubject::SelfService {
        student_id: student_id.into(),
        linked_user_id: None,
    }
}

fn request(
    fixture: &Fixture,
    student_id: &str,
    seat_number: &str,
    session_ids: Vec<i64>,
) -> BookingRequest {
    BookingRequest {
        subject: self_service(student_id),
        date: date(2030, 5, 20),
        zone_id: fixture.zone_id,
        section: "A".into(),
        seat_number: seat_number.into(),
        session_ids,
        study_content: HashMap::new(),
        replacing_booking_ids: Vec::new(),
    }
}

#[tokio::test]
async fn duplicate_sessions_collapse_to_one_row_each() {
    let db = open_db().await;
    let fx = seed(&db.pool).await;

    let req = request(
        &fx,
        "30001",
        "A-01",
        vec![fx.session_a, fx.session_a, fx.session_b],
    );
    let outcome = booking::submit(&db.pool, req).await.expect("submit");
    assert_eq!(outcome.booking_ids.len(), 2);

    let rows = booking_repo::find_by_student_and_date(&db.pool, "30001", date(2030, 5, 20))
        .await
        .expect("read back");
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn normalized_seat_numbers_resolve_prefixed_labels() {
    let db = open_db().await;
    let fx = seed(&db.pool).await;

    // Stored label is "A-01"; the client sends the bare number
    let req = request(&fx, "30002", "1", vec![fx.session_a]);
    booking::submit(&db.pool, req).await.expect("submit");

    let missing = request(&fx, "30002", "9", vec![fx.session_b]);
    let err = booking::submit(&db.pool, missing).await.unwrap_err();
    assert!(matches!(err, BookingError::SeatNotFound { .. }));
}

#[tokio::test]
async fn second_booker_loses_the_seat() {
    let db = open_db().await;
    let fx = seed(&db.pool).await;

    booking::submit(&db.pool, request(&fx, "30003", "A-01", vec![fx.session_a]))
        .await
        .expect("first booking");

    let err = booking::submit(&db.pool, request(&fx, "40004", "A-01", vec![fx.session_a]))
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Conflict(_)));

    // The loser has no partial rows
    let rows = booking_repo::find_by_student(&db.pool, "40004")
        .await
        .expect("read back");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn failed_edit_rolls_back_and_keeps_the_original() {
    let db = open_db().await;
    let fx = seed(&db.pool).await;

    let original = booking::submit(&db.pool, request(&fx, "30005", "A-01", vec![fx.session_a]))
        .await
        .expect("original booking");

    // Another student takes the afternoon on the same seat
    booking::submit(&db.pool, request(&fx, "40006", "A-01", vec![fx.session_b]))
        .await
        .expect("competing booking");

    // Edit: replace the morning-only booking with morning + afternoon.
    // The afternoon insert collides, so the whole edit must roll back.
    let mut edit = request(&fx, "30005", "A-01", vec![fx.session_a, fx.session_b]);
    edit.replacing_booking_ids = original.booking_ids.clone();
    let err = booking::submit(&db.pool, edit).await.unwrap_err();
    assert!(matches!(err, BookingError::Conflict(_)));

    let kept = booking_repo::find_by_ids(&db.pool, &original.booking_ids)
        .await
        .expect("read back");
    assert_eq!(kept.len(), original.booking_ids.len());
}

#[tokio::test]
async fn concurrent_submits_have_exactly_one_winner() {
    let db = open_db().await;
    let fx = seed(&db.pool).await;

    let first = booking::submit(&db.pool, request(&fx, "30007", "A-01", vec![fx.session_a]));
    let second = booking::submit(&db.pool, request(&fx, "40008", "A-01", vec![fx.session_a]));
    let (a, b) = tokio::join!(first, second);

    assert_eq!(
        [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(),
        1,
        "exactly one submission may win the seat"
    );
    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(loser.unwrap_err(), BookingError::Conflict(_)));
}

#[tokio::test]
async fn cancel_is_scoped_to_the_subject() {
    let db = open_db().await;
    let fx = seed(&db.pool).await;

    let outcome = booking::submit(
        &db.pool,
        request(&fx, "30009", "A-01", vec![fx.session_a, fx.session_b]),
    )
    .await
    .expect("submit");

    // A different student's cancel must not touch the rows
    let removed = booking::cancel(&db.pool, "99999", &outcome.booking_ids)
        .await
        .expect("cancel as stranger");
    assert_eq!(removed, 0);

    let removed = booking::cancel(&db.pool, "30009", &outcome.booking_ids)
        .await
        .expect("cancel as owner");
    assert_eq!(removed, outcome.booking_ids.len() as u64);

    let rows = booking_repo::find_by_student(&db.pool, "30009")
        .await
        .expect("read back");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn sessions_outside_the_zone_are_rejected() {
    let db = open_db().await;
    let fx = seed(&db.pool).await;

    let req = request(&fx, "30010", "A-01", vec![fx.session_a, 999_999]);
    let err = booking::submit(&db.pool, req).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}
