use rdriverlog::DutyStatus;
use rdriverlog::core::calculator::edges::{
    Anomaly, EdgeKind, PathCursor, build_edges, build_edges_from,
};
use rdriverlog::core::grid::{MINUTES_PER_DAY, y_fraction};

mod common;
use common::{EPS, approx, ev, off_drive_off_day};

const TOL: f64 = 1e-4;

#[test]
fn test_off_drive_off_day() {
    let log = off_drive_off_day();
    let path = build_edges(log.events.as_deref().unwrap());

    let kinds: Vec<EdgeKind> = path.edges.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EdgeKind::Horizontal,
            EdgeKind::Vertical,
            EdgeKind::Horizontal,
            EdgeKind::Vertical,
            EdgeKind::Horizontal,
        ]
    );

    let verticals: Vec<_> = path.vertical_edges().collect();
    assert_eq!(verticals.len(), 2);

    // row 1 → row 3 at 06:00
    assert!(approx(verticals[0].from.x, 0.25, TOL));
    assert!(approx(verticals[0].to.x, 0.25, TOL));
    assert!(approx(verticals[0].from.y, y_fraction(1), EPS));
    assert!(approx(verticals[0].to.y, y_fraction(3), EPS));

    // row 3 → row 1 at 14:00
    assert!(approx(verticals[1].from.x, 0.8333, TOL));
    assert!(approx(verticals[1].from.y, y_fraction(3), EPS));
    assert!(approx(verticals[1].to.y, y_fraction(1), EPS));

    let spans: Vec<(f64, f64)> = path.horizontal_edges().map(|e| (e.from.x, e.to.x)).collect();
    let expected = [(0.0, 0.25), (0.25, 0.8333), (0.8333, 1.0)];
    assert_eq!(spans.len(), expected.len());
    for ((a, b), (ea, eb)) in spans.iter().zip(expected) {
        assert!(approx(*a, ea, TOL), "start {a} != {ea}");
        assert!(approx(*b, eb, TOL), "end {b} != {eb}");
    }

    assert_eq!(path.final_status, DutyStatus::OffDuty);
    assert!(path.anomalies.is_empty());
}

#[test]
fn test_consecutive_same_status_merge() {
    let events = vec![
        ev(DutyStatus::Driving, 0.0, 240.0, ""),
        ev(DutyStatus::Driving, 240.0, 120.0, ""),
    ];
    let path = build_edges(&events);

    // the only vertical edge is the jump out of the blank-log Off Duty row
    let verticals: Vec<_> = path.vertical_edges().collect();
    assert_eq!(verticals.len(), 1);
    assert_eq!(verticals[0].event_index, 0);
    assert!(path.vertical_edges().all(|e| e.event_index != 1));

    let h: Vec<_> = path.horizontal_edges().collect();
    assert_eq!(h.len(), 2);
    let y = y_fraction(3);
    assert!(h.iter().all(|e| approx(e.from.y, y, EPS) && approx(e.to.y, y, EPS)));

    // contiguous: first ends where the second starts
    assert!(approx(h[0].to.x, h[1].from.x, EPS));
    assert!(approx(h[0].from.x, 0.0, EPS));
    assert!(approx(h[1].to.x, 0.25, EPS));
}

#[test]
fn test_event_past_midnight_clamped() {
    let events = vec![ev(DutyStatus::OffDuty, 1400.0, 100.0, "")];
    let path = build_edges(&events);

    let h: Vec<_> = path.horizontal_edges().collect();
    assert_eq!(h.len(), 1);
    assert!(approx(h[0].from.x, 0.9722, TOL));
    assert_eq!(h[0].to.x, 1.0);

    assert!(path.anomalies.iter().any(|a| matches!(
        a,
        Anomaly::OutOfRangeTime { index: 0, .. }
    )));
}

#[test]
fn test_no_vertical_edge_without_status_change() {
    let events = vec![
        ev(DutyStatus::OffDuty, 0.0, 300.0, ""),
        ev(DutyStatus::OffDuty, 300.0, 60.0, ""),
        ev(DutyStatus::OnDutyNotDriving, 360.0, 15.0, ""),
        ev(DutyStatus::OnDutyNotDriving, 375.0, 15.0, ""),
        ev(DutyStatus::Driving, 390.0, 600.0, ""),
        ev(DutyStatus::OffDuty, 990.0, 450.0, ""),
    ];
    let path = build_edges(&events);

    for v in path.vertical_edges() {
        let i = v.event_index;
        assert!(i > 0);
        assert_ne!(events[i].duty_status(), events[i - 1].duty_status());
    }
    assert_eq!(path.vertical_edges().count(), 3);
}

#[test]
fn test_horizontal_span_equals_duration() {
    let events = vec![
        ev(DutyStatus::OffDuty, 0.0, 17.5, ""),
        ev(DutyStatus::SleeperBerth, 17.5, 482.25, ""),
        ev(DutyStatus::Driving, 499.75, 660.0, ""),
        ev(DutyStatus::OnDutyNotDriving, 1159.75, 280.25, ""),
    ];
    let path = build_edges(&events);

    for h in path.horizontal_edges() {
        let expected = events[h.event_index].duration_minutes / MINUTES_PER_DAY;
        assert!(approx(h.x_span(), expected, 1e-9));
    }
}

#[test]
fn test_initial_vertical_edge_iff_first_status_not_off_duty() {
    for first in DutyStatus::ALL {
        let events = vec![ev(first, 0.0, 1440.0, "")];
        let path = build_edges(&events);
        let expected = usize::from(first != DutyStatus::OffDuty);
        assert_eq!(path.vertical_edges().count(), expected, "first = {first}");

        if let Some(v) = path.vertical_edges().next() {
            assert_eq!(v.from.x, 0.0);
            assert!(approx(v.from.y, y_fraction(1), EPS));
            assert!(approx(v.to.y, y_fraction(first.row()), EPS));
        }
    }
}

#[test]
fn test_malformed_status_is_skipped() {
    let mut bad = ev(DutyStatus::Driving, 360.0, 60.0, "");
    bad.status = "Yard Move".into();

    let events = vec![
        ev(DutyStatus::OffDuty, 0.0, 360.0, ""),
        bad,
        ev(DutyStatus::Driving, 420.0, 1020.0, ""),
    ];
    let path = build_edges(&events);

    assert!(path.edges.iter().all(|e| e.event_index != 1));
    assert_eq!(
        path.anomalies[0],
        Anomaly::MalformedEvent {
            index: 1,
            status: "Yard Move".into()
        }
    );

    // the next valid event still connects from Off Duty
    let v: Vec<_> = path.vertical_edges().collect();
    assert_eq!(v.len(), 1);
    assert_eq!(v[0].event_index, 2);
    assert!(approx(v[0].from.y, y_fraction(1), EPS));

    // the skipped hour shows up as a gap
    assert!(path.anomalies.iter().any(|a| matches!(a, Anomaly::Gap { index: 2, .. })));
}

#[test]
fn test_negative_start_clamped_to_midnight() {
    let events = vec![ev(DutyStatus::Driving, -30.0, 90.0, "")];
    let path = build_edges(&events);

    let h = path.horizontal_edges().next().unwrap();
    assert_eq!(h.from.x, 0.0);
    assert!(approx(h.to.x, 60.0 / MINUTES_PER_DAY, EPS));
    assert!(matches!(path.anomalies[0], Anomaly::OutOfRangeTime { index: 0, .. }));
}

#[test]
fn test_all_points_inside_unit_square() {
    let events = vec![
        ev(DutyStatus::SleeperBerth, -100.0, 50.0, ""),
        ev(DutyStatus::Driving, 1000.0, 9000.0, ""),
        ev(DutyStatus::OnDutyNotDriving, 2000.0, 10.0, ""),
    ];
    let path = build_edges(&events);

    for e in &path.edges {
        for p in [e.from, e.to] {
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
        }
        assert!(e.to.x >= e.from.x);
    }
}

#[test]
fn test_overlap_is_reported_not_reordered() {
    let events = vec![
        ev(DutyStatus::OffDuty, 0.0, 600.0, ""),
        ev(DutyStatus::Driving, 500.0, 940.0, ""),
    ];
    let path = build_edges(&events);

    assert_eq!(path.edges[0].event_index, 0);
    assert!(path.anomalies.iter().any(|a| matches!(
        a,
        Anomaly::Overlap { index: 1, .. }
    )));
}

#[test]
fn test_empty_events_give_empty_path() {
    let path = build_edges(&[]);
    assert!(path.edges.is_empty());
    assert!(path.anomalies.is_empty());
    assert_eq!(path.final_status, DutyStatus::OffDuty);
}

#[test]
fn test_fold_can_resume_from_cursor() {
    // continuing a day that ended in the sleeper berth
    let start = PathCursor {
        last_status: DutyStatus::SleeperBerth,
        last_end_minutes: 0.0,
    };
    let events = vec![ev(DutyStatus::SleeperBerth, 0.0, 120.0, "")];
    let path = build_edges_from(start, &events);

    assert_eq!(path.vertical_edges().count(), 0);
    assert_eq!(path.final_status, DutyStatus::SleeperBerth);
}

#[test]
fn test_same_input_same_output() {
    let log = off_drive_off_day();
    let events = log.events.as_deref().unwrap();
    assert_eq!(build_edges(events), build_edges(events));
}
