use rdriverlog::config::Config;
use rdriverlog::core::calculator::totals::TotalsUnit;
use rdriverlog::core::validate::LogWarning;
use rdriverlog::errors::AppError;
use rdriverlog::models::log_sheet::LOG_TITLE;
use rdriverlog::{DailyLog, DutyStatus, Renderer};
use std::thread;

mod common;
use common::{day, ev, log_of, off_drive_off_day};

#[test]
fn test_render_off_drive_off_day_clean() {
    let sheet = Renderer::default().render(&off_drive_off_day()).expect("render");

    assert_eq!(sheet.header, LOG_TITLE);
    assert_eq!(sheet.date_str(), "06-01-2025");
    assert_eq!(sheet.edges.len(), 5);
    assert_eq!(sheet.final_status, DutyStatus::OffDuty);
    assert_eq!(sheet.totals.grand_total, 24.0);
    assert_eq!(sheet.remarks.len(), 1);
    assert_eq!(sheet.remarks[0].clock, "06:00");
    assert!(sheet.warnings.is_empty(), "{:?}", sheet.warnings);
}

#[test]
fn test_missing_events_is_hard_failure() {
    let log = DailyLog {
        date: day(),
        events: None,
        totals: Default::default(),
    };

    let err = Renderer::default().render(&log).unwrap_err();
    assert!(matches!(err, AppError::MissingEvents(ref d) if d == "06-01-2025"));
}

#[test]
fn test_empty_events_render_blank_sheet() {
    let sheet = Renderer::default().render(&log_of(vec![])).expect("render");

    assert!(sheet.edges.is_empty());
    assert!(sheet.remarks.is_empty());
    assert!(sheet
        .warnings
        .iter()
        .any(|w| matches!(w, LogWarning::IncompleteDay { covered_minutes } if *covered_minutes == 0.0)));
}

#[test]
fn test_inconsistent_totals_is_only_a_warning() {
    let log = log_of(vec![ev(DutyStatus::OffDuty, 0.0, 1440.0, "")])
        .with_total(DutyStatus::OffDuty, 20.0);

    let sheet = Renderer::default().render(&log).expect("render");

    // displayed as given
    assert_eq!(sheet.totals.value(DutyStatus::OffDuty), 20.0);
    assert_eq!(sheet.totals.grand_total, 20.0);

    assert!(sheet.warnings.iter().any(|w| matches!(
        w,
        LogWarning::InconsistentTotals { grand_total_minutes } if *grand_total_minutes == 1200.0
    )));
    assert!(sheet.warnings.iter().any(|w| matches!(
        w,
        LogWarning::TotalsMismatch { status: DutyStatus::OffDuty, .. }
    )));
}

#[test]
fn test_rounded_hour_totals_within_tolerance() {
    // 7h 20m and 16h 40m, rounded to two decimals upstream
    let log = log_of(vec![
        ev(DutyStatus::Driving, 0.0, 440.0, ""),
        ev(DutyStatus::OffDuty, 440.0, 1000.0, ""),
    ])
    .with_total(DutyStatus::Driving, 7.33)
    .with_total(DutyStatus::OffDuty, 16.67)
    .with_total(DutyStatus::SleeperBerth, 0.0)
    .with_total(DutyStatus::OnDutyNotDriving, 0.0);

    let sheet = Renderer::default().render(&log).expect("render");
    assert!(sheet.warnings.is_empty(), "{:?}", sheet.warnings);
}

#[test]
fn test_malformed_event_degrades_to_partial_render() {
    let mut bad = ev(DutyStatus::Driving, 360.0, 60.0, "");
    bad.status = "Personal Conveyance".into();
    let log = log_of(vec![
        ev(DutyStatus::OffDuty, 0.0, 360.0, ""),
        bad,
        ev(DutyStatus::Driving, 420.0, 1020.0, ""),
    ]);

    let sheet = Renderer::default().render(&log).expect("render");
    assert_eq!(sheet.edges.len(), 3);
    assert!(sheet.warnings.iter().any(|w| matches!(
        w,
        LogWarning::MalformedEvent { index: 1, status } if status == "Personal Conveyance"
    )));

    let text = sheet.warnings[0].to_string();
    assert!(text.contains("Personal Conveyance"));
}

#[test]
fn test_unknown_totals_key_warns() {
    let mut log = off_drive_off_day();
    log.totals.insert("Yard Move".into(), 0.0);
    let sheet = Renderer::default().render(&log).expect("render");
    assert!(sheet.warnings.iter().any(|w| matches!(
        w,
        LogWarning::UnknownTotalsKey { key } if key == "Yard Move"
    )));
}

#[test]
fn test_renderer_follows_config() {
    let cfg = Config {
        totals_unit: TotalsUnit::Minutes,
        remark_time_format: "%H.%M".into(),
        ..Config::default()
    };
    let log = log_of(vec![
        ev(DutyStatus::OffDuty, 0.0, 90.0, "Start"),
        ev(DutyStatus::Driving, 90.0, 1350.0, "Leaving yard"),
    ])
    .with_total(DutyStatus::OffDuty, 90.0)
    .with_total(DutyStatus::Driving, 1350.0);

    let sheet = Renderer::new(&cfg).render(&log).expect("render");
    assert_eq!(sheet.remarks[1].clock, "01.30");
    assert!(sheet.warnings.is_empty(), "{:?}", sheet.warnings);
}

#[test]
fn test_render_all_stops_on_missing_events() {
    let mut broken = off_drive_off_day();
    broken.events = None;

    let r = Renderer::default();
    assert_eq!(r.render_all(&[off_drive_off_day(), off_drive_off_day()]).unwrap().len(), 2);
    assert!(r.render_all(&[off_drive_off_day(), broken]).is_err());
}

#[test]
fn test_concurrent_renders_agree() {
    let renderer = Renderer::default();
    let log = off_drive_off_day();
    let expected = renderer.render(&log).expect("render");

    let (r, l) = (&renderer, &log);
    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(move || r.render(l).expect("render")))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());

    let bad_format = Config {
        remark_time_format: "%H:%Q".into(),
        ..Config::default()
    };
    assert!(matches!(bad_format.validate(), Err(AppError::Config(_))));

    let negative = Config {
        totals_tolerance_minutes: -1.0,
        ..Config::default()
    };
    assert!(negative.validate().is_err());

    for pattern in ["%H:%M %z", "%H:%M %Z", "%:z"] {
        let yaml = format!("remark_time_format: \"{pattern}\"\n");
        assert!(
            matches!(Config::from_yaml(&yaml), Err(AppError::Config(_))),
            "{pattern} accepted"
        );
    }

    for colour in ["#a\u{e9}\u{e9}b", "0056b3", "#0056b", "#zzzzzz"] {
        let cfg = Config {
            stroke_color: colour.into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err(), "{colour} accepted");
    }

    let cfg = Config::from_yaml("totals_unit: minutes\nwrap_width: 60\n").expect("yaml");
    assert_eq!(cfg.totals_unit, TotalsUnit::Minutes);
    assert_eq!(cfg.wrap_width, 60);
    assert_eq!(cfg.totals_tolerance_minutes, 3.0);
}

#[test]
fn test_offset_time_format_falls_back_to_clock() {
    // Renderer built from fields, skipping config validation
    let renderer = Renderer {
        remark_time_format: "%H:%M %z".into(),
        ..Renderer::default()
    };

    let sheet = renderer.render(&off_drive_off_day()).expect("render");
    assert_eq!(sheet.remarks[0].clock, "06:00");
}
