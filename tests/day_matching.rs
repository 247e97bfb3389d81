use celebra::model::{Celebration, CelebrationKind, FixedEvent, OccasionalEvent, events_for_day};

fn fixed(day: i64, month: i64, title: &str) -> FixedEvent {
    FixedEvent {
        day,
        month: Some(month),
        title: title.to_string(),
        description: String::new(),
        icon: None,
    }
}

fn occasional(day: i64, month: i64, year: i64, title: &str) -> OccasionalEvent {
    OccasionalEvent {
        day,
        month: Some(month),
        year: Some(year),
        title: title.to_string(),
        description: String::new(),
        icon: None,
    }
}

#[test]
fn test_fixed_event_recurs_every_year() {
    let events = vec![fixed(25, 12, "Navidad")];

    // December is month index 11.
    let this_year = events_for_day(25, 11, 2025, &events, &[]);
    let last_year = events_for_day(25, 11, 2024, &events, &[]);

    assert_eq!(this_year, vec![Celebration::Fixed(&events[0])]);
    assert_eq!(last_year, vec![Celebration::Fixed(&events[0])]);
    assert!(events_for_day(25, 10, 2025, &events, &[]).is_empty());
    assert!(events_for_day(24, 11, 2025, &events, &[]).is_empty());
}

#[test]
fn test_occasional_event_needs_exact_date() {
    let events = vec![occasional(27, 2, 2026, "Cumple de Sofi")];

    assert_eq!(events_for_day(27, 1, 2026, &[], &events).len(), 1);
    assert!(events_for_day(27, 1, 2025, &[], &events).is_empty());
    assert!(events_for_day(27, 2, 2026, &[], &events).is_empty());
}

#[test]
fn test_fixed_matches_come_before_occasional() {
    let fixed_events = vec![fixed(1, 5, "Dia del trabajador")];
    let occasional_events = vec![
        occasional(1, 5, 2026, "Locro"),
        occasional(1, 5, 2027, "Otro año"),
        occasional(1, 5, 2026, "Empanadas"),
    ];

    let hits = events_for_day(1, 4, 2026, &fixed_events, &occasional_events);
    let summary: Vec<(CelebrationKind, &str)> =
        hits.iter().map(|c| (c.kind(), c.title())).collect();

    assert_eq!(
        summary,
        vec![
            (CelebrationKind::Annual, "Dia del trabajador"),
            (CelebrationKind::Occasional, "Locro"),
            (CelebrationKind::Occasional, "Empanadas"),
        ]
    );
}

#[test]
fn test_no_matches_is_empty_not_missing() {
    let fixed_events = [fixed(1, 1, "x")];
    let occasional_events = [occasional(1, 1, 2026, "y")];
    let hits = events_for_day(13, 6, 2026, &fixed_events, &occasional_events);
    assert!(hits.is_empty());
    assert!(events_for_day(1, 0, 2026, &[], &[]).is_empty());
}

#[test]
fn test_records_with_unknown_month_or_year_never_match() {
    let mut no_month = fixed(10, 3, "sin mes");
    no_month.month = None;
    let mut no_year = occasional(10, 3, 2026, "sin año");
    no_year.year = None;

    assert!(events_for_day(10, 2, 2026, &[no_month], &[no_year]).is_empty());
}
