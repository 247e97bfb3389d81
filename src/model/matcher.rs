// Matches loaded events against a day of the viewed month.
//
// Fixed events recur every year on their day/month. Occasional events match
// only their exact date. Fixed matches come first, both in source order.
use crate::model::item::{Celebration, FixedEvent, OccasionalEvent};

/// Events on `day` of the month `selected_month` (zero-based) of `selected_year`.
pub fn events_for_day<'a>(
    day: i32,
    selected_month: u32,
    selected_year: i32,
    fixed: &'a [FixedEvent],
    occasional: &'a [OccasionalEvent],
) -> Vec<Celebration<'a>> {
    let day = i64::from(day);
    let month = i64::from(selected_month) + 1;
    let year = i64::from(selected_year);

    let fixed_hits = fixed
        .iter()
        .filter(|e| e.falls_on(day, month))
        .map(Celebration::Fixed);
    let occasional_hits = occasional
        .iter()
        .filter(|e| e.falls_on(day, month, year))
        .map(Celebration::Occasional);

    fixed_hits.chain(occasional_hits).collect()
}

/// Icons to show in a day cell: the first `max` icons, and whether more
/// events exist than were shown.
pub fn icon_preview<'a>(events: &[Celebration<'a>], max: usize) -> (Vec<&'a str>, bool) {
    let icons = events
        .iter()
        .take(max)
        .map(|e| e.icon().unwrap_or(""))
        .collect();
    (icons, events.len() > max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(day: i64, month: i64, title: &str) -> FixedEvent {
        FixedEvent {
            day,
            month: Some(month),
            title: title.to_string(),
            description: String::new(),
            icon: Some("🎂".to_string()),
        }
    }

    #[test]
    fn preview_flags_overflow_past_max() {
        let events = vec![fixed(1, 1, "a"), fixed(1, 1, "b"), fixed(1, 1, "c")];
        let hits = events_for_day(1, 0, 2026, &events, &[]);
        let (icons, more) = icon_preview(&hits, 2);
        assert_eq!(icons, vec!["🎂", "🎂"]);
        assert!(more);

        let (icons, more) = icon_preview(&hits[..2], 2);
        assert_eq!(icons.len(), 2);
        assert!(!more);
    }

    #[test]
    fn keeps_source_order_within_kind() {
        let events = vec![fixed(3, 5, "first"), fixed(4, 5, "other"), fixed(3, 5, "second")];
        let hits = events_for_day(3, 4, 1999, &events, &[]);
        let titles: Vec<_> = hits.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }
}
