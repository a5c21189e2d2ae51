//! Mood aggregation: daily summaries and the 7-day trend.
//!
//! Pure functions over entry slices; the presentation layer calls these on
//! demand rather than observing derived state.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::models::mood::MoodEntry;

/// How far the recent average must move from the earlier average before the
/// week reads as improving or declining.
pub const TREND_SHIFT_THRESHOLD: f64 = 5.0;

/// Days compared on each side of the week when classifying the trend.
const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub count: usize,
    /// Arithmetic mean intensity; 0 when there are no entries, never NaN.
    pub average_intensity: f64,
    pub dominant_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Short weekday label, e.g. `"Mon"`.
    pub day: String,
    pub average_intensity: f64,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTrend {
    /// Exactly 7 buckets, oldest first.
    pub points: Vec<TrendPoint>,
    pub direction: TrendDirection,
}

/// Summarize the entries falling on `day`.
pub fn daily_summary(entries: &[MoodEntry], day: NaiveDate) -> DailySummary {
    let day_entries: Vec<&MoodEntry> = entries
        .iter()
        .filter(|e| e.timestamp.date_naive() == day)
        .collect();

    let count = day_entries.len();
    let average_intensity = if count == 0 {
        0.0
    } else {
        day_entries.iter().map(|e| e.intensity).sum::<f64>() / count as f64
    };

    DailySummary {
        count,
        average_intensity,
        dominant_tag: dominant_tag(&day_entries),
    }
}

/// The tag with the highest occurrence count across the entries' tag sets.
/// Ties break to the tag encountered first in entry iteration order; which
/// tag that is for any given tie is implementation-defined.
fn dominant_tag(entries: &[&MoodEntry]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        for tag in &entry.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for entry in entries {
        for tag in &entry.tags {
            let count = counts[tag.as_str()];
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((tag.as_str(), count));
            }
        }
    }

    best.map(|(tag, _)| tag.to_string())
}

/// Seven daily buckets for `reference_date` and the six preceding days,
/// oldest first, with the week's trend classification.
pub fn weekly_trend(entries: &[MoodEntry], reference_date: NaiveDate) -> WeeklyTrend {
    let mut points = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let day = reference_date - Duration::days(offset);
        let summary = daily_summary(entries, day);
        points.push(TrendPoint {
            day: day.format("%a").to_string(),
            average_intensity: summary.average_intensity,
            entry_count: summary.count,
        });
    }

    let direction = classify_trend(&points);
    WeeklyTrend { points, direction }
}

/// Compare the mean of the last up-to-3 days with entries against the mean of
/// the first up-to-3. With fewer than 6 qualifying days the two windows
/// overlap; with exactly 2 they coincide and the week reads stable.
fn classify_trend(points: &[TrendPoint]) -> TrendDirection {
    let qualifying: Vec<f64> = points
        .iter()
        .filter(|p| p.average_intensity > 0.0)
        .map(|p| p.average_intensity)
        .collect();

    if qualifying.len() < 2 {
        return TrendDirection::InsufficientData;
    }

    let window = qualifying.len().min(TREND_WINDOW);
    let earlier = mean(&qualifying[..window]);
    let recent = mean(&qualifying[qualifying.len() - window..]);

    if recent > earlier + TREND_SHIFT_THRESHOLD {
        TrendDirection::Improving
    } else if recent < earlier - TREND_SHIFT_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Entries at or after `cutoff`, most recent first.
pub fn recent_entries_since(entries: &[MoodEntry], cutoff: DateTime<Utc>) -> Vec<MoodEntry> {
    let mut recent: Vec<MoodEntry> = entries
        .iter()
        .filter(|e| e.timestamp >= cutoff)
        .cloned()
        .collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry_at(date: NaiveDate, hour: u32, intensity: f64, tags: &[&str]) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            intensity,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            note: None,
            source: "manual".into(),
            timestamp: date.and_hms_opt(hour, 0, 0).unwrap().and_utc(),
        }
    }

    // ── daily_summary ────────────────────────────────────────────────────

    #[test]
    fn test_daily_summary_empty() {
        let summary = daily_summary(&[], day(2026, 8, 3));
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_intensity, 0.0);
        assert_eq!(summary.dominant_tag, None);
    }

    #[test]
    fn test_daily_summary_same_day_average() {
        let d = day(2026, 8, 3);
        let entries = vec![
            entry_at(d, 9, 80.0, &["Happy"]),
            entry_at(d, 14, 20.0, &["Sad"]),
        ];
        let summary = daily_summary(&entries, d);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average_intensity, 50.0);
        // Two tags tied at one occurrence each: the winner is
        // implementation-defined but must be one of them.
        let dominant = summary.dominant_tag.unwrap();
        assert!(dominant == "Happy" || dominant == "Sad");
    }

    #[test]
    fn test_daily_summary_ignores_other_days() {
        let d = day(2026, 8, 3);
        let entries = vec![
            entry_at(d, 9, 80.0, &[]),
            entry_at(day(2026, 8, 4), 9, 0.0, &[]),
        ];
        let summary = daily_summary(&entries, d);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.average_intensity, 80.0);
    }

    #[test]
    fn test_daily_summary_average_within_bounds() {
        let d = day(2026, 8, 3);
        let entries = vec![
            entry_at(d, 8, 35.0, &[]),
            entry_at(d, 12, 60.0, &[]),
            entry_at(d, 20, 90.0, &[]),
        ];
        let summary = daily_summary(&entries, d);
        assert!(summary.average_intensity >= 35.0);
        assert!(summary.average_intensity <= 90.0);
    }

    #[test]
    fn test_dominant_tag_by_count() {
        let d = day(2026, 8, 3);
        let entries = vec![
            entry_at(d, 8, 50.0, &["Tired", "Stressed"]),
            entry_at(d, 12, 50.0, &["Tired"]),
            entry_at(d, 20, 50.0, &["Calm"]),
        ];
        let summary = daily_summary(&entries, d);
        assert_eq!(summary.dominant_tag.as_deref(), Some("Tired"));
    }

    #[test]
    fn test_dominant_tag_none_when_untagged() {
        let d = day(2026, 8, 3);
        let entries = vec![entry_at(d, 8, 50.0, &[])];
        assert_eq!(daily_summary(&entries, d).dominant_tag, None);
    }

    // ── weekly_trend ─────────────────────────────────────────────────────

    #[test]
    fn test_weekly_trend_always_seven_buckets_oldest_first() {
        let reference = day(2026, 8, 3);
        let trend = weekly_trend(&[], reference);
        assert_eq!(trend.points.len(), 7);
        assert_eq!(trend.points[0].day, "Tue"); // 2026-07-28
        assert_eq!(trend.points[6].day, "Mon"); // 2026-08-03
        assert!(trend.points.iter().all(|p| p.entry_count == 0));
    }

    #[test]
    fn test_weekly_trend_insufficient_data_empty() {
        let trend = weekly_trend(&[], day(2026, 8, 3));
        assert_eq!(trend.direction, TrendDirection::InsufficientData);
    }

    #[test]
    fn test_weekly_trend_insufficient_data_single_day() {
        let reference = day(2026, 8, 3);
        let entries = vec![entry_at(reference, 9, 70.0, &[])];
        let trend = weekly_trend(&entries, reference);
        assert_eq!(trend.direction, TrendDirection::InsufficientData);
    }

    #[test]
    fn test_weekly_trend_improving() {
        let reference = day(2026, 8, 7);
        let entries = vec![
            entry_at(reference - Duration::days(6), 9, 30.0, &[]),
            entry_at(reference - Duration::days(5), 9, 35.0, &[]),
            entry_at(reference - Duration::days(4), 9, 30.0, &[]),
            entry_at(reference - Duration::days(2), 9, 70.0, &[]),
            entry_at(reference - Duration::days(1), 9, 75.0, &[]),
            entry_at(reference, 9, 80.0, &[]),
        ];
        let trend = weekly_trend(&entries, reference);
        assert_eq!(trend.direction, TrendDirection::Improving);
    }

    #[test]
    fn test_weekly_trend_declining() {
        let reference = day(2026, 8, 7);
        let entries = vec![
            entry_at(reference - Duration::days(6), 9, 80.0, &[]),
            entry_at(reference - Duration::days(5), 9, 75.0, &[]),
            entry_at(reference - Duration::days(4), 9, 80.0, &[]),
            entry_at(reference - Duration::days(2), 9, 40.0, &[]),
            entry_at(reference - Duration::days(1), 9, 35.0, &[]),
            entry_at(reference, 9, 30.0, &[]),
        ];
        let trend = weekly_trend(&entries, reference);
        assert_eq!(trend.direction, TrendDirection::Declining);
    }

    #[test]
    fn test_weekly_trend_stable_within_threshold() {
        let reference = day(2026, 8, 7);
        let entries = vec![
            entry_at(reference - Duration::days(6), 9, 50.0, &[]),
            entry_at(reference - Duration::days(5), 9, 52.0, &[]),
            entry_at(reference - Duration::days(4), 9, 48.0, &[]),
            entry_at(reference - Duration::days(2), 9, 53.0, &[]),
            entry_at(reference - Duration::days(1), 9, 51.0, &[]),
            entry_at(reference, 9, 49.0, &[]),
        ];
        let trend = weekly_trend(&entries, reference);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_weekly_trend_two_qualifying_days_coincide_as_stable() {
        // Both windows cover the same two days, so even a 40-point jump
        // reads stable.
        let reference = day(2026, 8, 7);
        let entries = vec![
            entry_at(reference - Duration::days(5), 9, 30.0, &[]),
            entry_at(reference, 9, 70.0, &[]),
        ];
        let trend = weekly_trend(&entries, reference);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_weekly_trend_windows_take_up_to_three() {
        // Four qualifying days: windows of 3 overlap on the middle days.
        // earlier = (30+30+70)/3, recent = (30+70+80)/3 → +16.7 → improving.
        let reference = day(2026, 8, 7);
        let entries = vec![
            entry_at(reference - Duration::days(5), 9, 30.0, &[]),
            entry_at(reference - Duration::days(3), 9, 30.0, &[]),
            entry_at(reference - Duration::days(1), 9, 70.0, &[]),
            entry_at(reference, 9, 80.0, &[]),
        ];
        let trend = weekly_trend(&entries, reference);
        assert_eq!(trend.direction, TrendDirection::Improving);
    }

    #[test]
    fn test_weekly_trend_zero_average_days_do_not_qualify() {
        // Days with entries averaging 0 are excluded from classification.
        let reference = day(2026, 8, 7);
        let entries = vec![
            entry_at(reference - Duration::days(4), 9, 0.0, &[]),
            entry_at(reference, 9, 70.0, &[]),
        ];
        let trend = weekly_trend(&entries, reference);
        assert_eq!(trend.direction, TrendDirection::InsufficientData);
    }

    // ── recent_entries_since ─────────────────────────────────────────────

    #[test]
    fn test_recent_entries_since_filters_and_sorts() {
        let d = day(2026, 8, 3);
        let old = entry_at(d - Duration::days(10), 9, 10.0, &[]);
        let mid = entry_at(d - Duration::days(2), 9, 20.0, &[]);
        let new = entry_at(d, 9, 30.0, &[]);
        let entries = vec![old.clone(), new.clone(), mid.clone()];

        let cutoff = (d - Duration::days(7)).and_hms_opt(0, 0, 0).unwrap().and_utc();
        let recent = recent_entries_since(&entries, cutoff);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, new.id);
        assert_eq!(recent[1].id, mid.id);
    }
}
