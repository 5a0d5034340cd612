//! Summary panel: scalar cards, rankings, and delay breakdown tables.

use crate::model::{DelayRow, MetricsSummary, RankedEntry};

use super::{fixed2, or_placeholder, PLACEHOLDER};

/// Column headers of a delay breakdown table.
pub const BREAKDOWN_COLUMNS: [&str; 5] = [
    "Category",
    "Total",
    "Delayed",
    "% delayed",
    "Avg delay (days)",
];

pub const GENRE_HEADING: &str = "By genre";
pub const AGE_HEADING: &str = "By age group";

/// Label used when a row has neither a genre nor an age group.
pub const NOT_APPLICABLE: &str = "N/A";

/// Everything the summary panel displays, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub avg_loan_days: String,
    pub total_records: String,
    pub unique_borrowers: String,
    pub currently_loaned: String,
    pub top_person: String,
    pub avg_delay: String,
    pub top_people: Vec<String>,
    pub top_books: Vec<String>,
    pub delay_by_genre: BreakdownView,
    pub delay_by_age: BreakdownView,
}

impl SummaryView {
    pub fn from_metrics(m: &MetricsSummary) -> Self {
        Self {
            avg_loan_days: or_placeholder(m.average_loan_days),
            total_records: or_placeholder(m.total_records),
            unique_borrowers: or_placeholder(m.unique_borrowers),
            currently_loaned: or_placeholder(m.currently_loaned),
            top_person: top_person_line(m.top_person.as_ref()),
            avg_delay: fixed2(mean_avg_delay(&m.delay_by_genre)),
            top_people: ranking_lines(&m.top_people),
            top_books: ranking_lines(&m.top_books),
            delay_by_genre: BreakdownView::new(GENRE_HEADING, &m.delay_by_genre),
            delay_by_age: BreakdownView::new(AGE_HEADING, &m.delay_by_age),
        }
    }
}

fn top_person_line(p: Option<&RankedEntry>) -> String {
    match p {
        Some(RankedEntry { label: Some(name), count }) if !name.is_empty() => {
            format!("{name} ({})", or_placeholder(*count))
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Mean of the per-category averages that are present.
pub fn mean_avg_delay(rows: &[DelayRow]) -> Option<f64> {
    let known: Vec<f64> = rows.iter().filter_map(|r| r.avg_delay).collect();
    if known.is_empty() {
        return None;
    }
    Some(known.iter().sum::<f64>() / known.len() as f64)
}

/// One `"label (count)"` line per entry, in input order.
pub fn ranking_lines(entries: &[RankedEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            format!(
                "{} ({})",
                e.label.as_deref().unwrap_or(PLACEHOLDER),
                or_placeholder(e.count)
            )
        })
        .collect()
}

/// A titled delay breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownView {
    pub heading: String,
    pub body: BreakdownBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BreakdownBody {
    /// No rows: render the heading and a placeholder, not an empty table.
    Empty,
    Table(Vec<DelayRowView>),
}

impl BreakdownView {
    pub fn new(heading: &str, rows: &[DelayRow]) -> Self {
        let body = if rows.is_empty() {
            BreakdownBody::Empty
        } else {
            BreakdownBody::Table(rows.iter().map(DelayRowView::from_row).collect())
        };
        Self {
            heading: heading.to_string(),
            body,
        }
    }
}

/// One formatted table row.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayRowView {
    pub label: String,
    pub total: u64,
    pub delayed: u64,
    /// Whole percent; drives both the bar width and the text.
    pub pct: i64,
    pub avg_delay: String,
}

impl DelayRowView {
    pub fn from_row(r: &DelayRow) -> Self {
        let label = r
            .genre
            .as_deref()
            .or(r.age_group.as_deref())
            .unwrap_or(NOT_APPLICABLE)
            .to_string();
        Self {
            label,
            total: r.total.unwrap_or(0),
            delayed: r.delayed.unwrap_or(0),
            pct: percent(r.pct_delayed.unwrap_or(0.0)),
            avg_delay: fixed2(r.avg_delay),
        }
    }
}

/// `fraction * 100`, rounded half-up.
pub fn percent(fraction: f64) -> i64 {
    (fraction * 100.0 + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0.5), 50);
        assert_eq!(percent(0.125), 13);
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(1.0), 100);
    }

    #[test]
    fn label_prefers_genre_then_age_group() {
        let both = DelayRow {
            genre: Some("F".into()),
            age_group: Some("20-29".into()),
            ..Default::default()
        };
        assert_eq!(DelayRowView::from_row(&both).label, "F");

        let age = DelayRow {
            age_group: Some("50+".into()),
            ..Default::default()
        };
        assert_eq!(DelayRowView::from_row(&age).label, "50+");

        assert_eq!(DelayRowView::from_row(&DelayRow::default()).label, NOT_APPLICABLE);
    }

    #[test]
    fn top_person_needs_a_name() {
        let nameless = RankedEntry { label: None, count: Some(0) };
        assert_eq!(top_person_line(Some(&nameless)), PLACEHOLDER);

        let empty = RankedEntry { label: Some(String::new()), count: Some(4) };
        assert_eq!(top_person_line(Some(&empty)), PLACEHOLDER);

        let named = RankedEntry { label: Some("Ana".into()), count: Some(12) };
        assert_eq!(top_person_line(Some(&named)), "Ana (12)");
    }
}
