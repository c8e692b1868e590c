//! Metrics and distributions over a slice of call records.
//!
//! Every function here is total: an empty slice yields zeros or an empty
//! distribution, never an error.

use std::collections::HashMap;

use crate::model::call::{CallRecord, Flag};
use crate::model::distribution::Distribution;

pub fn total_calls(records: &[CallRecord]) -> usize {
    records.len()
}

pub fn completed_calls(records: &[CallRecord]) -> usize {
    records.iter().filter(|c| c.is_completed()).count()
}

/// Rounds to one decimal place, the precision every card shows.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Interested completed calls as a percentage of completed calls.
pub fn conversion_rate_value(records: &[CallRecord]) -> f64 {
    let completed: Vec<&CallRecord> = records.iter().filter(|c| c.is_completed()).collect();
    if completed.is_empty() {
        return 0.0;
    }
    let interested = completed
        .iter()
        .filter(|c| c.final_interest_flag.map(|f| f.is_yes()).unwrap_or(false))
        .count();
    round1(interested as f64 / completed.len() as f64 * 100.0)
}

pub fn conversion_rate(records: &[CallRecord]) -> String {
    format!("{:.1}", conversion_rate_value(records))
}

/// Mean interaction count over completed calls.
pub fn average_interactions_value(records: &[CallRecord]) -> f64 {
    let completed: Vec<&CallRecord> = records.iter().filter(|c| c.is_completed()).collect();
    if completed.is_empty() {
        return 0.0;
    }
    let total: u64 = completed.iter().map(|c| c.interaction_count as u64).sum();
    round1(total as f64 / completed.len() as f64)
}

pub fn average_interactions(records: &[CallRecord]) -> String {
    format!("{:.1}", average_interactions_value(records))
}

/// Groups records by the label `key` derives. A `None` label drops the
/// record, so the bucket total equals the number of records that produced
/// a label.
pub fn distribution_by<K, L>(records: &[CallRecord], key: K) -> Distribution
where
    K: Fn(&CallRecord) -> Option<L>,
    L: AsRef<str>,
{
    let mut dist = Distribution::new();
    for record in records {
        if let Some(label) = key(record) {
            dist.increment(label.as_ref());
        }
    }
    dist
}

pub fn call_status_distribution(records: &[CallRecord]) -> Distribution {
    distribution_by(records, |c| Some(c.call_status.as_str()))
}

pub fn sentiment_distribution(records: &[CallRecord]) -> Distribution {
    distribution_by(records, |c| c.sentiment.map(|s| s.label()))
}

pub fn interest_distribution(records: &[CallRecord]) -> Distribution {
    distribution_by(records, |c| {
        c.final_interest_flag.map(|f| match f {
            Flag::Yes => "Interested",
            Flag::No => "Not Interested",
        })
    })
}

pub fn awareness_distribution(records: &[CallRecord]) -> Distribution {
    distribution_by(records, |c| {
        c.awareness_flag.map(|f| match f {
            Flag::Yes => "Aware",
            Flag::No => "Not Aware",
        })
    })
}

pub fn scheme_level_distribution(records: &[CallRecord]) -> Distribution {
    distribution_by(records, |c| c.user_scheme_level.map(|l| l.label()))
}

/// Share of positive sentiment among calls that recorded any sentiment.
pub fn positive_sentiment_rate(records: &[CallRecord]) -> f64 {
    round1(sentiment_distribution(records).share("Positive"))
}

/// Calls per `call_date`, ordered by plain string comparison of the date.
///
/// The date is used verbatim, so "12/10/25" sorts before "12/9/25".
pub fn daily_call_volume(records: &[CallRecord]) -> Vec<(String, usize)> {
    let mut volume: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *volume.entry(record.call_date.as_str()).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, usize)> = volume
        .into_iter()
        .map(|(date, count)| (date.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
}
