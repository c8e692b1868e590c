use std::fmt::Write;

use callboard_core::{CallStore, DashboardSnapshot, Distribution, Trend};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct KpiRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "vs last period")]
    trend: String,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Calls")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct VolumeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Calls")]
    calls: usize,
    #[tabled(rename = "Moving Avg")]
    moving_average: String,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    key: String,
    #[tabled(rename = "Date")]
    label: String,
    #[tabled(rename = "Calls")]
    calls: usize,
    #[tabled(rename = "Completed")]
    completed: usize,
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

fn format_trend(trend: Option<Trend>) -> String {
    match trend {
        Some(t) if t.is_positive => format!("↑ {}%", t.percent),
        Some(t) => format!("↓ {}%", t.percent),
        None => "-".to_string(),
    }
}

fn distribution_table(dist: &Distribution) -> String {
    let rows: Vec<ShareRow> = dist
        .iter()
        .map(|(label, count)| ShareRow {
            label: label.to_string(),
            count,
            share: format!("{:.1}%", dist.share(label)),
        })
        .collect();
    styled(Table::new(rows))
}

pub fn build_summary(snapshot: &DashboardSnapshot, generated_on: &str) -> String {
    let mut output = String::new();
    let kpis = &snapshot.kpis;
    let trends = &snapshot.trends;

    let _ = writeln!(output, "PM-SVANidhi Voice Agent Analytics");
    let _ = writeln!(output, "Tranche 1 - Call Summary Dashboard");
    let _ = writeln!(
        output,
        "Period: {} ({})  Generated {}",
        snapshot.selection, snapshot.date_label, generated_on
    );
    let _ = writeln!(output);

    let kpi_rows = vec![
        KpiRow {
            metric: "Total Calls".to_string(),
            value: kpis.total_calls.to_string(),
            trend: format_trend(trends.total_calls),
        },
        KpiRow {
            metric: "Completed Calls".to_string(),
            value: kpis.completed_calls.to_string(),
            trend: format_trend(trends.completed_calls),
        },
        KpiRow {
            metric: "Conversion Rate".to_string(),
            value: kpis.conversion_rate_display(),
            trend: format_trend(trends.conversion_rate),
        },
        KpiRow {
            metric: "Avg Interactions".to_string(),
            value: kpis.average_interactions_display(),
            trend: format_trend(trends.average_interactions),
        },
    ];
    let _ = writeln!(output, "{}", styled(Table::new(kpi_rows)));

    let sections = [
        ("Call Status Distribution", &snapshot.call_status),
        ("Sentiment Analysis", &snapshot.sentiment),
        ("Interest in Loan", &snapshot.interest),
        ("Scheme Awareness", &snapshot.awareness),
        ("User Scheme Level", &snapshot.scheme_level),
    ];
    for (title, dist) in sections {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", title);
        if dist.is_empty() {
            let _ = writeln!(output, "No data for this period.");
        } else {
            let _ = writeln!(output, "{}", distribution_table(dist));
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Daily Call Volume");
    if snapshot.daily_volume.is_empty() {
        let _ = writeln!(output, "No calls recorded for this period.");
    } else {
        let rows: Vec<VolumeRow> = snapshot
            .daily_volume
            .iter()
            .map(|p| VolumeRow {
                date: p.date.clone(),
                calls: p.calls,
                moving_average: format!("{:.1}", p.moving_average),
            })
            .collect();
        let _ = writeln!(output, "{}", styled(Table::new(rows)));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Campaign Summary");
    let _ = writeln!(output, "- Target Audience Reached: {}", kpis.total_calls);
    let _ = writeln!(output, "- Qualified Leads: {}", kpis.completed_calls);
    let _ = writeln!(
        output,
        "- Positive Sentiment Rate: {:.1}%",
        snapshot.positive_sentiment_rate
    );

    output
}

pub fn build_day_list(store: &CallStore) -> String {
    if store.is_empty() {
        return "No days available.".to_string();
    }

    let rows: Vec<DayRow> = store
        .days()
        .iter()
        .map(|day| {
            let selection = callboard_core::Selection::Day(day.key.clone());
            let first = day.calls.first().map(|c| c.call_date.as_str());
            DayRow {
                key: day.key.clone(),
                label: callboard_core::time::date_label(&selection, first),
                calls: day.calls.len(),
                completed: day.calls.iter().filter(|c| c.is_completed()).count(),
            }
        })
        .collect();
    styled(Table::new(rows))
}
