use crate::model::distribution::Distribution;
use crate::service::period::Selection;
use crate::service::trend::Trend;

/// Headline numbers for one period. Ratios are already rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KpiMetrics {
    pub total_calls: usize,
    pub completed_calls: usize,
    pub conversion_rate: f64,
    pub average_interactions: f64,
}

impl KpiMetrics {
    pub fn conversion_rate_display(&self) -> String {
        format!("{:.1}%", self.conversion_rate)
    }

    pub fn average_interactions_display(&self) -> String {
        format!("{:.1}", self.average_interactions)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KpiTrends {
    pub total_calls: Option<Trend>,
    pub completed_calls: Option<Trend>,
    pub conversion_rate: Option<Trend>,
    pub average_interactions: Option<Trend>,
}

impl KpiTrends {
    pub fn is_empty(&self) -> bool {
        self.total_calls.is_none()
            && self.completed_calls.is_none()
            && self.conversion_rate.is_none()
            && self.average_interactions.is_none()
    }
}

/// Point on the daily volume line.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumePoint {
    pub date: String,
    pub calls: usize,
    pub moving_average: f64,
}

/// Everything the dashboard renders for one selection.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub selection: Selection,
    pub date_label: String,
    pub kpis: KpiMetrics,
    pub trends: KpiTrends,
    pub call_status: Distribution,
    pub sentiment: Distribution,
    pub interest: Distribution,
    pub awareness: Distribution,
    pub scheme_level: Distribution,
    pub daily_volume: Vec<VolumePoint>,
    pub positive_sentiment_rate: f64,
}
