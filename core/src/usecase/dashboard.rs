use crate::model::call::CallRecord;
use crate::model::store::CallStore;
use crate::service::aggregation;
use crate::service::dto::{DashboardSnapshot, KpiMetrics, KpiTrends, VolumePoint};
use crate::service::period::{PeriodSelector, Selection};
use crate::service::series::moving_average;
use crate::service::trend::trend;
use crate::time::date_label;

/// selection -> records -> snapshot, recomputed on every call.
pub struct DashboardUseCase<'a> {
    store: &'a CallStore,
    selector: PeriodSelector,
    moving_average_window: usize,
}

impl<'a> DashboardUseCase<'a> {
    pub fn new(store: &'a CallStore, moving_average_window: usize) -> Self {
        Self {
            store,
            selector: PeriodSelector::for_store(store),
            moving_average_window,
        }
    }

    pub fn selector(&self) -> &PeriodSelector {
        &self.selector
    }

    pub fn snapshot(&self, selection: &Selection) -> DashboardSnapshot {
        let period = self.selector.resolve(self.store, selection);
        let current = &period.current;

        let kpis = kpi_metrics(current);
        let trends = match &period.previous {
            Some(previous) => kpi_trends(&kpis, &kpi_metrics(previous)),
            None => KpiTrends::default(),
        };

        let volume = aggregation::daily_call_volume(current);
        let counts: Vec<f64> = volume.iter().map(|(_, n)| *n as f64).collect();
        let averages = moving_average(&counts, self.moving_average_window);
        let daily_volume = volume
            .into_iter()
            .zip(averages)
            .map(|((date, calls), moving_average)| VolumePoint {
                date,
                calls,
                moving_average,
            })
            .collect();

        let first_call_date = current.first().map(|c| c.call_date.as_str());

        tracing::debug!(
            selection = %selection,
            calls = kpis.total_calls,
            has_previous = period.previous.is_some(),
            "Computed dashboard snapshot"
        );

        DashboardSnapshot {
            selection: selection.clone(),
            date_label: date_label(selection, first_call_date),
            kpis,
            trends,
            call_status: aggregation::call_status_distribution(current),
            sentiment: aggregation::sentiment_distribution(current),
            interest: aggregation::interest_distribution(current),
            awareness: aggregation::awareness_distribution(current),
            scheme_level: aggregation::scheme_level_distribution(current),
            daily_volume,
            positive_sentiment_rate: aggregation::positive_sentiment_rate(current),
        }
    }
}

pub fn kpi_metrics(records: &[CallRecord]) -> KpiMetrics {
    KpiMetrics {
        total_calls: aggregation::total_calls(records),
        completed_calls: aggregation::completed_calls(records),
        conversion_rate: aggregation::conversion_rate_value(records),
        average_interactions: aggregation::average_interactions_value(records),
    }
}

pub fn kpi_trends(current: &KpiMetrics, previous: &KpiMetrics) -> KpiTrends {
    KpiTrends {
        total_calls: trend(current.total_calls as f64, previous.total_calls as f64),
        completed_calls: trend(current.completed_calls as f64, previous.completed_calls as f64),
        conversion_rate: trend(current.conversion_rate, previous.conversion_rate),
        average_interactions: trend(current.average_interactions, previous.average_interactions),
    }
}
