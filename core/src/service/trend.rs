use crate::service::aggregation::round1;

/// Change of a metric against the previous period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    /// Absolute change in percent, one decimal
    pub percent: f64,
    /// True when the metric held or grew
    pub is_positive: bool,
}

/// `None` when there is no usable baseline (`previous <= 0`).
pub fn trend(current: f64, previous: f64) -> Option<Trend> {
    if previous <= 0.0 {
        return None;
    }
    let percent = round1(((current - previous) / previous * 100.0).abs());
    Some(Trend {
        percent,
        is_positive: current >= previous,
    })
}
