//! # callboard-core
//!
//! Aggregation layer behind the PM-SVANidhi voice agent call dashboard:
//! typed call records partitioned by day, pure metric and distribution
//! functions, period selection and trend comparison.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use error::{Error, Result};
pub use input::{expand_day_key, resolve_selection};
pub use model::call::{CallDirection, CallRecord, CallStatus, Flag, SchemeLevel, Sentiment};
pub use model::distribution::Distribution;
pub use model::store::{CallStore, DayPartition};
pub use repository::{BundledCallRepository, CallRepository, FileCallRepository};
pub use service::dto::{DashboardSnapshot, KpiMetrics, KpiTrends, VolumePoint};
pub use service::period::{Period, PeriodSelector, Selection, ALL_DAYS};
pub use service::trend::{trend, Trend};
pub use usecase::dashboard::DashboardUseCase;
