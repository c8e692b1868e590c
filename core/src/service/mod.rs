pub mod aggregation;
pub mod dto;
pub mod period;
pub mod series;
pub mod trend;
