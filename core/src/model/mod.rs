pub mod call;
pub mod distribution;
pub mod store;
