//! Assessment scoring: deterministic aggregation, stream and career ranking,
//! personality classification, narration, and parent/child alignment.
//!
//! Everything below `handlers` is pure; persistence lives in `store` and the
//! HTTP surface in `handlers`.

pub mod aggregator;
pub mod alignment;
pub mod careers;
pub mod classify;
pub mod engine;
pub mod handlers;
pub mod narrative;
pub mod questions;
pub mod store;
pub mod streams;
