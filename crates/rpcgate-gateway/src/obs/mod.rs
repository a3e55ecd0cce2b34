//! Lightweight in-process metrics (dependency-free).
//!
//! Counters and histograms are stored as atomics behind `DashMap` label
//! maps and rendered in Prometheus text format by the `/metrics` handler.

pub mod metrics;
