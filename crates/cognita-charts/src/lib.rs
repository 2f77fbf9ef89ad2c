//! cognita-charts
//!
//! Render-ready dashboard data: band distributions, grouped metric tables,
//! and bar series, built from raw evaluation payloads against an injected
//! palette. Everything here is a pure function of (payload, palette) —
//! builders never error, they degrade per the band fallback policy.

pub mod bars;
pub mod distribution;
pub mod summary;
pub mod table;

pub use bars::{bar_series, BarDatum, BAR_CAP};
pub use distribution::{BandCount, BandDistribution};
pub use summary::{domain_summaries, DomainSummary};
pub use table::{grouped_metric_table, BadgeAttrs, MetricGroup, MetricRow};
