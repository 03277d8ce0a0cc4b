//! telemetry/mod.rs
//! Deterministic split counters.
//!
//! Counters are plain values owned by the caller: no atomics, no globals.
//! Independent splits (threads, nested messages) each build their own and
//! fold them together with `merge`.

pub mod counters;

pub use counters::*;
