//! telemetry/counters.rs
//! Per-split record and byte counters.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::wire::{Record, WireType};

/// Counters collected over one or more successful splits.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitStats {
    pub records: u64,
    pub records_varint: u64,
    pub records_fixed64: u64,
    pub records_length_delimited: u64,
    pub records_fixed32: u64,
    pub bytes_tag: u64,
    pub bytes_length_prefix: u64,
    pub bytes_value: u64,
}

impl SplitStats {
    pub fn from_records(records: &[Record<'_>]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.record(record);
        }
        stats
    }

    /// Count one record.
    pub fn record(&mut self, record: &Record<'_>) {
        self.records += 1;
        match record.wire_type() {
            WireType::Varint => self.records_varint += 1,
            WireType::Fixed64 => self.records_fixed64 += 1,
            WireType::LengthDelimited => self.records_length_delimited += 1,
            WireType::Fixed32 => self.records_fixed32 += 1,
            // The splitter never yields these.
            WireType::StartGroup | WireType::EndGroup => {}
        }
        self.bytes_tag += record.tag_bytes.len() as u64;
        self.bytes_length_prefix += record.length_prefix.len() as u64;
        self.bytes_value += record.value.len() as u64;
    }

    /// Total wire bytes covered; equals the span length of a successful split.
    pub fn total_bytes(&self) -> u64 {
        self.bytes_tag + self.bytes_length_prefix + self.bytes_value
    }

    pub fn merge(&mut self, other: &SplitStats) {
        self.records += other.records;
        self.records_varint += other.records_varint;
        self.records_fixed64 += other.records_fixed64;
        self.records_length_delimited += other.records_length_delimited;
        self.records_fixed32 += other.records_fixed32;

        self.bytes_tag += other.bytes_tag;
        self.bytes_length_prefix += other.bytes_length_prefix;
        self.bytes_value += other.bytes_value;
    }
}

impl AddAssign for SplitStats {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
