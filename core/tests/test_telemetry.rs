// Split counters: per-wire-type tallies, byte accounting, merging and
// serde export.

#[cfg(test)]
mod tests {
    use protowire_core::{telemetry::SplitStats, wire::split_all};

    fn unhex(s: &str) -> Vec<u8> {
        hex::decode(s.replace(' ', "")).unwrap()
    }

    fn sample() -> Vec<u8> {
        unhex("08 96 01  12 02 68 69  1d 00 00 80 3f  08 05  21 00 00 00 00 00 00 f0 3f")
    }

    #[test]
    fn counts_follow_wire_types() {
        let buf = sample();
        let records = split_all(&buf).unwrap();
        let stats = SplitStats::from_records(&records);

        assert_eq!(stats.records, 5);
        assert_eq!(stats.records_varint, 2);
        assert_eq!(stats.records_length_delimited, 1);
        assert_eq!(stats.records_fixed32, 1);
        assert_eq!(stats.records_fixed64, 1);

        assert_eq!(stats.bytes_tag, 5);
        assert_eq!(stats.bytes_length_prefix, 1);
        assert_eq!(stats.bytes_value, 2 + 2 + 4 + 1 + 8);
    }

    #[test]
    fn total_bytes_is_span_length() {
        let buf = sample();
        let stats = SplitStats::from_records(&split_all(&buf).unwrap());
        assert_eq!(stats.total_bytes(), buf.len() as u64);
    }

    #[test]
    fn empty_split_is_default() {
        let stats = SplitStats::from_records(&split_all(&[]).unwrap());
        assert_eq!(stats, SplitStats::default());
        assert_eq!(stats.total_bytes(), 0);
    }

    #[test]
    fn merge_and_add_assign_agree() {
        let a_buf = sample();
        let b_buf = unhex("12 03 61 62 63");
        let a = SplitStats::from_records(&split_all(&a_buf).unwrap());
        let b = SplitStats::from_records(&split_all(&b_buf).unwrap());

        let mut merged = a.clone();
        merged.merge(&b);

        let mut summed = a;
        summed += b;

        assert_eq!(merged, summed);
        assert_eq!(merged.records, 6);
        assert_eq!(merged.total_bytes(), (a_buf.len() + b_buf.len()) as u64);
    }

    #[test]
    fn stats_export_as_json() {
        let buf = sample();
        let stats = SplitStats::from_records(&split_all(&buf).unwrap());

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"records_varint\":2"), "{}", json);

        let back: SplitStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
