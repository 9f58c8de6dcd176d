//! CSV ingestion: decode monitor records, filter by device, build tables.
//!
//! The monitor log stores power draw in milliwatts. [`build_table`] converts
//! to watts while indexing elapsed time, so the rest of the pipeline only
//! ever sees watts.

use std::io;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::{RecordTable, Sample};

/// Milliwatts (and milliseconds) per unit.
pub const MILLIS_IN_UNIT: u64 = 1000;

/// One CSV row exactly as the monitor wrote it.
///
/// `power_usage` is still in raw milliwatt subunits here; conversion to
/// watts happens in [`build_table`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub timestamp_ms: u64,
    pub device_index: u32,
    pub fan_speed: f64,
    pub temperature: f64,
    pub power_usage: f64,
}

/// Decode a headered CSV record stream.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Encode records as headered CSV, preserving row order.
pub fn write_records<W: io::Write>(writer: W, records: &[RawRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Keep only the rows belonging to one device, in their original order.
pub fn filter_device(records: Vec<RawRecord>, device_index: u32) -> Vec<RawRecord> {
    records
        .into_iter()
        .filter(|r| r.device_index == device_index)
        .collect()
}

/// Build a time-indexed [`RecordTable`] from single-device records,
/// converting milliwatt power readings to watts.
pub fn build_table(records: &[RawRecord]) -> RecordTable {
    let samples = records
        .iter()
        .map(|r| Sample {
            timestamp_ms: r.timestamp_ms,
            device_index: r.device_index,
            fan_speed: r.fan_speed,
            temperature: r.temperature,
            power_usage: r.power_usage / MILLIS_IN_UNIT as f64,
        })
        .collect();
    RecordTable::new(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_INPUT: &str = "\
timestamp_ms,device_index,fan_speed,temperature,power_usage
1000,0,30,55,120000
1250,1,40,60,180000
1500,0,31,56,121500
";

    #[test]
    fn test_read_records_decodes_all_rows() {
        let records = read_records(CSV_INPUT.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].timestamp_ms, 1000);
        assert_eq!(records[1].device_index, 1);
        assert_eq!(records[2].power_usage, 121_500.0);
    }

    #[test]
    fn test_read_records_rejects_malformed_row() {
        let bad = "timestamp_ms,device_index,fan_speed,temperature,power_usage\nnot_a_number,0,1,2,3\n";
        assert!(read_records(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_filter_device_preserves_order() {
        let records = read_records(CSV_INPUT.as_bytes()).unwrap();
        let filtered = filter_device(records, 0);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].timestamp_ms, 1000);
        assert_eq!(filtered[1].timestamp_ms, 1500);
    }

    #[test]
    fn test_write_records_round_trips() {
        let records = read_records(CSV_INPUT.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        let again = read_records(out.as_slice()).unwrap();
        assert_eq!(records, again);
    }

    #[test]
    fn test_build_table_converts_milliwatts() {
        let records = read_records(CSV_INPUT.as_bytes()).unwrap();
        let table = build_table(&filter_device(records, 0));
        let view = table.full_view();
        assert_eq!(view.samples()[0].power_usage, 120.0);
        assert_eq!(view.samples()[1].power_usage, 121.5);
        // Elapsed indexing starts at the first remaining timestamp.
        assert_eq!(view.elapsed_range(), Some((0, 500)));
    }
}
