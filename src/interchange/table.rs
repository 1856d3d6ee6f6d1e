//! CSV reading and writing for adapter tables.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use super::model::{AdapterRecord, RecordTable};
use super::InterchangeError;

/// Write extraction records with the fixed extraction column order.
pub fn write_adapter_records<W: Write>(
    writer: W,
    records: &[AdapterRecord],
) -> Result<(), InterchangeError> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(AdapterRecord::COLUMNS)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write extraction records to a file, replacing it if present.
pub fn write_adapter_records_to_path(
    path: &Path,
    records: &[AdapterRecord],
) -> Result<(), InterchangeError> {
    write_adapter_records(File::create(path)?, records)
}

/// Read a table whose first line is the header row.
///
/// Rows may be shorter or longer than the header. A byte-order mark on the
/// first header is dropped. An empty input yields a table with no headers.
pub fn read_table<R: Read>(reader: R) -> Result<RecordTable, InterchangeError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Vec<String> = csv.headers()?.iter().map(str::to_string).collect();
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let mut rows = Vec::new();
    for record in csv.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }

    Ok(RecordTable { headers, rows })
}

pub fn read_table_from_path(path: &Path) -> Result<RecordTable, InterchangeError> {
    read_table(File::open(path)?)
}

/// Write a table with every field quoted.
pub fn write_table<W: Write>(writer: W, table: &RecordTable) -> Result<(), InterchangeError> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .flexible(true)
        .from_writer(writer);
    csv.write_record(&table.headers)?;
    for row in &table.rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_table_to_path(path: &Path, table: &RecordTable) -> Result<(), InterchangeError> {
    write_table(File::create(path)?, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_adapter_records_layout() {
        let record = AdapterRecord {
            flow_name: "Orders".into(),
            flow_id: Some("Orders_ID".into()),
            flow_version: Some("1.0.0".into()),
            component_type: Some("HTTPS".into()),
            transport_protocol: Some("HTTPS".into()),
            direction: Some("Sender".into()),
            name: Some("FromShop".into()),
            address: Some("/orders, v2".into()),
            parametrized: true,
        };
        let mut out = Vec::new();
        write_adapter_records(&mut out, &[record, AdapterRecord::new("Empty")]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Iflow,IflowID,Version,ComponentType,TransportProtocol,Direction,AdapterName,Address,Parametrized"
        );
        assert_eq!(
            lines[1],
            "Orders,Orders_ID,1.0.0,HTTPS,HTTPS,Sender,FromShop,\"/orders, v2\",True"
        );
        assert_eq!(lines[2], "Empty,,,,,,,,False");
    }

    #[test]
    fn test_header_written_without_records() {
        let mut out = Vec::new();
        write_adapter_records(&mut out, &[]).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Iflow,IflowID"));
    }

    #[test]
    fn test_read_table_flexible_rows() {
        let input = "\u{feff}UID,AdapterType,AdapterAddress\nS1,ProcessDirect,/a\nS2,HTTP\n";
        let table = read_table(input.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["UID", "AdapterType", "AdapterAddress"]);
        assert_eq!(table.rows[1], vec!["S2", "HTTP"]);
    }

    #[test]
    fn test_read_empty_table() {
        let table = read_table("".as_bytes()).unwrap();
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_write_table_quotes_everything() {
        let table = RecordTable::new(["UID", "CallsIflow"]).with_row(["S1", ""]);
        let mut out = Vec::new();
        write_table(&mut out, &table).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"UID\",\"CallsIflow\"\n\"S1\",\"\"\n"
        );
    }
}
