//! Call-graph linking between flows.
//!
//! Flows invoke each other through an in-process adapter type
//! (`ProcessDirect` by default): the calling flow has a *sender*-side
//! endpoint and the called flow a *receiver*-side endpoint with the same
//! address. Linking matches the two by normalized address and records the
//! relationship on both rows:
//!
//! ```text
//! UID  AdapterType    AdapterDirection  AdapterAddress   CallsIflow  IsCalledByIflow
//! S1   ProcessDirect  Sender            /foo/            R1
//! R1   ProcessDirect  Receiver          /FOO                         S1
//! ```
//!
//! The input table is left untouched; the result is a new table with the
//! two link columns appended (or refreshed, if the input already had them).

use rustc_hash::FxHashMap;

use crate::base::constants::columns;
use crate::interchange::{InterchangeError, RecordTable};

/// Separator between identifiers in a link cell.
const LINK_SEPARATOR: &str = ", ";

/// Which rows take part in linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// Adapter type whose endpoints share one address space.
    pub adapter_type: String,
    /// Direction value of calling endpoints.
    pub sender_direction: String,
    /// Direction value of called endpoints.
    pub receiver_direction: String,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            adapter_type: "ProcessDirect".to_string(),
            sender_direction: "Sender".to_string(),
            receiver_direction: "Receiver".to_string(),
        }
    }
}

/// Counts reported after linking a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkSummary {
    /// Sender rows that found a receiver.
    pub senders_matched: usize,
    /// Receiver rows called by at least one sender.
    pub receivers_called: usize,
}

/// A linked table and its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedTable {
    pub table: RecordTable,
    pub summary: LinkSummary,
}

/// Canonical form used to compare addresses: trimmed, trailing slashes
/// removed, lowercased.
pub fn normalize_address(address: &str) -> String {
    address.trim().trim_end_matches('/').to_lowercase()
}

/// Column positions the linker reads.
struct Columns {
    uid: usize,
    kind: usize,
    direction: usize,
    address: usize,
}

impl Columns {
    /// Check the header row. `UID` must come first; the adapter columns may
    /// be anywhere.
    fn locate(table: &RecordTable) -> Result<Self, InterchangeError> {
        match table.headers.first() {
            Some(first) if first == columns::UID => {}
            Some(first) if table.column(columns::UID).is_some() => {
                return Err(InterchangeError::invalid_column(format!(
                    "expected '{}' as the first column, found '{first}'",
                    columns::UID
                )));
            }
            _ => return Err(InterchangeError::missing_column(columns::UID)),
        }

        let required = |name: &str| {
            table
                .column(name)
                .ok_or_else(|| InterchangeError::missing_column(name))
        };

        Ok(Self {
            uid: 0,
            kind: required(columns::ADAPTER_TYPE)?,
            direction: required(columns::ADAPTER_DIRECTION)?,
            address: required(columns::ADAPTER_ADDRESS)?,
        })
    }
}

/// Reject empty and repeated identifiers.
fn check_uids(table: &RecordTable, uid: usize) -> Result<(), InterchangeError> {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    for row in 0..table.len() {
        let id = table.cell(row, uid);
        if id.is_empty() {
            return Err(InterchangeError::invalid_row(format!(
                "row {} has an empty {}",
                row + 1,
                columns::UID
            )));
        }
        if let Some(first) = seen.insert(id, row) {
            return Err(InterchangeError::invalid_row(format!(
                "{} '{id}' appears in rows {} and {}",
                columns::UID,
                first + 1,
                row + 1
            )));
        }
    }
    Ok(())
}

/// Link senders to receivers of the configured adapter type.
///
/// The header row and identifiers are validated before any row is looked
/// at; a layout problem fails the whole table. When two receivers share an
/// address the later one wins. A receiver may be called by many senders.
pub fn link(table: &RecordTable, options: &LinkOptions) -> Result<LinkedTable, InterchangeError> {
    let cols = Columns::locate(table)?;
    check_uids(table, cols.uid)?;

    let endpoint = |row: usize, direction: &str| {
        table.cell(row, cols.kind) == options.adapter_type
            && table.cell(row, cols.direction) == direction
    };

    let mut receiver_by_address: FxHashMap<String, usize> = FxHashMap::default();
    for row in 0..table.len() {
        if endpoint(row, options.receiver_direction.as_str()) {
            let address = normalize_address(table.cell(row, cols.address));
            if !address.is_empty() {
                receiver_by_address.insert(address, row);
            }
        }
    }

    let mut calls: Vec<Vec<usize>> = vec![Vec::new(); table.len()];
    let mut called_by: Vec<Vec<usize>> = vec![Vec::new(); table.len()];
    let mut summary = LinkSummary::default();

    for row in 0..table.len() {
        if !endpoint(row, options.sender_direction.as_str()) {
            continue;
        }
        let address = normalize_address(table.cell(row, cols.address));
        if let Some(&receiver) = receiver_by_address.get(&address) {
            calls[row].push(receiver);
            called_by[receiver].push(row);
            summary.senders_matched += 1;
        }
    }
    summary.receivers_called = called_by.iter().filter(|c| !c.is_empty()).count();

    let mut headers = table.headers.clone();
    let calls_col = ensure_column(&mut headers, columns::CALLS);
    let called_by_col = ensure_column(&mut headers, columns::CALLED_BY);

    let join = |rows: &[usize]| {
        rows.iter()
            .map(|&r| table.cell(r, cols.uid))
            .collect::<Vec<_>>()
            .join(LINK_SEPARATOR)
    };

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut out = row.clone();
            if out.len() < headers.len() {
                out.resize(headers.len(), String::new());
            }
            out[calls_col] = join(&calls[i]);
            out[called_by_col] = join(&called_by[i]);
            out
        })
        .collect();

    tracing::debug!(
        "Linked {} row(s): {} sender(s) matched, {} receiver(s) called",
        table.len(),
        summary.senders_matched,
        summary.receivers_called
    );

    Ok(LinkedTable {
        table: RecordTable { headers, rows },
        summary,
    })
}

fn ensure_column(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(index) => index,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}
