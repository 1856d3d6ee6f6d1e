//! Tabular records produced by extraction and consumed by linking.

use serde::{Serialize, Serializer};

/// One adapter endpoint found in a flow document.
///
/// Field order is the column order of the extraction table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdapterRecord {
    /// Owning flow, from the flow document's file name.
    #[serde(rename = "Iflow")]
    pub flow_name: String,

    /// Bundle identifier from the manifest.
    #[serde(rename = "IflowID")]
    pub flow_id: Option<String>,

    #[serde(rename = "Version")]
    pub flow_version: Option<String>,

    /// Adapter technology (`HTTPS`, `JMS`, `ProcessDirect`, ...).
    #[serde(rename = "ComponentType")]
    pub component_type: Option<String>,

    #[serde(rename = "TransportProtocol")]
    pub transport_protocol: Option<String>,

    /// `Sender` or `Receiver` by convention.
    #[serde(rename = "Direction")]
    pub direction: Option<String>,

    #[serde(rename = "AdapterName")]
    pub name: Option<String>,

    /// Resolved and parameter-substituted endpoint address.
    #[serde(rename = "Address")]
    pub address: Option<String>,

    /// True when a `{{name}}` substitution was attempted on the address.
    #[serde(rename = "Parametrized", serialize_with = "serialize_flag")]
    pub parametrized: bool,
}

impl AdapterRecord {
    pub fn new(flow_name: impl Into<String>) -> Self {
        Self {
            flow_name: flow_name.into(),
            ..Self::default()
        }
    }

    /// Column names of the extraction table, in order.
    pub const COLUMNS: [&'static str; 9] = [
        "Iflow",
        "IflowID",
        "Version",
        "ComponentType",
        "TransportProtocol",
        "Direction",
        "AdapterName",
        "Address",
        "Parametrized",
    ];
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "True" } else { "False" })
}

/// A header row plus data rows, as read from a link-phase table.
///
/// Rows are kept as plain strings so columns the linker does not know
/// about pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    pub fn with_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Index of the column with exactly this name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value; cells past the end of a short row read as empty.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
