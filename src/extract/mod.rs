//! Adapter extraction from flow documents.
//!
//! Every `messageFlow` element of a flow document describes one adapter.
//! Extraction turns each of them into an [`AdapterRecord`]:
//!
//! ```text
//! messageFlow
//!   └── extensionElements ──extract_properties──▶ PropertyMap
//!                                                   │
//!             ComponentType, direction, Name,       │
//!             TransportProtocol (verbatim) ◀────────┤
//!                                                   │
//!             AddressKeyTable::resolve ◀────────────┘
//!                   │
//!                   ▼
//!             substitute(address, ParameterTable)
//! ```
//!
//! Elements without a `ComponentType` are not adapters and are dropped.

mod address;
mod properties;
mod substitute;

pub use address::{AddressKeyTable, AddressKeys};
pub use properties::{PropertyMap, extract_properties};
pub use substitute::{Substitution, substitute};

use crate::base::constants::{keys, tags};
use crate::interchange::{AdapterRecord, FlowBundle, Manifest, ParameterTable, XmlElement};

/// Settings for an [`Extractor`].
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub address_keys: AddressKeyTable,
}

/// Turns flow documents into adapter records.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract the adapters of an unpacked flow bundle.
    pub fn extract_bundle(&self, bundle: &FlowBundle) -> Vec<AdapterRecord> {
        self.extract(
            &bundle.document,
            &bundle.flow_name,
            &bundle.parameters,
            &bundle.manifest,
        )
    }

    /// Extract one record per adapter, in document order.
    pub fn extract(
        &self,
        document: &XmlElement,
        flow_name: &str,
        parameters: &ParameterTable,
        manifest: &Manifest,
    ) -> Vec<AdapterRecord> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for element in document
            .iter()
            .filter(|e| e.is(tags::MESSAGE_FLOW))
        {
            let record = self.adapter_record(element, flow_name, parameters, manifest);
            if record.component_type.is_some() {
                records.push(record);
            } else {
                skipped += 1;
            }
        }

        tracing::debug!(
            "Flow '{}': {} adapter(s), {} message flow(s) without a component type",
            flow_name,
            records.len(),
            skipped
        );
        records
    }

    fn adapter_record(
        &self,
        message_flow: &XmlElement,
        flow_name: &str,
        parameters: &ParameterTable,
        manifest: &Manifest,
    ) -> AdapterRecord {
        let mut record = AdapterRecord {
            flow_name: flow_name.to_string(),
            flow_id: manifest.flow_id().map(str::to_string),
            flow_version: manifest.flow_version().map(str::to_string),
            ..AdapterRecord::default()
        };

        let Some(extension) = message_flow.child(tags::EXTENSION_ELEMENTS) else {
            return record;
        };
        let properties = extract_properties(extension);

        record.component_type = field(&properties, keys::COMPONENT_TYPE);
        record.direction = field(&properties, keys::DIRECTION);
        record.name = field(&properties, keys::NAME);
        record.transport_protocol = field(&properties, keys::TRANSPORT_PROTOCOL);

        let resolved = self.options.address_keys.resolve(
            record.component_type.as_deref(),
            record.direction.as_deref(),
            &properties,
        );
        if let Some(address) = resolved {
            let substituted = substitute(address, parameters);
            record.address = Some(substituted.address);
            record.parametrized = substituted.parametrized;
        }

        record
    }
}

/// Extract with the default address table.
pub fn extract(
    document: &XmlElement,
    flow_name: &str,
    parameters: &ParameterTable,
    manifest: &Manifest,
) -> Vec<AdapterRecord> {
    Extractor::new().extract(document, flow_name, parameters, manifest)
}

fn field(properties: &PropertyMap, key: &str) -> Option<String> {
    properties
        .get(key)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
