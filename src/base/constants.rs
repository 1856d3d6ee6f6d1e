//! Domain constants: XML local names, adapter property keys, table columns.

/// Local names of the flow document elements the extractor inspects.
pub mod tags {
    pub const MESSAGE_FLOW: &str = "messageFlow";
    pub const EXTENSION_ELEMENTS: &str = "extensionElements";
    pub const PROPERTY: &str = "property";
    pub const KEY: &str = "key";
    pub const VALUE: &str = "value";
}

/// Property keys read verbatim from an adapter's extension block.
pub mod keys {
    pub const COMPONENT_TYPE: &str = "ComponentType";
    pub const DIRECTION: &str = "direction";
    pub const NAME: &str = "Name";
    pub const TRANSPORT_PROTOCOL: &str = "TransportProtocol";
}

/// Manifest headers carrying flow identity.
pub mod manifest {
    pub const SYMBOLIC_NAME: &str = "Origin-Bundle-SymbolicName";
    pub const VERSION: &str = "Bundle-Version";
}

/// Files located inside an unpacked flow bundle.
pub mod files {
    pub const FLOW_EXTENSION: &str = "iflw";
    pub const PARAMETERS: &str = "parameters.prop";
    pub const MANIFEST_DIR: &str = "META-INF";
    pub const MANIFEST: &str = "MANIFEST.MF";
    pub const ARCHIVE_EXTENSION: &str = "zip";
    pub const TABLE_EXTENSION: &str = "csv";
    pub const LINKED_SUFFIX: &str = "_with_links";
}

/// Column names of the link-phase table.
pub mod columns {
    pub const UID: &str = "UID";
    pub const ADAPTER_TYPE: &str = "AdapterType";
    pub const ADAPTER_DIRECTION: &str = "AdapterDirection";
    pub const ADAPTER_ADDRESS: &str = "AdapterAddress";
    pub const CALLS: &str = "CallsIflow";
    pub const CALLED_BY: &str = "IsCalledByIflow";
}
