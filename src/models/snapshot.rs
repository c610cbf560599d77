use super::records::{CustodialRecord, EvidenceItem, ModuleKind, ObEntry, Officer, Vehicle};

/// In-memory snapshot of the five record collections, taken once per
/// report-generation session.
///
/// A collection whose fetch failed is present as an empty sequence and
/// listed in `unavailable`, so downstream consumers can tell "no records"
/// apart from "fetch failed" instead of silently reporting zero counts.
#[derive(Debug, Clone, Default)]
pub struct RecordSnapshot {
    pub ob_entries: Vec<ObEntry>,
    pub inmates: Vec<CustodialRecord>,
    pub evidence: Vec<EvidenceItem>,
    pub officers: Vec<Officer>,
    pub vehicles: Vec<Vehicle>,
    pub unavailable: Vec<ModuleKind>,
}

impl RecordSnapshot {
    pub fn is_unavailable(&self, module: ModuleKind) -> bool {
        self.unavailable.contains(&module)
    }
}
