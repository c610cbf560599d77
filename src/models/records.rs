use serde::{Deserialize, Serialize};

/// The five record collections a report can draw from, in canonical order.
///
/// Report sections are always emitted in this order no matter which order
/// the user selected modules in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Ob,
    Custodial,
    Evidence,
    Officers,
    Vehicles,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 5] = [
        ModuleKind::Ob,
        ModuleKind::Custodial,
        ModuleKind::Evidence,
        ModuleKind::Officers,
        ModuleKind::Vehicles,
    ];

    /// Wire identifier used in report metadata ("ob", "custodial", ...).
    pub fn id(&self) -> &'static str {
        match self {
            ModuleKind::Ob => "ob",
            ModuleKind::Custodial => "custodial",
            ModuleKind::Evidence => "evidence",
            ModuleKind::Officers => "officers",
            ModuleKind::Vehicles => "vehicles",
        }
    }

    /// Human-readable collection name, used when flagging unavailable data.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleKind::Ob => "Occurrence Book Entries",
            ModuleKind::Custodial => "Custodial Records",
            ModuleKind::Evidence => "Evidence Management",
            ModuleKind::Officers => "Officer Records",
            ModuleKind::Vehicles => "Vehicle Registry",
        }
    }

    pub fn parse(s: &str) -> Option<ModuleKind> {
        match s {
            "ob" => Some(ModuleKind::Ob),
            "custodial" => Some(ModuleKind::Custodial),
            "evidence" => Some(ModuleKind::Evidence),
            "officers" => Some(ModuleKind::Officers),
            "vehicles" => Some(ModuleKind::Vehicles),
            _ => None,
        }
    }
}

// Records come out of a document store: no field is guaranteed present, and
// unknown fields must be tolerated. Aggregation treats a missing value the
// same as an empty one.

/// A single occurrence book entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObEntry {
    #[serde(default)]
    pub ob_number: Option<String>,
    #[serde(default)]
    pub incident_type: Option<String>,
    /// Legacy field name; some stored entries carry `type` instead of
    /// `incidentType`.
    #[serde(default, rename = "type")]
    pub legacy_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub case_classification: Option<String>,
}

impl ObEntry {
    /// Incident type with fallback to the legacy `type` field.
    pub fn incident_kind(&self) -> Option<&str> {
        self.incident_type
            .as_deref()
            .or(self.legacy_type.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// A custodial (inmate) record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodialRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub classification: Option<String>,
}

/// An evidence item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    #[serde(default, rename = "type")]
    pub evidence_type: Option<String>,
    #[serde(default)]
    pub storage_location: Option<String>,
}

/// An officer record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
}

/// A police vehicle record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub vehicle_type: Option<String>,
}
