use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::records::ModuleKind;

/// The eight report kinds the system can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    IncidentReport,
    CustodialReport,
    EvidenceReport,
    OfficerActivityReport,
    VehicleReport,
    MonthlySummary,
    InvestigationReport,
    ComplianceReport,
}

impl ReportType {
    pub const ALL: [ReportType; 8] = [
        ReportType::IncidentReport,
        ReportType::CustodialReport,
        ReportType::EvidenceReport,
        ReportType::OfficerActivityReport,
        ReportType::VehicleReport,
        ReportType::MonthlySummary,
        ReportType::InvestigationReport,
        ReportType::ComplianceReport,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::IncidentReport => "Incident Report",
            ReportType::CustodialReport => "Custodial Report",
            ReportType::EvidenceReport => "Evidence Report",
            ReportType::OfficerActivityReport => "Officer Activity Report",
            ReportType::VehicleReport => "Vehicle Report",
            ReportType::MonthlySummary => "Monthly Summary",
            ReportType::InvestigationReport => "Investigation Report",
            ReportType::ComplianceReport => "Compliance Report",
        }
    }

    pub fn parse(s: &str) -> Option<ReportType> {
        serde_json::from_value(serde_json::Value::String(s.to_string())).ok()
    }
}

/// Lifecycle status of a stored report. New reports are created `Generated`;
/// this core never moves a report through the rest of the lifecycle.
/// Stored documents missing a status read back as `Generated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportStatus {
    Draft,
    #[default]
    Generated,
    Reviewed,
    Approved,
    Archived,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 5] = [
        ReportStatus::Draft,
        ReportStatus::Generated,
        ReportStatus::Reviewed,
        ReportStatus::Approved,
        ReportStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Generated => "Generated",
            ReportStatus::Reviewed => "Reviewed",
            ReportStatus::Approved => "Approved",
            ReportStatus::Archived => "Archived",
        }
    }

    pub fn parse(s: &str) -> Option<ReportStatus> {
        Self::ALL.iter().copied().find(|st| st.as_str() == s)
    }
}

/// Period a report covers. `Custom` requires explicit bounds on the
/// report parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
    Quarter,
    Year,
    Custom,
}

impl DateRange {
    pub fn display_name(&self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Week => "this week",
            DateRange::Month => "this month",
            DateRange::Quarter => "this quarter",
            DateRange::Year => "this year",
            DateRange::Custom => "a custom range",
        }
    }

    pub fn parse(s: &str) -> Option<DateRange> {
        match s {
            "today" => Some(DateRange::Today),
            "week" => Some(DateRange::Week),
            "month" => Some(DateRange::Month),
            "quarter" => Some(DateRange::Quarter),
            "year" => Some(DateRange::Year),
            "custom" => Some(DateRange::Custom),
            _ => None,
        }
    }
}

/// Free-form filter criteria captured on the generation form and stored
/// verbatim in the report metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inmate_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
}

// Stored criteria carry "" for unset dates; treat anything unparseable
// as absent rather than failing the whole document.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.parse().ok()))
}

/// One titled block of report body text. Section content is rendered
/// verbatim everywhere; no display layer reformats it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    #[serde(default)]
    pub description: String,
    pub modules: Vec<ModuleKind>,
    pub date_range: DateRange,
    #[serde(default)]
    pub criteria: Criteria,
    pub generated_by: String,
    pub generated_at: DateTime<Utc>,
}

/// A persisted report as returned by the record store. The store assigns
/// both the document id and the human-readable report number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub report_number: Option<String>,
    pub metadata: ReportMetadata,
    #[serde(default)]
    pub content: Vec<ReportSection>,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReportDocument {
    /// Timestamp shown in listings: generation time, falling back to the
    /// store's creation time.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(self.metadata.generated_at)
    }
}
