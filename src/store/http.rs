use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::errors::PrecinctError;
use crate::models::{
    CustodialRecord, EvidenceItem, ObEntry, Officer, ReportDocument, ReportMetadata,
    ReportSection, ReportStatus, Vehicle,
};

use super::ReportStore;

/// REST client for the external record store.
///
/// Covers the report endpoints plus the five record collections a
/// generation snapshot draws on. All request/response bodies are JSON.
pub struct HttpStore {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ReportsEnvelope {
    #[serde(default)]
    reports: Vec<ReportDocument>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObEnvelope {
    #[serde(default)]
    ob_entries: Vec<ObEntry>,
}

#[derive(Deserialize)]
struct InmatesEnvelope {
    #[serde(default)]
    inmates: Vec<CustodialRecord>,
}

#[derive(Deserialize)]
struct EvidenceEnvelope {
    #[serde(default)]
    evidence: Vec<EvidenceItem>,
}

#[derive(Deserialize)]
struct OfficersEnvelope {
    #[serde(default)]
    officers: Vec<Officer>,
}

#[derive(Deserialize)]
struct VehiclesEnvelope {
    #[serde(default)]
    vehicles: Vec<Vehicle>,
}

#[derive(Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
}

impl HttpStore {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, PrecinctError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PrecinctError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(HttpStore {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, PrecinctError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PrecinctError::Network(format!("GET {} failed: {}", path, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PrecinctError::Http {
                status: status.as_u16(),
                message: resp.json::<StoreErrorBody>().await.ok().and_then(|b| b.message),
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| PrecinctError::Network(format!("Invalid response from {}: {}", path, e)))
    }

    pub async fn fetch_ob_entries(&self) -> Result<Vec<ObEntry>, PrecinctError> {
        let envelope: ObEnvelope = self.get_json("/api/ob-entries").await?;
        debug!(count = envelope.ob_entries.len(), "Fetched occurrence book entries");
        Ok(envelope.ob_entries)
    }

    pub async fn fetch_custodial_records(&self) -> Result<Vec<CustodialRecord>, PrecinctError> {
        let envelope: InmatesEnvelope = self.get_json("/api/custodial-records").await?;
        debug!(count = envelope.inmates.len(), "Fetched custodial records");
        Ok(envelope.inmates)
    }

    pub async fn fetch_evidence(&self) -> Result<Vec<EvidenceItem>, PrecinctError> {
        let envelope: EvidenceEnvelope = self.get_json("/api/evidence").await?;
        debug!(count = envelope.evidence.len(), "Fetched evidence items");
        Ok(envelope.evidence)
    }

    pub async fn fetch_officers(&self) -> Result<Vec<Officer>, PrecinctError> {
        let envelope: OfficersEnvelope = self.get_json("/api/officers").await?;
        debug!(count = envelope.officers.len(), "Fetched officer records");
        Ok(envelope.officers)
    }

    pub async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, PrecinctError> {
        let envelope: VehiclesEnvelope = self.get_json("/api/police-vehicles").await?;
        debug!(count = envelope.vehicles.len(), "Fetched vehicle records");
        Ok(envelope.vehicles)
    }
}

#[async_trait]
impl ReportStore for HttpStore {
    async fn create(
        &self,
        metadata: ReportMetadata,
        content: Vec<ReportSection>,
        status: ReportStatus,
    ) -> Result<ReportDocument, PrecinctError> {
        let url = format!("{}/api/custodial-reports", self.base_url);
        let body = json!({
            "metadata": metadata,
            "content": content,
            "status": status,
            "generatedAt": Utc::now(),
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PrecinctError::Network(format!("Report submission failed: {}", e)))?;

        let http_status = resp.status();
        if !http_status.is_success() {
            // The store reports write rejections in a JSON body with a
            // `message` field; fall back to a bare HTTP error without one.
            return match resp.json::<StoreErrorBody>().await {
                Ok(StoreErrorBody { message: Some(message) }) => {
                    Err(PrecinctError::Persistence(message))
                }
                _ => Err(PrecinctError::Http {
                    status: http_status.as_u16(),
                    message: None,
                }),
            };
        }

        resp.json::<ReportDocument>()
            .await
            .map_err(|e| PrecinctError::Network(format!("Invalid created-report response: {}", e)))
    }

    async fn list(&self) -> Result<Vec<ReportDocument>, PrecinctError> {
        let envelope: ReportsEnvelope = self.get_json("/api/reports").await?;
        debug!(count = envelope.reports.len(), "Fetched reports");
        Ok(envelope.reports)
    }

    // The store exposes no single-report endpoint; resolve the id against
    // the full listing, as the original consumer does.
    async fn get(&self, id: &str) -> Result<ReportDocument, PrecinctError> {
        self.list()
            .await?
            .into_iter()
            .find(|r| r.id == id || r.report_number.as_deref() == Some(id))
            .ok_or_else(|| PrecinctError::NotFound(format!("Report {}", id)))
    }
}
