use async_trait::async_trait;
use chrono::{Datelike, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::errors::PrecinctError;
use crate::models::{ReportDocument, ReportMetadata, ReportSection, ReportStatus};

use super::ReportStore;

/// In-memory report store for tests and offline use. Assigns ids and
/// sequential report numbers the way the real store would.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    reports: Vec<ReportDocument>,
    sequence: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn create(
        &self,
        metadata: ReportMetadata,
        content: Vec<ReportSection>,
        status: ReportStatus,
    ) -> Result<ReportDocument, PrecinctError> {
        let mut inner = self.inner.lock().unwrap();
        inner.sequence += 1;
        let now = Utc::now();
        let document = ReportDocument {
            id: Uuid::new_v4().to_string(),
            report_number: Some(format!("RPT-{}-{:04}", now.year(), inner.sequence)),
            metadata,
            content,
            status,
            created_at: Some(now),
        };
        inner.reports.push(document.clone());
        Ok(document)
    }

    async fn list(&self) -> Result<Vec<ReportDocument>, PrecinctError> {
        Ok(self.inner.lock().unwrap().reports.clone())
    }

    async fn get(&self, id: &str) -> Result<ReportDocument, PrecinctError> {
        self.inner
            .lock()
            .unwrap()
            .reports
            .iter()
            .find(|r| r.id == id || r.report_number.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| PrecinctError::NotFound(format!("Report {}", id)))
    }
}
