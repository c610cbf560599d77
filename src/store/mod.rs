pub mod http;
pub mod memory;
pub mod snapshot;

use async_trait::async_trait;

use crate::errors::PrecinctError;
use crate::models::{ReportDocument, ReportMetadata, ReportSection, ReportStatus};

pub use http::HttpStore;
pub use memory::MemoryStore;
pub use snapshot::fetch_snapshot;

/// Persistence boundary for report documents.
///
/// The store is the single authoritative point of mutation: a report is
/// created exactly once and only read thereafter. No ordering is
/// guaranteed by `list`; sorting and filtering are presentation concerns.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a new report. The store assigns the document id and the
    /// human-readable report number.
    async fn create(
        &self,
        metadata: ReportMetadata,
        content: Vec<ReportSection>,
        status: ReportStatus,
    ) -> Result<ReportDocument, PrecinctError>;

    /// All stored reports, in store order.
    async fn list(&self) -> Result<Vec<ReportDocument>, PrecinctError>;

    /// A single report by document id.
    async fn get(&self, id: &str) -> Result<ReportDocument, PrecinctError>;
}
