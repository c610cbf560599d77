use crate::models::{ReportDocument, ReportStatus, ReportType};

/// State of the reports listing: the fetched set plus three client-side
/// filters. Filtering never goes back to the store; it is applied to the
/// already-fetched reports, AND-combining whichever filters are set.
#[derive(Debug, Default)]
pub struct ListView {
    reports: Vec<ReportDocument>,
    pub search: String,
    pub type_filter: Option<ReportType>,
    pub status_filter: Option<ReportStatus>,
    pub error: Option<String>,
}

impl ListView {
    /// Replace the report set after a (re)fetch. Newest-first is a
    /// presentation choice; the store guarantees no order.
    pub fn set_reports(&mut self, mut reports: Vec<ReportDocument>) {
        reports.sort_by_key(|r| std::cmp::Reverse(r.generated_at()));
        self.reports = reports;
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn reports(&self) -> &[ReportDocument] {
        &self.reports
    }

    /// Reports passing all active filters, in display order.
    pub fn filtered(&self) -> Vec<&ReportDocument> {
        let needle = self.search.to_lowercase();
        self.reports
            .iter()
            .filter(|report| {
                let matches_search = needle.is_empty()
                    || report.metadata.title.to_lowercase().contains(&needle)
                    || report
                        .report_number
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle));
                let matches_type = self
                    .type_filter
                    .is_none_or(|t| report.metadata.report_type == t);
                let matches_status = self.status_filter.is_none_or(|s| report.status == s);
                matches_search && matches_type && matches_status
            })
            .collect()
    }
}
