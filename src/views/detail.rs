use crate::models::ReportDocument;

/// State of the single-report view. Metadata and every content section are
/// rendered verbatim; nothing here reformats section bodies.
#[derive(Debug)]
pub struct DetailView {
    pub report: ReportDocument,
}

impl DetailView {
    pub fn new(report: ReportDocument) -> Self {
        DetailView { report }
    }
}
