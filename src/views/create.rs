use crate::errors::PrecinctError;
use crate::models::ReportParams;

/// State of the report-generation form. Validation runs locally before any
/// store call; while it fails, nothing touches the network.
#[derive(Debug, Default)]
pub struct CreateView {
    pub form: ReportParams,
}

impl CreateView {
    pub fn with_form(form: ReportParams) -> Self {
        CreateView { form }
    }

    /// Field-keyed validation errors, empty when the form may be submitted.
    pub fn validate(&self) -> Vec<PrecinctError> {
        let mut errors = Vec::new();
        if self.form.title.trim().is_empty() {
            errors.push(PrecinctError::validation("title", "Report title is required"));
        }
        if self.form.modules.is_empty() {
            errors.push(PrecinctError::validation(
                "modules",
                "Select at least one data module",
            ));
        }
        errors
    }
}
