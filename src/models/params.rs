use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::records::ModuleKind;
use super::report::{Criteria, DateRange, ReportType};

/// User-supplied parameters for generating one report.
///
/// `modules` keeps the user's selection order; the aggregation engine
/// always emits sections in canonical [`ModuleKind::ALL`] order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportParams {
    pub title: String,
    pub report_type: ReportType,
    pub description: String,
    pub modules: Vec<ModuleKind>,
    pub date_range: DateRange,
    pub criteria: Criteria,
}

impl ReportParams {
    /// Selected modules deduplicated into canonical order.
    pub fn selected_modules(&self) -> Vec<ModuleKind> {
        ModuleKind::ALL
            .iter()
            .copied()
            .filter(|m| self.modules.contains(m))
            .collect()
    }

    pub fn custom_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.criteria.start_date, self.criteria.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

impl Default for ReportParams {
    fn default() -> Self {
        ReportParams {
            title: String::new(),
            report_type: ReportType::IncidentReport,
            description: String::new(),
            modules: vec![ModuleKind::Ob],
            date_range: DateRange::Week,
            criteria: Criteria::default(),
        }
    }
}
