use crate::models::{
    DateRange, ModuleKind, RecordSnapshot, ReportParams, ReportSection,
};

use super::breakdown::{bullet_lines, count_equal, ordered_counts};

/// At most this many occurrence book entries are listed individually.
const OB_LISTING_CAP: usize = 10;

/// Produce the content sections for a new report.
///
/// Pure and deterministic: identical snapshot and parameters always yield
/// byte-identical sections, and no input can make it fail. The first
/// section is always the Executive Summary; per-module sections follow in
/// canonical [`ModuleKind::ALL`] order for whichever modules were selected.
pub fn generate_content(snapshot: &RecordSnapshot, params: &ReportParams) -> Vec<ReportSection> {
    let mut sections = vec![executive_summary(snapshot, params)];

    for module in params.selected_modules() {
        sections.push(match module {
            ModuleKind::Ob => ob_section(snapshot),
            ModuleKind::Custodial => custodial_section(snapshot),
            ModuleKind::Evidence => evidence_section(snapshot),
            ModuleKind::Officers => officers_section(snapshot),
            ModuleKind::Vehicles => vehicles_section(snapshot),
        });
    }

    sections
}

fn executive_summary(snapshot: &RecordSnapshot, params: &ReportParams) -> ReportSection {
    let period = match (params.date_range, params.custom_bounds()) {
        (DateRange::Custom, Some((start, end))) => {
            format!("the period from {} to {}", start, end)
        }
        _ => params.date_range.display_name().to_string(),
    };

    let active_inmates = count_equal(
        snapshot.inmates.iter().map(|i| i.status.as_deref()),
        "Active",
    );

    let mut content = format!(
        "This {} covers {} and includes data from {} police management module(s).\n\
         \n\
         Key Highlights:\n\
         • Total Incidents Recorded: {}\n\
         • Active Inmates: {}\n\
         • Vehicles Registered: {}\n\
         • Evidence Items: {}\n\
         • Officers Involved: {}",
        params.report_type.display_name(),
        period,
        params.selected_modules().len(),
        snapshot.ob_entries.len(),
        active_inmates,
        snapshot.vehicles.len(),
        snapshot.evidence.len(),
        snapshot.officers.len(),
    );

    if !snapshot.unavailable.is_empty() {
        let names: Vec<&str> = snapshot
            .unavailable
            .iter()
            .map(|m| m.display_name())
            .collect();
        content.push_str(&format!(
            "\n\nData unavailable for: {}. Counts for these collections reflect a failed fetch, not confirmed zero records.",
            names.join(", ")
        ));
    }

    ReportSection {
        title: "Executive Summary".to_string(),
        content,
    }
}

fn ob_section(snapshot: &RecordSnapshot) -> ReportSection {
    let listing = snapshot
        .ob_entries
        .iter()
        .take(OB_LISTING_CAP)
        .map(|ob| {
            format!(
                "• {}: {} - {}",
                ob.ob_number.as_deref().unwrap_or("Unknown"),
                ob.incident_kind().unwrap_or("Unknown"),
                ob.status.as_deref().unwrap_or("Unknown"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let classifications = ordered_counts(
        snapshot
            .ob_entries
            .iter()
            .map(|ob| ob.case_classification.as_deref()),
    )
    .into_iter()
    .map(|(value, _)| format!("• {}", value))
    .collect::<Vec<_>>()
    .join("\n");

    ReportSection {
        title: "Occurrence Book Analysis".to_string(),
        content: format!(
            "Total Incidents: {}\n\nRecent Incidents:\n{}\n\nCase Classifications:\n{}",
            snapshot.ob_entries.len(),
            listing,
            classifications,
        ),
    }
}

fn custodial_section(snapshot: &RecordSnapshot) -> ReportSection {
    let active = count_equal(
        snapshot.inmates.iter().map(|i| i.status.as_deref()),
        "Active",
    );
    let risk = ordered_counts(snapshot.inmates.iter().map(|i| i.risk_level.as_deref()));
    let classification =
        ordered_counts(snapshot.inmates.iter().map(|i| i.classification.as_deref()));

    ReportSection {
        title: "Custodial Records Summary".to_string(),
        content: format!(
            "Total Inmates: {}\nActive Inmates: {}\n\nRisk Level Distribution:\n{}\n\nSecurity Classifications:\n{}",
            snapshot.inmates.len(),
            active,
            bullet_lines(&risk, "inmates"),
            bullet_lines(&classification, "inmates"),
        ),
    }
}

fn evidence_section(snapshot: &RecordSnapshot) -> ReportSection {
    let types = ordered_counts(snapshot.evidence.iter().map(|e| e.evidence_type.as_deref()));
    let locations = ordered_counts(
        snapshot
            .evidence
            .iter()
            .map(|e| e.storage_location.as_deref()),
    );

    ReportSection {
        title: "Evidence Management Report".to_string(),
        content: format!(
            "Total Evidence Items: {}\n\nEvidence Types:\n{}\n\nStorage Locations:\n{}",
            snapshot.evidence.len(),
            bullet_lines(&types, "items"),
            bullet_lines(&locations, "items"),
        ),
    }
}

fn officers_section(snapshot: &RecordSnapshot) -> ReportSection {
    let active = count_equal(
        snapshot.officers.iter().map(|o| o.status.as_deref()),
        "Active",
    );
    let departments = ordered_counts(snapshot.officers.iter().map(|o| o.department.as_deref()));
    let ranks = ordered_counts(snapshot.officers.iter().map(|o| o.rank.as_deref()));

    ReportSection {
        title: "Officer Activity Summary".to_string(),
        content: format!(
            "Total Officers: {}\nActive Officers: {}\n\nDepartments:\n{}\n\nRanks:\n{}",
            snapshot.officers.len(),
            active,
            bullet_lines(&departments, "officers"),
            bullet_lines(&ranks, "officers"),
        ),
    }
}

fn vehicles_section(snapshot: &RecordSnapshot) -> ReportSection {
    let statuses = ordered_counts(snapshot.vehicles.iter().map(|v| v.status.as_deref()));
    let types = ordered_counts(snapshot.vehicles.iter().map(|v| v.vehicle_type.as_deref()));

    ReportSection {
        title: "Vehicle Registry Report".to_string(),
        content: format!(
            "Total Vehicles: {}\n\nVehicle Status:\n{}\n\nVehicle Types:\n{}",
            snapshot.vehicles.len(),
            bullet_lines(&statuses, "vehicles"),
            bullet_lines(&types, "vehicles"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustodialRecord, EvidenceItem, ObEntry, Officer, Vehicle};

    fn ob(number: &str, incident: &str, status: &str) -> ObEntry {
        ObEntry {
            ob_number: Some(number.to_string()),
            incident_type: Some(incident.to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    fn inmate(status: &str, risk: Option<&str>) -> CustodialRecord {
        CustodialRecord {
            status: Some(status.to_string()),
            risk_level: risk.map(|r| r.to_string()),
            classification: None,
        }
    }

    fn full_snapshot() -> RecordSnapshot {
        RecordSnapshot {
            ob_entries: vec![
                ob("OB-001", "Theft", "Open"),
                ob("OB-002", "Theft", "Closed"),
                ob("OB-003", "Assault", "Open"),
            ],
            inmates: vec![
                inmate("Active", Some("High")),
                inmate("Active", Some("Low")),
                inmate("Active", None),
                inmate("Released", Some("High")),
                inmate("Released", None),
            ],
            evidence: vec![
                EvidenceItem {
                    evidence_type: Some("Firearm".to_string()),
                    storage_location: Some("Locker A".to_string()),
                },
                EvidenceItem {
                    evidence_type: None,
                    storage_location: Some("Locker A".to_string()),
                },
            ],
            officers: vec![Officer {
                status: Some("Active".to_string()),
                department: Some("CID".to_string()),
                rank: Some("Sergeant".to_string()),
            }],
            vehicles: vec![Vehicle {
                status: Some("Operational".to_string()),
                vehicle_type: Some("Patrol".to_string()),
            }],
            unavailable: Vec::new(),
        }
    }

    fn all_modules_params() -> ReportParams {
        ReportParams {
            title: "Everything".to_string(),
            modules: ModuleKind::ALL.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn executive_summary_is_always_first() {
        let sections = generate_content(&RecordSnapshot::default(), &ReportParams::default());
        assert_eq!(sections[0].title, "Executive Summary");

        let sections = generate_content(&full_snapshot(), &all_modules_params());
        assert_eq!(sections[0].title, "Executive Summary");
    }

    #[test]
    fn sections_follow_canonical_order_regardless_of_selection_order() {
        let params = ReportParams {
            modules: vec![ModuleKind::Vehicles, ModuleKind::Evidence, ModuleKind::Ob],
            ..Default::default()
        };
        let titles: Vec<String> = generate_content(&full_snapshot(), &params)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Executive Summary",
                "Occurrence Book Analysis",
                "Evidence Management Report",
                "Vehicle Registry Report",
            ]
        );
    }

    #[test]
    fn one_section_per_selected_module() {
        let sections = generate_content(&full_snapshot(), &all_modules_params());
        assert_eq!(sections.len(), 6);
    }

    #[test]
    fn active_inmate_count_in_summary() {
        let sections = generate_content(&full_snapshot(), &all_modules_params());
        assert!(sections[0].content.contains("Active Inmates: 3"));
        assert!(sections[0].content.contains("Total Incidents Recorded: 3"));
    }

    #[test]
    fn ob_section_lists_records_and_skips_missing_classifications() {
        let params = ReportParams {
            modules: vec![ModuleKind::Ob],
            ..Default::default()
        };
        let sections = generate_content(&full_snapshot(), &params);
        let ob = &sections[1];
        assert!(ob.content.contains("Total Incidents: 3"));
        assert!(ob.content.contains("• OB-001: Theft - Open"));
        assert!(ob.content.contains("• OB-003: Assault - Open"));
        // No record carries a classification, so the breakdown is empty.
        assert!(ob.content.ends_with("Case Classifications:\n"));
    }

    #[test]
    fn ob_listing_caps_at_ten() {
        let snapshot = RecordSnapshot {
            ob_entries: (0..25)
                .map(|i| ob(&format!("OB-{:03}", i), "Theft", "Open"))
                .collect(),
            ..Default::default()
        };
        let params = ReportParams {
            modules: vec![ModuleKind::Ob],
            ..Default::default()
        };
        let sections = generate_content(&snapshot, &params);
        let listed = sections[1].content.matches("• OB-").count();
        assert_eq!(listed, 10);
        assert!(sections[1].content.contains("Total Incidents: 25"));
    }

    #[test]
    fn records_missing_breakdown_field_still_count_in_totals() {
        let params = ReportParams {
            modules: vec![ModuleKind::Evidence],
            ..Default::default()
        };
        let sections = generate_content(&full_snapshot(), &params);
        let evidence = &sections[1];
        assert!(evidence.content.contains("Total Evidence Items: 2"));
        // Only one item has a type; the untyped one is excluded from the
        // breakdown but included in the total.
        assert!(evidence.content.contains("• Firearm: 1 items"));
        assert!(evidence.content.contains("• Locker A: 2 items"));
    }

    #[test]
    fn breakdowns_keep_first_appearance_order() {
        let params = ReportParams {
            modules: vec![ModuleKind::Custodial],
            ..Default::default()
        };
        let sections = generate_content(&full_snapshot(), &params);
        let content = &sections[1].content;
        let high = content.find("• High: 2 inmates").unwrap();
        let low = content.find("• Low: 1 inmates").unwrap();
        assert!(high < low);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let snapshot = full_snapshot();
        let params = all_modules_params();
        let first = generate_content(&snapshot, &params);
        let second = generate_content(&snapshot, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn unavailable_collections_are_flagged_in_summary() {
        let snapshot = RecordSnapshot {
            ob_entries: vec![ob("OB-001", "Theft", "Open")],
            unavailable: vec![ModuleKind::Custodial, ModuleKind::Evidence],
            ..Default::default()
        };
        let sections = generate_content(&snapshot, &all_modules_params());
        assert!(sections[0]
            .content
            .contains("Data unavailable for: Custodial Records, Evidence Management"));
        // Degraded modules still render with zero counts.
        let custodial = sections
            .iter()
            .find(|s| s.title == "Custodial Records Summary")
            .unwrap();
        assert!(custodial.content.contains("Total Inmates: 0"));
    }

    #[test]
    fn never_fails_on_fully_empty_records() {
        let snapshot = RecordSnapshot {
            ob_entries: vec![ObEntry::default(), ObEntry::default()],
            inmates: vec![CustodialRecord::default()],
            evidence: vec![EvidenceItem::default()],
            officers: vec![Officer::default()],
            vehicles: vec![Vehicle::default()],
            unavailable: Vec::new(),
        };
        let sections = generate_content(&snapshot, &all_modules_params());
        assert_eq!(sections.len(), 6);
        assert!(sections[1].content.contains("• Unknown: Unknown - Unknown"));
    }

    #[test]
    fn custom_range_restates_bounds() {
        let mut params = all_modules_params();
        params.date_range = DateRange::Custom;
        params.criteria.start_date = "2026-01-01".parse().ok();
        params.criteria.end_date = "2026-03-31".parse().ok();
        let sections = generate_content(&full_snapshot(), &params);
        assert!(sections[0]
            .content
            .contains("the period from 2026-01-01 to 2026-03-31"));
    }
}
