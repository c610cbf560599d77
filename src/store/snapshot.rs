use tracing::warn;

use crate::errors::PrecinctError;
use crate::models::{ModuleKind, RecordSnapshot};

use super::http::HttpStore;

/// Fetch all five record collections concurrently and join best-effort.
///
/// Each fetch isolates its own failure: a collection whose request fails
/// degrades to an empty sequence and is recorded in the snapshot's
/// `unavailable` set, so one outage never blocks generation for the rest.
/// No retry and no cancellation; a slow fetch simply delays the join.
pub async fn fetch_snapshot(store: &HttpStore) -> RecordSnapshot {
    let (ob_entries, inmates, evidence, officers, vehicles) = tokio::join!(
        store.fetch_ob_entries(),
        store.fetch_custodial_records(),
        store.fetch_evidence(),
        store.fetch_officers(),
        store.fetch_vehicles(),
    );

    let mut unavailable = Vec::new();
    let ob_entries = degrade(ModuleKind::Ob, ob_entries, &mut unavailable);
    let inmates = degrade(ModuleKind::Custodial, inmates, &mut unavailable);
    let evidence = degrade(ModuleKind::Evidence, evidence, &mut unavailable);
    let officers = degrade(ModuleKind::Officers, officers, &mut unavailable);
    let vehicles = degrade(ModuleKind::Vehicles, vehicles, &mut unavailable);

    RecordSnapshot {
        ob_entries,
        inmates,
        evidence,
        officers,
        vehicles,
        unavailable,
    }
}

fn degrade<T>(
    module: ModuleKind,
    result: Result<Vec<T>, PrecinctError>,
    unavailable: &mut Vec<ModuleKind>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(error) => {
            warn!(module = module.id(), %error, "Collection fetch failed, degrading to empty");
            unavailable.push(module);
            Vec::new()
        }
    }
}
