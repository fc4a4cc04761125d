//! Last-value-carried-forward panel reconstruction.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use lendrisk_core::{DailyDebtRecord, DebtEvent};
use log::debug;

use crate::config::AnalyticsConfig;
use crate::parallel::maybe_parallel_map;

/// Reconstructs the dense daily debt panel from sparse events.
///
/// For every date that appears anywhere in the input, and every entity with
/// at least one event at or before that date:
///
/// - if the entity has events on the date itself, the freshest same-day
///   observation (maximum timestamp) becomes the record;
/// - otherwise the entity's most recent prior observation is carried
///   forward;
/// - records with a zero balance are dropped (closed positions are not
///   tracked going forward).
///
/// The date axis contains only dates observed in the input, not a full
/// calendar range; calendar densification happens later, at the
/// concentration stage. Output is sorted by (date, entity_id) and contains
/// at most one record per (entity, date) pair.
///
/// This is a cursor-advance join: each entity's sorted event list is
/// scanned once as the date axis advances, so cost is linear in events plus
/// entities x dates, never a per-(date, entity) rescan of prior history.
#[must_use]
pub fn reconstruct_daily_panel(events: &[DebtEvent]) -> Vec<DailyDebtRecord> {
    reconstruct_daily_panel_with(events, &AnalyticsConfig::default())
}

/// [`reconstruct_daily_panel`] with explicit parallelism configuration.
///
/// Entities are independent of each other, so the per-entity scans may run
/// in parallel; the merged output is identical either way.
#[must_use]
pub fn reconstruct_daily_panel_with(
    events: &[DebtEvent],
    config: &AnalyticsConfig,
) -> Vec<DailyDebtRecord> {
    // Per-entity event lists, sorted by timestamp (stable: later input
    // order wins on equal timestamps, matching "freshest observation").
    let mut by_entity: BTreeMap<&str, Vec<&DebtEvent>> = BTreeMap::new();
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    for event in events {
        by_entity.entry(event.entity_id.as_str()).or_default().push(event);
        dates.insert(event.date());
    }
    for entity_events in by_entity.values_mut() {
        entity_events.sort_by_key(|e| e.timestamp);
    }
    let dates: Vec<NaiveDate> = dates.into_iter().collect();

    debug!(
        "reconstructing daily panel: {} events, {} entities, {} dates",
        events.len(),
        by_entity.len(),
        dates.len()
    );

    let entities: Vec<(&str, Vec<&DebtEvent>)> = by_entity.into_iter().collect();
    let per_entity: Vec<Vec<DailyDebtRecord>> = maybe_parallel_map(&entities, config, |(entity, entity_events)| {
        entity_records(entity, entity_events, &dates)
    });

    let mut panel: Vec<DailyDebtRecord> = per_entity.into_iter().flatten().collect();
    panel.sort_by(|a, b| (a.date, a.entity_id.as_str()).cmp(&(b.date, b.entity_id.as_str())));
    panel
}

/// Scans one entity's sorted events along the date axis.
///
/// The cursor only moves forward: after processing date `d` it sits on the
/// first event dated after `d`, and `last` holds the maximum-timestamp
/// event at or before `d`.
fn entity_records(
    entity: &str,
    entity_events: &[&DebtEvent],
    dates: &[NaiveDate],
) -> Vec<DailyDebtRecord> {
    let mut records = Vec::new();
    let mut cursor = 0usize;
    let mut last: Option<&DebtEvent> = None;

    for &date in dates {
        while cursor < entity_events.len() && entity_events[cursor].date() <= date {
            last = Some(entity_events[cursor]);
            cursor += 1;
        }
        // `last` is the freshest observation at or before `date`; if it is
        // dated `date` itself it is the freshest same-day event.
        if let Some(event) = last {
            if event.debt_amount != 0.0 {
                records.push(DailyDebtRecord::new(entity, date, event.debt_amount));
            }
        }
    }

    records
}
