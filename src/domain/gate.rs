//! Date-gated projection of the schedule for public consumption.
//!
//! Days stay hidden behind a redacted sentinel until the calendar date
//! reaches them. Defaulting to hidden is the safe failure direction here:
//! malformed or missing day data degrades to the sentinel, never to an error
//! and never to leaked content.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::entities::Schedule;

/// Placeholder value emitted for both fields of a locked day's slot.
pub const REDACTED: &str = "REDACTED";

/// One slot as exposed to clients: link and submitter name, nothing else.
///
/// Built by an explicit projection so any future schedule field has to be
/// deliberately included here to reach the outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatedSlot {
    pub url: String,
    pub submitter: String,
}

impl GatedSlot {
    fn locked() -> Self {
        Self {
            url: REDACTED.to_string(),
            submitter: REDACTED.to_string(),
        }
    }
}

/// The client-visible calendar: day number to real slots or the sentinel.
///
/// Serializes as a JSON object keyed by stringified day numbers. Recomputed
/// on every read; never persisted.
pub type GatedView = BTreeMap<u32, Vec<GatedSlot>>;

/// Projects the schedule into the view visible on `today`.
///
/// The comparison is month/day only, against a 0-indexed `target_month0`
/// (11 = December). A month strictly after the target reveals everything, the
/// target month reveals days up to `today`'s day-of-month, and an earlier
/// month reveals nothing. There is deliberately no year component: the
/// calendar runs within a single month, and frozen client snapshots depend on
/// exactly this comparison.
///
/// Every day from 1 to the schedule's highest day (or `fallback_days` when
/// the schedule is empty) appears in the output; days that are not yet
/// visible, and days missing from the schedule regardless of date, carry a
/// single [`REDACTED`] sentinel slot.
pub fn project(
    schedule: &Schedule,
    today: NaiveDate,
    target_month0: u32,
    fallback_days: u32,
) -> GatedView {
    let max_day = schedule.last_day().unwrap_or(fallback_days);

    (1..=max_day)
        .map(|day| {
            let slots = if day_visible(day, today, target_month0) {
                match schedule.day(day) {
                    Some(slots) if !slots.is_empty() => slots
                        .iter()
                        .map(|slot| GatedSlot {
                            url: slot.url.clone(),
                            submitter: slot.submitter.clone(),
                        })
                        .collect(),
                    _ => vec![GatedSlot::locked()],
                }
            } else {
                vec![GatedSlot::locked()]
            };

            (day, slots)
        })
        .collect()
}

fn day_visible(day: u32, today: NaiveDate, target_month0: u32) -> bool {
    match today.month0().cmp(&target_month0) {
        Ordering::Greater => true,
        Ordering::Equal => day <= today.day(),
        Ordering::Less => false,
    }
}
