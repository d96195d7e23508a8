//! Fair distribution of submitted links across calendar days.
//!
//! The allocator is a pure function of its inputs plus a caller-supplied
//! random source. It performs no I/O; persisting the result is the caller's
//! concern, and a failed run must leave nothing behind.

use std::collections::{BTreeMap, VecDeque};

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use thiserror::Error;

use crate::domain::entities::{DaySlot, Schedule, Submission};

/// Number of links assigned to each calendar day.
pub const SLOTS_PER_DAY: usize = 3;

/// Reasons an allocation run cannot produce a schedule.
///
/// All variants are fatal to the run: the output is either a complete, valid
/// schedule or no schedule at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// Fewer distinct submitters with links than slots in a single day.
    #[error("need at least {required} submitters with links, found {available}")]
    InsufficientSubmitters { available: usize, required: usize },

    /// Total link count is too small to fill the requested days.
    #[error("need {required} links to fill the calendar, found {available}")]
    InsufficientLinks { available: usize, required: usize },

    /// A specific day cannot be completed with distinct submitters, even
    /// though the global totals sufficed. Happens when links are concentrated
    /// in too few submitters.
    #[error("day {day} cannot be filled with {required} distinct submitters")]
    UnfillableDay { day: u32, required: usize },
}

/// Per-submitter working state for one allocation run.
struct SubmitterState {
    name: String,
    queue: VecDeque<String>,
    used: usize,
}

/// Distributes submitted links across `required_days` calendar days.
///
/// Each day receives exactly `slots_per_day` links from pairwise-distinct
/// submitters. Selection always prefers the globally least-used submitter,
/// breaking ties uniformly at random, so usage counts stay within 1 of each
/// other for as long as a valid choice exists. Which of a submitter's own
/// links lands on which day is randomized by an up-front per-submitter
/// shuffle; links are then consumed in that order.
///
/// Submitter names and links are trimmed, empty ones discarded, and grouping
/// is case-sensitive. Multiple submissions under the same name share one pool.
///
/// The algorithm is deterministic for a given `rng`: seed it (for instance
/// with [`rand::SeedableRng::seed_from_u64`]) to reproduce a schedule.
///
/// # Errors
///
/// - [`AllocationError::InsufficientLinks`] when the total link count cannot
///   cover `required_days * slots_per_day`.
/// - [`AllocationError::InsufficientSubmitters`] when fewer than
///   `slots_per_day` submitters contributed any links.
/// - [`AllocationError::UnfillableDay`] when some day cannot be completed
///   with distinct submitters despite the global totals passing.
pub fn allocate<R: Rng + ?Sized>(
    submissions: &[Submission],
    required_days: u32,
    slots_per_day: usize,
    rng: &mut R,
) -> Result<Schedule, AllocationError> {
    let mut submitters = build_pool(submissions, rng);

    let available: usize = submitters.iter().map(|s| s.queue.len()).sum();
    let required = required_days as usize * slots_per_day;
    if available < required {
        return Err(AllocationError::InsufficientLinks {
            available,
            required,
        });
    }

    if submitters.len() < slots_per_day {
        return Err(AllocationError::InsufficientSubmitters {
            available: submitters.len(),
            required: slots_per_day,
        });
    }

    let mut days = BTreeMap::new();
    for day in 1..=required_days {
        let mut taken = vec![false; submitters.len()];
        let mut slots = Vec::with_capacity(slots_per_day);

        for _ in 0..slots_per_day {
            let slot = draw_slot(&mut submitters, &mut taken, rng).ok_or(
                AllocationError::UnfillableDay {
                    day,
                    required: slots_per_day,
                },
            )?;
            slots.push(slot);
        }

        days.insert(day, slots);
    }

    Ok(Schedule::new(days))
}

/// Groups links by trimmed submitter name and shuffles each submitter's queue.
///
/// Returned in sorted-name order so that equal seeds yield equal schedules.
fn build_pool<R: Rng + ?Sized>(submissions: &[Submission], rng: &mut R) -> Vec<SubmitterState> {
    let mut pools: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for submission in submissions {
        let name = submission.name.trim();
        if name.is_empty() {
            continue;
        }

        let links = pools.entry(name.to_string()).or_default();
        for link in &submission.links {
            let link = link.trim();
            if !link.is_empty() {
                links.push(link.to_string());
            }
        }
    }

    pools
        .into_iter()
        .filter(|(_, links)| !links.is_empty())
        .map(|(name, mut links)| {
            links.shuffle(rng);
            SubmitterState {
                name,
                queue: links.into(),
                used: 0,
            }
        })
        .collect()
}

/// Draws one slot: the least-used submitter not yet chosen today, ties broken
/// uniformly at random. Returns `None` when no submitter qualifies.
fn draw_slot<R: Rng + ?Sized>(
    submitters: &mut [SubmitterState],
    taken: &mut [bool],
    rng: &mut R,
) -> Option<DaySlot> {
    let min_used = submitters
        .iter()
        .zip(taken.iter())
        .filter(|(state, taken)| !**taken && !state.queue.is_empty())
        .map(|(state, _)| state.used)
        .min()?;

    let candidates: Vec<usize> = submitters
        .iter()
        .enumerate()
        .filter(|(i, state)| !taken[*i] && !state.queue.is_empty() && state.used == min_used)
        .map(|(i, _)| i)
        .collect();

    let pick = *candidates.choose(rng)?;
    taken[pick] = true;

    let state = &mut submitters[pick];
    let url = state.queue.pop_front()?;
    state.used += 1;

    Some(DaySlot {
        url,
        submitter: state.name.clone(),
    })
}
