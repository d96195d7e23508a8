//! Schedule entity mapping calendar days to their assigned link slots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar slot: a link and the participant who contributed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    pub url: String,
    pub submitter: String,
}

impl DaySlot {
    /// Creates a new DaySlot instance.
    pub fn new(url: impl Into<String>, submitter: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            submitter: submitter.into(),
        }
    }
}

/// The generated calendar: day number (1-based) to that day's slots.
///
/// Within a single day every `submitter` is distinct; the allocator enforces
/// this when the schedule is built, and nothing mutates a schedule afterwards.
/// A new generator run replaces the whole schedule rather than patching it.
///
/// Serializes as a JSON object keyed by the stringified day number, which is
/// the on-disk and wire format consumed by the calendar endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<u32, Vec<DaySlot>>,
}

impl Schedule {
    /// Creates a schedule from an already-assembled day map.
    pub fn new(days: BTreeMap<u32, Vec<DaySlot>>) -> Self {
        Self { days }
    }

    /// Returns the slots for a day, if the day is present.
    pub fn day(&self, day: u32) -> Option<&[DaySlot]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Highest day number present, or `None` for an empty schedule.
    pub fn last_day(&self) -> Option<u32> {
        self.days.keys().next_back().copied()
    }

    /// Number of days present.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[DaySlot])> {
        self.days.iter().map(|(day, slots)| (*day, slots.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        let mut days = BTreeMap::new();
        days.insert(
            1,
            vec![
                DaySlot::new("https://example.com/a", "alice"),
                DaySlot::new("https://example.com/b", "bob"),
            ],
        );
        days.insert(3, vec![DaySlot::new("https://example.com/c", "carol")]);
        Schedule::new(days)
    }

    #[test]
    fn test_day_lookup() {
        let schedule = sample();

        assert_eq!(schedule.day(1).unwrap().len(), 2);
        assert!(schedule.day(2).is_none());
        assert_eq!(schedule.day(3).unwrap()[0].submitter, "carol");
    }

    #[test]
    fn test_last_day() {
        assert_eq!(sample().last_day(), Some(3));
        assert_eq!(Schedule::default().last_day(), None);
    }

    #[test]
    fn test_serializes_with_stringified_day_keys() {
        let json = serde_json::to_value(sample()).unwrap();

        assert!(json.get("1").is_some());
        assert!(json.get("3").is_some());
        assert_eq!(json["1"][0]["url"], "https://example.com/a");
        assert_eq!(json["1"][1]["submitter"], "bob");
    }

    #[test]
    fn test_deserializes_from_stringified_day_keys() {
        let raw = r#"{"2":[{"url":"https://example.com/x","submitter":"dave"}]}"#;
        let schedule: Schedule = serde_json::from_str(raw).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.day(2).unwrap()[0].url, "https://example.com/x");
    }
}
