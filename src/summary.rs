//! Summary statistics over a set of events

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{Event, EventCollection};


/// A report computed once, from a copy of the events of an [`EventCollection`].
///
/// Later changes to the collection do not affect an existing summary; build a new one to get fresh figures.
#[derive(Clone, Debug, Serialize)]
pub struct EventSummary {
    #[serde(skip)]
    events: Vec<Event>,
    /// The inclusive range the events were taken from, if any
    range: Option<(NaiveDateTime, NaiveDateTime)>,
    total: usize,
    organizers: BTreeSet<String>,
    high_priority_count: usize,
}

impl EventSummary {
    /// Summarize every event of the collection
    pub fn new(collection: &EventCollection) -> Self {
        Self::from_events(collection.events().cloned().collect(), None)
    }

    /// Summarize the events of the collection that happen between `start` and `end` (both inclusive).
    /// Other events are left out entirely.
    pub fn with_range(collection: &EventCollection, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let events = collection.between(&start, &end)
            .into_iter()
            .cloned()
            .collect();
        Self::from_events(events, Some((start, end)))
    }

    fn from_events(events: Vec<Event>, range: Option<(NaiveDateTime, NaiveDateTime)>) -> Self {
        let organizers = events.iter()
            .map(|event| event.organization().to_string())
            .collect();
        let high_priority_count = events.iter()
            .filter(|event| event.is_high_priority())
            .count();

        let summary = Self {
            total: events.len(),
            events,
            range,
            organizers,
            high_priority_count,
        };
        log::debug!("Summarized {} events ({} high priority)", summary.total, summary.high_priority_count);
        summary
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// The distinct organizers, in alphabetical order
    pub fn organizers(&self) -> &BTreeSet<String> {
        &self.organizers
    }

    pub fn organizer_count(&self) -> usize {
        self.organizers.len()
    }

    pub fn high_priority_count(&self) -> usize {
        self.high_priority_count
    }

    pub fn range(&self) -> Option<&(NaiveDateTime, NaiveDateTime)> {
        self.range.as_ref()
    }

    /// The events this summary has been computed from
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Display for EventSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let organizers: Vec<&str> = self.organizers.iter().map(String::as_str).collect();
        writeln!(f, "Total number of events: {}", self.total)?;
        writeln!(f, "Number of organizers: {}", self.organizer_count())?;
        writeln!(f, "High priority events: {}", self.high_priority_count)?;
        writeln!(f, "List of organizers: [{}]", organizers.join(", "))
    }
}
