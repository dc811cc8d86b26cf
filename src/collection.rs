//! An in-memory collection of events, where each event ID appears at most once

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDateTime;

use crate::attribute::{Attribute, AttributeValue};
use crate::error::Result;
use crate::event::{Event, EventId};


/// A set of [`Event`]s, keyed by their IDs.
///
/// Operations that take an attribute key as a string (`"title"`, `"datetime"`, `"venue"`, `"description"`, `"priority"` or `"organization"`, case-insensitive)
/// silently do nothing for unknown keys, except [`sort`](EventCollection::sort), that returns an error.
///
/// This is not meant to be shared between threads. Wrap it into a `Mutex` if you need to.
#[derive(Clone, Debug, Default)]
pub struct EventCollection {
    events: BTreeMap<EventId, Event>,
}

impl EventCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over the events of this collection
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    /// Add an event.
    ///
    /// Returns `false` if an event with the same ID is already present. In this case, the existing event is kept untouched.
    pub fn add(&mut self, event: Event) -> bool {
        if self.events.contains_key(event.id()) {
            log::debug!("Rejecting event {}: this ID already exists", event.id());
            return false;
        }
        log::debug!("Adding event {} ({})", event.id(), event.title());
        self.events.insert(event.id().clone(), event);
        true
    }

    /// Remove the event with this ID. Returns `false` if there is no such event.
    pub fn remove(&mut self, event_id: &EventId) -> bool {
        match self.events.remove(event_id) {
            None => {
                log::debug!("Unable to remove event {}: no such ID", event_id);
                false
            },
            Some(_) => {
                log::debug!("Removed event {}", event_id);
                true
            },
        }
    }

    pub fn get_event_by_id(&self, event_id: &EventId) -> Option<&Event> {
        self.events.get(event_id)
    }

    pub fn get_event_by_id_mut(&mut self, event_id: &EventId) -> Option<&mut Event> {
        self.events.get_mut(event_id)
    }

    /// Set the attribute named `attribute` of an event to `new_value`.
    ///
    /// Returns `false` when the event does not exist, the attribute key is unknown or cannot be modified,
    /// or `new_value` does not have the type this attribute expects. Nothing is changed in these cases.
    pub fn modify_event(&mut self, event_id: &EventId, attribute: &str, new_value: AttributeValue) -> bool {
        match attribute.parse::<Attribute>() {
            Err(err) => {
                log::debug!("Unable to modify event {}: {}", event_id, err);
                false
            },
            Ok(attribute) => self.modify(event_id, attribute, new_value),
        }
    }

    /// Same as [`modify_event`](EventCollection::modify_event), with an already parsed attribute
    pub fn modify(&mut self, event_id: &EventId, attribute: Attribute, new_value: AttributeValue) -> bool {
        let event = match self.events.get_mut(event_id) {
            None => {
                log::debug!("Unable to modify event {}: no such ID", event_id);
                return false;
            },
            Some(event) => event,
        };

        let modified = attribute.apply(event, new_value);
        if modified {
            log::debug!("Modified {} of event {}", attribute, event_id);
        } else {
            log::debug!("Refusing to modify {} of event {}", attribute, event_id);
        }
        modified
    }

    /// Flip the priority of an event. Returns `false` if there is no such event.
    pub fn toggle_priority(&mut self, event_id: &EventId) -> bool {
        match self.events.get_mut(event_id) {
            None => false,
            Some(event) => {
                event.toggle_priority();
                true
            },
        }
    }

    /// Returns every event, sorted in ascending order of the attribute named `attribute`.
    ///
    /// Texts are sorted lexically, dates chronologically, and normal priority comes before high priority.
    /// Events that compare equal keep an unspecified order.
    ///
    /// Contrary to other functions of this struct, an unknown attribute key is an error.
    pub fn sort(&self, attribute: &str) -> Result<Vec<&Event>> {
        let attribute = attribute.parse::<Attribute>()?;
        Ok(self.sorted_by(attribute))
    }

    /// Same as [`sort`](EventCollection::sort), with an already parsed attribute
    pub fn sorted_by(&self, attribute: Attribute) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.values().collect();
        sorted.sort_by(|left, right| attribute.compare(left, right));
        sorted
    }

    /// Returns the IDs of the events whose attribute named `attribute` is exactly `value`.
    ///
    /// An unknown attribute key returns no ID.
    pub fn search(&self, attribute: &str, value: &AttributeValue) -> Vec<EventId> {
        match attribute.parse::<Attribute>() {
            Err(err) => {
                log::debug!("Search returns nothing: {}", err);
                Vec::new()
            },
            Ok(attribute) => self.filter(attribute, value)
                .into_iter()
                .map(|event| event.id().clone())
                .collect(),
        }
    }

    /// Returns the events whose `attribute` is exactly `value`
    pub fn filter(&self, attribute: Attribute, value: &AttributeValue) -> Vec<&Event> {
        self.events.values()
            .filter(|event| attribute.matches(event, value))
            .collect()
    }

    /// Display every event whose attribute named `attribute` is exactly `value`.
    ///
    /// An unknown attribute key displays nothing. Returns the number of displayed events.
    pub fn view<W: Write>(&self, out: &mut W, attribute: &str, value: &AttributeValue) -> std::io::Result<usize> {
        let attribute = match attribute.parse::<Attribute>() {
            Err(err) => {
                log::debug!("Nothing to view: {}", err);
                return Ok(0);
            },
            Ok(attribute) => attribute,
        };

        let matching = self.filter(attribute, value);
        for event in &matching {
            event.display(out)?;
        }
        Ok(matching.len())
    }

    /// Returns the events that happen between `start` and `end` (both inclusive), in chronological order
    pub fn between(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.values()
            .filter(|event| event.date_time() >= start && event.date_time() <= end)
            .collect();
        events.sort_by(|left, right| Event::compare_date_time(left, right));
        events
    }
}
