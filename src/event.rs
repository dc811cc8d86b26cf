//! Calendar events

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

use crate::config::{DEFAULT_DESCRIPTION, DEFAULT_VENUE};
use crate::utils::format_date_time;


/// The unique identifier of an [`Event`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId {
    content: String,
}

impl EventId {
    /// Generate a random EventId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_simple().to_string();
        Self { content: format!("EV-{}", &random[..8]) }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for EventId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for EventId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl FromStr for EventId {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}



/// A calendar event.
///
/// Two events are equal whenever their IDs are equal, whatever their other fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    /// Immutable identifier, unique within an [`EventCollection`](crate::EventCollection)
    id: EventId,
    title: String,
    /// The organization hosting the event. It cannot change once the event is created
    organization: String,
    venue: String,
    description: String,
    date_time: NaiveDateTime,
    high_priority: bool,
}

impl Event {
    /// Create a brand new Event.
    /// This will pick a new (random) event ID.
    pub fn new(title: String, date_time: NaiveDateTime, organization: String) -> Self {
        Self::new_with_id(EventId::random(), title, date_time, organization)
    }

    /// Create a new Event with a given ID.
    /// Its venue, description and priority are set to their default values.
    pub fn new_with_id(id: EventId, title: String, date_time: NaiveDateTime, organization: String) -> Self {
        Self {
            id,
            title,
            organization,
            venue: DEFAULT_VENUE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            date_time,
            high_priority: false,
        }
    }

    pub fn id(&self) -> &EventId               { &self.id            }
    pub fn title(&self) -> &str                { &self.title         }
    pub fn organization(&self) -> &str         { &self.organization  }
    pub fn venue(&self) -> &str                { &self.venue         }
    pub fn description(&self) -> &str          { &self.description   }
    pub fn date_time(&self) -> &NaiveDateTime  { &self.date_time     }
    pub fn is_high_priority(&self) -> bool     { self.high_priority  }

    pub fn set_title(&mut self, new_title: String) {
        self.title = new_title;
    }

    pub fn set_date_time(&mut self, new_date_time: NaiveDateTime) {
        self.date_time = new_date_time;
    }

    pub fn set_venue(&mut self, new_venue: String) {
        self.venue = new_venue;
    }

    pub fn set_description(&mut self, new_description: String) {
        self.description = new_description;
    }

    pub fn set_priority(&mut self, high_priority: bool) {
        self.high_priority = high_priority;
    }

    /// Flip the priority flag
    pub fn toggle_priority(&mut self) {
        self.high_priority = !self.high_priority;
    }

    /// "High" or "Normal"
    pub fn priority_label(&self) -> &'static str {
        if self.high_priority { "High" } else { "Normal" }
    }

    /// Write the human-readable rendering of this event, followed by an empty line
    pub fn display<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Compare two events by their date and time only.
    ///
    /// This is not an `Ord` implementation, because events with the same date and time are not equal.
    pub fn compare_date_time(left: &Event, right: &Event) -> Ordering {
        left.date_time.cmp(&right.date_time)
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        writeln!(f, "Event Title: {}", self.title)?;
        writeln!(f, "Organizer: {}", self.organization)?;
        writeln!(f, "Venue: {}", self.venue)?;
        writeln!(f, "Date and Time: {}", format_date_time(&self.date_time))?;
        writeln!(f)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Priority: {}", self.priority_label())?;
        writeln!(f, "EventID: {}", self.id)
    }
}
