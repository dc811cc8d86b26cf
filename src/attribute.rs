//! Event attributes that can be used to search, sort, filter or modify events
//!
//! Attributes are usually given as strings by the user (`title`, `datetime`, `venue`, `description`, `priority`, `organization`, case-insensitive).
//! They are parsed once into an [`Attribute`], and their values are carried by a strongly typed [`AttributeValue`].

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::utils::{parse_date_time, parse_priority};
use crate::Event;


/// An attribute of an [`Event`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Title,
    DateTime,
    Venue,
    Description,
    Priority,
    Organization,
}

/// A typed value for an [`Attribute`]
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// Value of `title`, `venue`, `description` and `organization`
    Text(String),
    /// Value of `datetime`
    DateTime(NaiveDateTime),
    /// Value of `priority` (`true` means "high priority")
    Priority(bool),
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Title,
        Attribute::DateTime,
        Attribute::Venue,
        Attribute::Description,
        Attribute::Priority,
        Attribute::Organization,
    ];

    /// The (lowercase) key users refer to this attribute with
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Title => "title",
            Attribute::DateTime => "datetime",
            Attribute::Venue => "venue",
            Attribute::Description => "description",
            Attribute::Priority => "priority",
            Attribute::Organization => "organization",
        }
    }

    /// Whether this attribute can be changed once an event has been created
    pub fn is_modifiable(&self) -> bool {
        !matches!(self, Attribute::Organization)
    }

    /// Returns a copy of this attribute's value in `event`
    pub fn value_of(&self, event: &Event) -> AttributeValue {
        match self {
            Attribute::Title => AttributeValue::Text(event.title().to_string()),
            Attribute::DateTime => AttributeValue::DateTime(*event.date_time()),
            Attribute::Venue => AttributeValue::Text(event.venue().to_string()),
            Attribute::Description => AttributeValue::Text(event.description().to_string()),
            Attribute::Priority => AttributeValue::Priority(event.is_high_priority()),
            Attribute::Organization => AttributeValue::Text(event.organization().to_string()),
        }
    }

    /// Whether this attribute of `event` is exactly `value`.
    /// A value of the wrong type never matches.
    pub fn matches(&self, event: &Event, value: &AttributeValue) -> bool {
        match (self, value) {
            (Attribute::Title, AttributeValue::Text(t)) => event.title() == t,
            (Attribute::DateTime, AttributeValue::DateTime(dt)) => event.date_time() == dt,
            (Attribute::Venue, AttributeValue::Text(v)) => event.venue() == v,
            (Attribute::Description, AttributeValue::Text(d)) => event.description() == d,
            (Attribute::Priority, AttributeValue::Priority(p)) => event.is_high_priority() == *p,
            (Attribute::Organization, AttributeValue::Text(o)) => event.organization() == o,
            _ => false,
        }
    }

    /// Compare two events by this attribute only
    pub fn compare(&self, left: &Event, right: &Event) -> Ordering {
        match self {
            Attribute::Title => left.title().cmp(right.title()),
            Attribute::DateTime => Event::compare_date_time(left, right),
            Attribute::Venue => left.venue().cmp(right.venue()),
            Attribute::Description => left.description().cmp(right.description()),
            Attribute::Priority => left.is_high_priority().cmp(&right.is_high_priority()),
            Attribute::Organization => left.organization().cmp(right.organization()),
        }
    }

    /// Convert raw user input into a value of the type this attribute expects
    pub fn parse_value(&self, raw: &str) -> Result<AttributeValue> {
        match self {
            Attribute::DateTime => parse_date_time(raw).map(AttributeValue::DateTime),
            Attribute::Priority => parse_priority(raw).map(AttributeValue::Priority),
            Attribute::Title | Attribute::Venue | Attribute::Description | Attribute::Organization => {
                Ok(AttributeValue::Text(raw.to_string()))
            },
        }
    }

    /// Set this attribute of `event` to `value`.
    ///
    /// Returns `false` (and leaves `event` untouched) if the attribute cannot be modified, or if `value` has the wrong type
    pub(crate) fn apply(&self, event: &mut Event, value: AttributeValue) -> bool {
        if !self.is_modifiable() {
            return false;
        }
        match (self, value) {
            (Attribute::Title, AttributeValue::Text(t)) => event.set_title(t),
            (Attribute::DateTime, AttributeValue::DateTime(dt)) => event.set_date_time(dt),
            (Attribute::Venue, AttributeValue::Text(v)) => event.set_venue(v),
            (Attribute::Description, AttributeValue::Text(d)) => event.set_description(d),
            (Attribute::Priority, AttributeValue::Priority(p)) => event.set_priority(p),
            _ => return false,
        }
        true
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Attribute::ALL.iter()
            .find(|attr| attr.key() == key)
            .copied()
            .ok_or_else(|| Error::UnsupportedAttribute(s.to_string()))
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}
impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}
impl From<NaiveDateTime> for AttributeValue {
    fn from(dt: NaiveDateTime) -> Self {
        AttributeValue::DateTime(dt)
    }
}
impl From<bool> for AttributeValue {
    fn from(high_priority: bool) -> Self {
        AttributeValue::Priority(high_priority)
    }
}
