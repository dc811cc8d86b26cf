//! The state of a shell session, and how it executes commands

use std::error::Error;
use std::io::Write;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};

use crate::attribute::{Attribute, AttributeValue};
use crate::cli::OutputFormat;
use crate::config;
use crate::shell::command::{Command, ViewFilter, ALL_USAGES};
use crate::utils::{parse_date_and_time, parse_date_range};
use crate::{Event, EventCollection, EventSummary};


/// Whether the shell should keep reading commands
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a shell session works on.
///
/// A session owns its events: they are created when the session starts, and dropped when it ends.
pub struct Session {
    events: EventCollection,
    format: OutputFormat,
    /// Returns the current local date and time. Used to resolve `today`, `week` and `month`
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with no event
    pub fn new() -> Self {
        Self {
            events: EventCollection::new(),
            format: OutputFormat::default(),
            clock: local_now,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Use another clock than the local system time
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn events(&self) -> &EventCollection {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventCollection {
        &mut self.events
    }

    /// Execute a command, and write its results to `out`.
    ///
    /// Errors are either invalid user input (e.g. a malformed date) or I/O errors on `out`. In both cases, nothing has been modified.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, Box<dyn Error>> {
        log::trace!("Handling {:?}", command);
        match command {
            Command::CreateEvent { title, date, time, venue, description, organization } => {
                let date_time = parse_date_and_time(&date, &time)?;
                let organization = organization.unwrap_or_else(config::default_organization);
                let mut event = Event::new(title, date_time, organization);
                if let Some(venue) = venue {
                    event.set_venue(venue);
                }
                if let Some(description) = description {
                    event.set_description(description);
                }

                let id = event.id().clone();
                if self.events.add(event) {
                    log::info!("Created event {}", id);
                    writeln!(out, "Event created successfully. ID: {}", id)?;
                } else {
                    writeln!(out, "Event with this ID already exists.")?;
                }
            },

            Command::ModifyEvent { event_id, attribute, new_value } => {
                let modified = match attribute.parse::<Attribute>() {
                    Ok(attr) => {
                        let value = attr.parse_value(&new_value)?;
                        self.events.modify(&event_id, attr, value)
                    },
                    // This will be refused, but let the collection decide
                    Err(_) => self.events.modify_event(&event_id, &attribute, AttributeValue::Text(new_value)),
                };
                if modified {
                    log::info!("Modified {} of event {}", attribute, event_id);
                    writeln!(out, "Event modified successfully.")?;
                } else {
                    writeln!(out, "Failed to modify event. Check the event ID or attribute.")?;
                }
            },

            Command::TogglePriority(event_id) => {
                if self.events.toggle_priority(&event_id) {
                    let label = self.events.get_event_by_id(&event_id)
                        .map(|event| event.priority_label())
                        .unwrap_or("Normal");
                    writeln!(out, "Priority of event {} is now {}.", event_id, label)?;
                } else {
                    writeln!(out, "Event not found.")?;
                }
            },

            Command::DeleteEvent(event_id) => {
                if self.events.remove(&event_id) {
                    log::info!("Deleted event {}", event_id);
                    writeln!(out, "Event deleted successfully.")?;
                } else {
                    writeln!(out, "Event not found.")?;
                }
            },

            Command::ViewEvents(filter) => self.view_events(filter, out)?,

            Command::SearchEvent { attribute, value } => {
                let value = typed_value(&attribute, &value)?;
                let ids = self.events.search(&attribute, &value);
                let found: Vec<&Event> = ids.iter()
                    .filter_map(|id| self.events.get_event_by_id(id))
                    .collect();
                if found.is_empty() {
                    writeln!(out, "No events found.")?;
                } else {
                    writeln!(out, "Found events:")?;
                    self.write_events(&found, out)?;
                }
            },

            Command::SortEvents(attribute) => {
                let sorted = self.events.sort(&attribute)?;
                writeln!(out, "Sorted events:")?;
                self.write_events(&sorted, out)?;
            },

            Command::GenerateSummary(range) => {
                let summary = match range {
                    None => EventSummary::new(&self.events),
                    Some(range) => {
                        let (start, end) = parse_date_range(&range)?;
                        EventSummary::with_range(&self.events, start, end)
                    },
                };
                match self.format {
                    OutputFormat::Text => write!(out, "{}", summary)?,
                    OutputFormat::Json => {
                        serde_json::to_writer_pretty(&mut *out, &summary)?;
                        writeln!(out)?;
                    },
                }
            },

            Command::Help => {
                writeln!(out, "Available commands:")?;
                for usage in ALL_USAGES.iter() {
                    writeln!(out, "  {}", usage.trim_start_matches("Usage: "))?;
                }
                writeln!(out, "  help")?;
                writeln!(out, "  exit")?;
                writeln!(out, "Attributes: {}", attribute_keys())?;
            },

            Command::Exit => {
                writeln!(out, "Exiting...")?;
                return Ok(Flow::Exit);
            },

            Command::Empty => {},

            Command::Usage(usage) => writeln!(out, "{}", usage)?,

            Command::Unknown(verb) => {
                log::debug!("Unknown command {:?}", verb);
                writeln!(out, "Unknown command. Please try again.")?;
            },
        }

        Ok(Flow::Continue)
    }

    fn view_events<W: Write>(&self, filter: ViewFilter, out: &mut W) -> Result<(), Box<dyn Error>> {
        let today = (self.clock)().date();
        let (start, end) = match filter {
            ViewFilter::All => {
                let all = self.events.sorted_by(Attribute::DateTime);
                return self.write_found(&all, out);
            },
            ViewFilter::Attribute { attribute, value } => {
                let value = typed_value(&attribute, &value)?;
                return match self.format {
                    OutputFormat::Text => {
                        if self.events.view(out, &attribute, &value)? == 0 {
                            writeln!(out, "No events found.")?;
                        }
                        Ok(())
                    },
                    OutputFormat::Json => {
                        let found = match attribute.parse::<Attribute>() {
                            Ok(attr) => self.events.filter(attr, &value),
                            Err(_) => Vec::new(),
                        };
                        self.write_events(&found, out)
                    },
                };
            },
            ViewFilter::Today => (today, today),
            ViewFilter::Week => (today, today + Duration::days(6)),
            ViewFilter::Month => month_of(today).ok_or("Unable to compute the current month")?,
        };

        let start = start.and_hms_opt(0, 0, 0).ok_or("Invalid start of day")?;
        let end = end.and_hms_opt(23, 59, 59).ok_or("Invalid end of day")?;
        let found = self.events.between(&start, &end);
        self.write_found(&found, out)
    }

    /// Write events, or a message when there are none
    fn write_found<W: Write>(&self, events: &[&Event], out: &mut W) -> Result<(), Box<dyn Error>> {
        if events.is_empty() && self.format == OutputFormat::Text {
            writeln!(out, "No events found.")?;
            return Ok(());
        }
        self.write_events(events, out)
    }

    fn write_events<W: Write>(&self, events: &[&Event], out: &mut W) -> Result<(), Box<dyn Error>> {
        match self.format {
            OutputFormat::Text => {
                for event in events {
                    event.display(out)?;
                }
            },
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, events)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}

/// Convert a raw value according to the attribute it is compared to.
/// Values of unknown attributes are kept as text, the collection will ignore them anyway.
fn typed_value(attribute: &str, raw: &str) -> Result<AttributeValue, Box<dyn Error>> {
    match attribute.parse::<Attribute>() {
        Ok(attr) => Ok(attr.parse_value(raw)?),
        Err(_) => Ok(AttributeValue::from(raw)),
    }
}

/// First and last days of the month `day` is in
fn month_of(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)?;
    let first_of_next = if day.month() == 12 {
        NaiveDate::from_ymd_opt(day.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)?
    };
    Some((first, first_of_next.pred_opt()?))
}

fn attribute_keys() -> String {
    Attribute::ALL.iter()
        .map(|attr| attr.key())
        .collect::<Vec<_>>()
        .join(", ")
}


#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_month_of() {
        assert_eq!(month_of(day("2024-02-10")), Some((day("2024-02-01"), day("2024-02-29"))));
        assert_eq!(month_of(day("2023-12-31")), Some((day("2023-12-01"), day("2023-12-31"))));
    }

    #[test]
    fn test_typed_value() {
        assert_eq!(typed_value("PRIORITY", "high").unwrap(), AttributeValue::Priority(true));
        assert_eq!(typed_value("colour", "red").unwrap(), AttributeValue::from("red"));
        assert!(typed_value("datetime", "soon").is_err());
    }

    #[test]
    fn test_unknown_attribute_modification_is_refused() {
        let mut session = Session::new();
        let mut out = Vec::new();
        session.handle(Command::parse("create_event Demo 2024-01-01 10:00"), &mut out).unwrap();
        let id = session.events().events().next().unwrap().id().clone();

        let mut out = Vec::new();
        let cmd = Command::ModifyEvent { event_id: id, attribute: "colour".to_string(), new_value: "red".to_string() };
        assert_eq!(session.handle(cmd, &mut out).unwrap(), Flow::Continue);
        assert_eq!(String::from_utf8(out).unwrap(), "Failed to modify event. Check the event ID or attribute.\n");
    }
}
