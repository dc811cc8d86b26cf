//! This crate manages calendar events in memory.
//!
//! Events are stored in an [`EventCollection`], that guarantees each event ID appears at most once,
//! and that can search, sort, filter and modify events by [`Attribute`](attribute::Attribute). \
//! An [`EventSummary`] reports figures over a snapshot of a collection.
//!
//! The [`shell`] module provides a line-oriented command interface on top of these, used by the `eventbook` binary.

pub mod attribute;
pub use attribute::{Attribute, AttributeValue};
mod event;
pub use event::{Event, EventId};
mod collection;
pub use collection::EventCollection;
mod summary;
pub use summary::EventSummary;
pub mod error;
pub use error::Error;

pub mod shell;
pub mod cli;

pub mod config;
pub mod utils;
