//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Venue given to events that are created without one
pub const DEFAULT_VENUE: &str = "TBD";

/// Description given to events that are created without one
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// The `strftime` pattern used to display dates and times (e.g. `2024-01-31 18:30`)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Organization assigned to events created from the command interface when none is given.
/// Feel free to override it when initing this library.
pub static DEFAULT_ORGANIZATION: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Unknown".to_string())));

/// Product name, shown in the shell banner.
/// Feel free to override it when initing this library.
pub static PRODUCT_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("EventBook".to_string())));

/// Returns the current default organization
pub fn default_organization() -> String {
    match DEFAULT_ORGANIZATION.lock() {
        Ok(org) => org.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Override the organization assigned to newly created events
pub fn set_default_organization(name: &str) {
    let mut org = match DEFAULT_ORGANIZATION.lock() {
        Ok(org) => org,
        Err(poisoned) => poisoned.into_inner(),
    };
    *org = name.to_string();
}

/// Returns the current product name
pub fn product_name() -> String {
    match PRODUCT_NAME.lock() {
        Ok(name) => name.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
