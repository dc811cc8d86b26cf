//! Tests of the shell, driven by scripted input

use std::io::Cursor;

use chrono::{NaiveDate, NaiveDateTime};

use eventbook::cli::OutputFormat;
use eventbook::shell::{self, Command, Flow, Session};
use eventbook::EventId;


fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

fn session() -> Session {
    Session::new().with_clock(fixed_now)
}

/// Run a whole script, and return everything the shell wrote
fn run_script(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    shell::run(session, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Execute a single command line
fn exec(session: &mut Session, line: &str) -> String {
    let mut out = Vec::new();
    match session.handle(Command::parse(line), &mut out) {
        Ok(_) => String::from_utf8(out).unwrap(),
        Err(err) => format!("Error: {}", err),
    }
}

/// Create an event and return its ID
fn create(session: &mut Session, line: &str) -> EventId {
    let output = exec(session, line);
    let id = output.trim()
        .strip_prefix("Event created successfully. ID: ")
        .unwrap_or_else(|| panic!("Unexpected output {:?}", output));
    EventId::from(id)
}

#[test]
fn create_and_display() {
    let mut session = session();
    let id = create(&mut session, r#"create_event "Team lunch" 2024-01-10 12:30 Cafeteria "Monthly lunch" "ABC Corp""#);

    let event = session.events().get_event_by_id(&id).unwrap();
    assert_eq!(event.title(), "Team lunch");
    assert_eq!(event.venue(), "Cafeteria");
    assert_eq!(event.description(), "Monthly lunch");
    assert_eq!(event.organization(), "ABC Corp");

    let output = exec(&mut session, "view_events today");
    assert!(output.contains("Event Title: Team lunch\nOrganizer: ABC Corp\nVenue: Cafeteria\nDate and Time: 2024-01-10 12:30\n"));
    assert!(output.contains(&format!("EventID: {}", id)));
}

#[test]
fn create_with_defaults() {
    let mut session = session();
    let id = create(&mut session, "create_event Standup 2024-01-11 09:00");
    let event = session.events().get_event_by_id(&id).unwrap();
    assert_eq!(event.venue(), "TBD");
    assert_eq!(event.description(), "No description");
    assert!(!event.is_high_priority());
}

#[test]
fn invalid_input_is_reported() {
    let mut session = session();
    assert_eq!(exec(&mut session, "create_event Standup tomorrow 09:00"), "Error: Invalid date/time 'tomorrow 09:00' (expected yyyy-MM-dd HH:mm)");
    assert_eq!(exec(&mut session, "create_event Standup"), format!("{}\n", shell::command::CREATE_EVENT_USAGE));
    assert_eq!(exec(&mut session, "make_coffee"), "Unknown command. Please try again.\n");
    assert!(session.events().is_empty());
}

#[test]
fn modify_toggle_and_delete() {
    let mut session = session();
    let id = create(&mut session, "create_event Standup 2024-01-11 09:00");

    assert_eq!(exec(&mut session, &format!("modify_event {} venue Main Hall", id)), "Event modified successfully.\n");
    assert_eq!(exec(&mut session, &format!("modify_event {} datetime 2024-01-12 09:30", id)), "Event modified successfully.\n");
    assert_eq!(exec(&mut session, &format!("modify_event {} colour red", id)), "Failed to modify event. Check the event ID or attribute.\n");
    assert_eq!(exec(&mut session, &format!("modify_event {} organization XYZ Inc", id)), "Failed to modify event. Check the event ID or attribute.\n");
    assert!(exec(&mut session, &format!("modify_event {} priority sometimes", id)).starts_with("Error: Invalid priority"));
    assert_eq!(exec(&mut session, "modify_event EV-none venue Main Hall"), "Failed to modify event. Check the event ID or attribute.\n");

    let event = session.events().get_event_by_id(&id).unwrap();
    assert_eq!(event.venue(), "Main Hall");
    assert_eq!(event.date_time(), &NaiveDate::from_ymd_opt(2024, 1, 12).unwrap().and_hms_opt(9, 30, 0).unwrap());
    assert_eq!(event.organization(), "Unknown");
    assert!(!event.is_high_priority());

    assert_eq!(exec(&mut session, &format!("toggle_priority {}", id)), format!("Priority of event {} is now High.\n", id));
    assert!(session.events().get_event_by_id(&id).unwrap().is_high_priority());

    assert_eq!(exec(&mut session, &format!("delete_event {}", id)), "Event deleted successfully.\n");
    assert_eq!(exec(&mut session, &format!("delete_event {}", id)), "Event not found.\n");
    assert_eq!(exec(&mut session, &format!("toggle_priority {}", id)), "Event not found.\n");
}

#[test]
fn search_sort_and_view_windows() {
    let mut session = session();
    create(&mut session, r#"create_event Retro 2024-01-12 16:00 "Room 1" "" "XYZ Inc""#);
    create(&mut session, r#"create_event Kickoff 2024-01-10 09:00 "Room 2" "" "ABC Corp""#);
    create(&mut session, r#"create_event Offsite 2024-01-25 09:00 "Lake" "" "XYZ Inc""#);
    create(&mut session, r#"create_event Planning 2024-02-01 09:00 "Room 1" "" "XYZ Inc""#);

    let output = exec(&mut session, r#"search_event organization XYZ Inc"#);
    assert!(output.starts_with("Found events:\n"));
    assert_eq!(output.matches("Event Title:").count(), 3);
    assert_eq!(exec(&mut session, "search_event venue Nowhere"), "No events found.\n");
    assert_eq!(exec(&mut session, "search_event sponsor XYZ Inc"), "No events found.\n");

    let output = exec(&mut session, "sort_events datetime");
    let kickoff = output.find("Kickoff").unwrap();
    let retro = output.find("Retro").unwrap();
    let offsite = output.find("Offsite").unwrap();
    let planning = output.find("Planning").unwrap();
    assert!(kickoff < retro && retro < offsite && offsite < planning);
    assert_eq!(exec(&mut session, "sort_events bogus_attribute"), "Error: Invalid attribute: bogus_attribute");

    let today = exec(&mut session, "view_events today");
    assert_eq!(today.matches("Event Title:").count(), 1);
    assert!(today.contains("Kickoff"));

    let week = exec(&mut session, "view_events week");
    assert_eq!(week.matches("Event Title:").count(), 2);

    let month = exec(&mut session, "view_events month");
    assert_eq!(month.matches("Event Title:").count(), 3);
    assert!(!month.contains("Planning"));

    assert_eq!(exec(&mut session, "view_events all").matches("Event Title:").count(), 4);

    let by_venue = exec(&mut session, r#"view_events venue "Room 1""#);
    assert_eq!(by_venue.matches("Event Title:").count(), 2);
    assert_eq!(exec(&mut session, "view_events venue Attic"), "No events found.\n");
}

#[test]
fn summaries() {
    let mut session = session();
    let id = create(&mut session, r#"create_event Kickoff 2024-01-10 09:00 Hall "" "ABC Corp""#);
    create(&mut session, r#"create_event Retro 2024-01-12 16:00 Hall "" "XYZ Inc""#);
    create(&mut session, r#"create_event Planning 2024-02-01 09:00 Hall "" "XYZ Inc""#);
    exec(&mut session, &format!("toggle_priority {}", id));

    assert_eq!(
        exec(&mut session, "generate_summary"),
        "Total number of events: 3\n\
         Number of organizers: 2\n\
         High priority events: 1\n\
         List of organizers: [ABC Corp, XYZ Inc]\n"
    );
    assert_eq!(
        exec(&mut session, "generate_summary 2024-01-11 to 2024-01-31"),
        "Total number of events: 1\n\
         Number of organizers: 1\n\
         High priority events: 0\n\
         List of organizers: [XYZ Inc]\n"
    );
    assert_eq!(
        exec(&mut session, "generate_summary 2023-01-01 to 2023-12-31"),
        "Total number of events: 0\n\
         Number of organizers: 0\n\
         High priority events: 0\n\
         List of organizers: []\n"
    );
    assert!(exec(&mut session, "generate_summary last week").starts_with("Error: Invalid date range"));
}

#[test]
fn json_output() {
    let mut session = session().with_format(OutputFormat::Json);
    create(&mut session, r#"create_event Kickoff 2024-01-10 09:00 Hall "" "ABC Corp""#);

    let listing: serde_json::Value = serde_json::from_str(&exec(&mut session, "sort_events title").replacen("Sorted events:\n", "", 1)).unwrap();
    assert_eq!(listing[0]["title"], "Kickoff");
    assert_eq!(listing[0]["organization"], "ABC Corp");
    assert_eq!(listing[0]["high_priority"], false);

    let summary: serde_json::Value = serde_json::from_str(&exec(&mut session, "generate_summary")).unwrap();
    assert_eq!(summary["total"], 1);
    assert_eq!(summary["organizers"][0], "ABC Corp");
}

#[test]
fn scripted_session() {
    let mut session = session();
    let output = run_script(&mut session, "create_event Kickoff 2024-01-10 09:00\n\
        sort_events nope\n\
        \n\
        help\n\
        exit\n\
        create_event Ignored 2024-01-10 09:00\n");

    assert!(output.starts_with("EventBook shell."));
    assert!(output.contains("Event created successfully. ID: "));
    assert!(output.contains("Error: Invalid attribute: nope\n"));
    assert!(output.contains("Available commands:\n"));
    assert!(output.ends_with("Exiting...\n"));
    assert_eq!(session.events().len(), 1);
}

#[test]
fn end_of_input_ends_the_session() {
    let mut session = session();
    let output = run_script(&mut session, "create_event Kickoff 2024-01-10 09:00");
    assert_eq!(session.events().len(), 1);
    assert!(output.ends_with("> "));
}

#[test]
fn exit_flow() {
    let mut session = session();
    let mut out = Vec::new();
    assert_eq!(session.handle(Command::Exit, &mut out).unwrap(), Flow::Exit);
    assert_eq!(session.handle(Command::Empty, &mut out).unwrap(), Flow::Continue);
}
