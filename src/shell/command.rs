//! Parsing of the commands typed in the shell

use crate::EventId;

pub const CREATE_EVENT_USAGE: &str = "Usage: create_event <title> <yyyy-MM-dd> <HH:mm> [venue] [description] [organization]";
pub const MODIFY_EVENT_USAGE: &str = "Usage: modify_event <event_id> <attribute> <new_value>";
pub const TOGGLE_PRIORITY_USAGE: &str = "Usage: toggle_priority <event_id>";
pub const DELETE_EVENT_USAGE: &str = "Usage: delete_event <event_id>";
pub const VIEW_EVENTS_USAGE: &str = "Usage: view_events <today|week|month|all> or view_events <attribute> <value>";
pub const SEARCH_EVENT_USAGE: &str = "Usage: search_event <attribute> <value>";
pub const SORT_EVENTS_USAGE: &str = "Usage: sort_events <attribute>";
pub const GENERATE_SUMMARY_USAGE: &str = "Usage: generate_summary [<start> to <end>]";

/// Every usage line, in the order `help` shows them
pub const ALL_USAGES: [&str; 8] = [
    CREATE_EVENT_USAGE,
    MODIFY_EVENT_USAGE,
    TOGGLE_PRIORITY_USAGE,
    DELETE_EVENT_USAGE,
    VIEW_EVENTS_USAGE,
    SEARCH_EVENT_USAGE,
    SORT_EVENTS_USAGE,
    GENERATE_SUMMARY_USAGE,
];


/// What `view_events` should show
#[derive(Clone, Debug, PartialEq)]
pub enum ViewFilter {
    /// Events happening today
    Today,
    /// Events happening today or in the next six days
    Week,
    /// Events happening in the current calendar month
    Month,
    /// Every event
    All,
    /// Events whose attribute is exactly the given (raw) value
    Attribute { attribute: String, value: String },
}

/// A command typed in the shell
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    CreateEvent {
        title: String,
        date: String,
        time: String,
        venue: Option<String>,
        description: Option<String>,
        organization: Option<String>,
    },
    ModifyEvent { event_id: EventId, attribute: String, new_value: String },
    TogglePriority(EventId),
    DeleteEvent(EventId),
    ViewEvents(ViewFilter),
    SearchEvent { attribute: String, value: String },
    SortEvents(String),
    /// Summarize everything, or only the events within a raw `<start> to <end>` range
    GenerateSummary(Option<String>),
    Help,
    Exit,
    /// Nothing was typed
    Empty,
    /// A known command with wrong arguments. Contains the usage line
    Usage(&'static str),
    /// An unknown command
    Unknown(String),
}

impl Command {
    /// Parses a line of input into a command.
    ///
    /// Arguments are separated by whitespace. Double quotes group several words into a single argument.
    /// The trailing words of `modify_event`, `search_event`, `view_events` and `generate_summary` are joined back together,
    /// so that e.g. `search_event datetime 2024-01-01 10:00` works without quotes.
    pub fn parse(input: &str) -> Self {
        let mut words = split_arguments(input);
        if words.is_empty() {
            return Command::Empty;
        }
        let verb = words.remove(0).to_lowercase();
        let args = words;

        match verb.as_str() {
            "create_event" => {
                if args.len() < 3 || args.len() > 6 {
                    return Command::Usage(CREATE_EVENT_USAGE);
                }
                let mut args = args.into_iter();
                match (args.next(), args.next(), args.next()) {
                    (Some(title), Some(date), Some(time)) => Command::CreateEvent {
                        title, date, time,
                        venue: args.next(),
                        description: args.next(),
                        organization: args.next(),
                    },
                    _ => Command::Usage(CREATE_EVENT_USAGE),
                }
            },
            "modify_event" => match split_head(args, 2) {
                Some((mut head, new_value)) => {
                    let attribute = head.remove(1);
                    let event_id = EventId::from(head.remove(0));
                    Command::ModifyEvent { event_id, attribute, new_value }
                },
                None => Command::Usage(MODIFY_EVENT_USAGE),
            },
            "toggle_priority" => match single(args) {
                Some(id) => Command::TogglePriority(EventId::from(id)),
                None => Command::Usage(TOGGLE_PRIORITY_USAGE),
            },
            "delete_event" => match single(args) {
                Some(id) => Command::DeleteEvent(EventId::from(id)),
                None => Command::Usage(DELETE_EVENT_USAGE),
            },
            "view_events" => {
                if args.len() == 1 {
                    return match args[0].to_lowercase().as_str() {
                        "today" => Command::ViewEvents(ViewFilter::Today),
                        "week" => Command::ViewEvents(ViewFilter::Week),
                        "month" => Command::ViewEvents(ViewFilter::Month),
                        "all" => Command::ViewEvents(ViewFilter::All),
                        _ => Command::Usage(VIEW_EVENTS_USAGE),
                    };
                }
                match split_head(args, 1) {
                    Some((mut head, value)) => Command::ViewEvents(ViewFilter::Attribute { attribute: head.remove(0), value }),
                    None => Command::Usage(VIEW_EVENTS_USAGE),
                }
            },
            "search_event" => match split_head(args, 1) {
                Some((mut head, value)) => Command::SearchEvent { attribute: head.remove(0), value },
                None => Command::Usage(SEARCH_EVENT_USAGE),
            },
            "sort_events" => match single(args) {
                Some(attribute) => Command::SortEvents(attribute),
                None => Command::Usage(SORT_EVENTS_USAGE),
            },
            "generate_summary" => {
                if args.is_empty() {
                    Command::GenerateSummary(None)
                } else {
                    Command::GenerateSummary(Some(args.join(" ")))
                }
            },
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => Command::Unknown(verb),
        }
    }
}

/// Returns the only argument, if there is exactly one
fn single(args: Vec<String>) -> Option<String> {
    if args.len() == 1 {
        args.into_iter().next()
    } else {
        None
    }
}

/// Splits the first `n` arguments from the others, that are joined into a single (non-empty) string
fn split_head(mut args: Vec<String>, n: usize) -> Option<(Vec<String>, String)> {
    if args.len() <= n {
        return None;
    }
    let tail = args.split_off(n);
    Some((args, tail.join(" ")))
}

/// Splits a line into whitespace-separated arguments, where double quotes group words together.
///
/// An unterminated quote extends until the end of the line. `""` is an empty argument.
pub fn split_arguments(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_argument = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_argument = true;
            },
            c if c.is_whitespace() && !in_quotes => {
                if has_argument {
                    args.push(std::mem::take(&mut current));
                    has_argument = false;
                }
            },
            c => {
                current.push(c);
                has_argument = true;
            },
        }
    }
    if has_argument {
        args.push(current);
    }
    args
}
