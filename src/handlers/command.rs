use crate::core::error::ActionError;
use crate::handlers::sort_toggle::SortToggle;
use crate::models::action::{Action, SortDirection, SortField};
use std::str::FromStr;

/// A line of user input at the leaderboard prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Live typing into the search box, misses stay quiet
    Type(String),
    /// Explicit search button press
    Search(String),
    /// "Sort by" menu selection, an explicit direction bypasses the toggle
    Sort {
        field: SortField,
        direction: Option<SortDirection>,
    },
    /// Hide the error banner
    Dismiss,
    /// Re-render without changing state
    Show,
    Quit,
}

impl Command {
    /// Translate into a reducer action, `None` for commands that only affect the session
    pub fn into_action(self, toggle: &mut SortToggle) -> Option<Action<'static>> {
        match self {
            Command::Type(text) => Some(Action::search_suppressed(text)),
            Command::Search(text) => Some(Action::search(text)),
            Command::Sort {
                field,
                direction: Some(direction),
            } => Some(Action::sort(field, direction)),
            Command::Sort {
                field,
                direction: None,
            } => Some(toggle.next(field)),
            Command::Dismiss => Some(Action::set_error("")),
            Command::Show | Command::Quit => None,
        }
    }
}

impl FromStr for Command {
    type Err = ActionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim_end(), ""),
        };

        match verb {
            "type" => Ok(Command::Type(rest.to_string())),
            "search" => Ok(Command::Search(rest.to_string())),
            "sort" => {
                let mut args = rest.split_whitespace();
                let field = args
                    .next()
                    .ok_or_else(|| ActionError::MissingArgument("sort".to_string()))?
                    .parse()?;
                let direction = args.next().map(str::parse).transpose()?;
                Ok(Command::Sort { field, direction })
            }
            "dismiss" => Ok(Command::Dismiss),
            "" | "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ActionError::UnknownCommand(other.to_string())),
        }
    }
}
