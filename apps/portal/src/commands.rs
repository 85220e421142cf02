//! Terminal commands understood by the portal.

use thiserror::Error;

use crate::filter::{FilterParseError, SalaryBand, WorkMode};
use crate::pagination::AdvanceTrigger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Advance(AdvanceTrigger),
    /// 1-based index into the filtered list.
    Save(usize),
    Links(usize),
    Salary(SalaryBand),
    Location(String),
    Mode(WorkMode),
    Retry,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' expects a card number")]
    MissingIndex(&'static str),

    #[error(transparent)]
    Filter(#[from] FilterParseError),
}

pub const HELP: &str = "\
commands:
  more              reveal the next page
  scroll            same as more, as if the end of the list came into view
  save <n>          save card n to favorites
  links <n>         show job board searches for card n
  salary <band>     3-6 | 6-10 | 10-20 | any
  location <text>   substring match, empty for India
  mode <mode>       remote | hybrid | onsite | any
  retry             reload after an error
  show              print the current list
  quit";

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    let (verb, arg) = match input.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (input, ""),
    };

    match verb {
        "more" | "m" => Ok(Command::Advance(AdvanceTrigger::LoadMore)),
        "scroll" => Ok(Command::Advance(AdvanceTrigger::SentinelVisible)),
        "save" => index(arg, "save").map(Command::Save),
        "links" => index(arg, "links").map(Command::Links),
        "salary" => Ok(Command::Salary(any_or(arg).parse()?)),
        "location" => Ok(Command::Location(arg.to_string())),
        "mode" => Ok(Command::Mode(any_or(arg).parse()?)),
        "retry" => Ok(Command::Retry),
        "" | "show" | "ls" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn index(arg: &str, verb: &'static str) -> Result<usize, CommandError> {
    arg.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or(CommandError::MissingIndex(verb))
}

/// "any" clears a filter, like picking the empty option.
fn any_or(arg: &str) -> &str {
    if arg.eq_ignore_ascii_case("any") {
        ""
    } else {
        arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_triggers_parse_to_advance() {
        assert_eq!(
            parse_command("more"),
            Ok(Command::Advance(AdvanceTrigger::LoadMore))
        );
        assert_eq!(
            parse_command("  scroll "),
            Ok(Command::Advance(AdvanceTrigger::SentinelVisible))
        );
    }

    #[test]
    fn test_save_requires_positive_index() {
        assert_eq!(parse_command("save 3"), Ok(Command::Save(3)));
        assert_eq!(
            parse_command("save 0"),
            Err(CommandError::MissingIndex("save"))
        );
        assert_eq!(parse_command("links"), Err(CommandError::MissingIndex("links")));
    }

    #[test]
    fn test_filter_commands() {
        assert_eq!(
            parse_command("salary 6-10"),
            Ok(Command::Salary(SalaryBand::From6To10))
        );
        assert_eq!(parse_command("salary any"), Ok(Command::Salary(SalaryBand::Any)));
        assert_eq!(parse_command("mode remote"), Ok(Command::Mode(WorkMode::Remote)));
        assert_eq!(
            parse_command("location Navi Mumbai"),
            Ok(Command::Location("Navi Mumbai".into()))
        );
        assert_eq!(parse_command("location"), Ok(Command::Location(String::new())));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            parse_command("salary 1-2"),
            Err(CommandError::Filter(FilterParseError::SalaryBand(_)))
        ));
        assert_eq!(
            parse_command("jump"),
            Err(CommandError::Unknown("jump".into()))
        );
    }

    #[test]
    fn test_blank_line_shows_list() {
        assert_eq!(parse_command(""), Ok(Command::Show));
    }
}
