use jobdesk_core::{CreationStamp, FormField, Msg, SalaryType};
use thiserror::Error;

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show,
    Help,
    /// 1-based list number as displayed.
    Select(usize),
    Set(FormField, String),
    Type(SalaryType),
    Save,
    Update,
    Delete,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command {0:?}, type `help` for a list")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("{0:?} is not a job number")]
    BadNumber(String),
    #[error("unknown field {0:?}, expected company, title, location, min or max")]
    UnknownField(String),
    #[error("unknown salary type {0:?}, expected hourly, yearly or n/a")]
    UnknownSalaryType(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "select" | "sel" => Command::Select(parse_number(rest)?),
        "set" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim()),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(InputError::MissingArgument("set"));
            }
            Command::Set(parse_field(name)?, value.to_string())
        }
        "type" => Command::Type(parse_salary_type(rest)?),
        "save" | "add" => Command::Save,
        "update" => Command::Update,
        "delete" | "del" => Command::Delete,
        "quit" | "exit" => Command::Quit,
        _ => return Err(InputError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

impl Command {
    /// Message for the state machine, or `None` for view-only commands.
    pub fn to_msg(&self) -> Option<Msg> {
        match self {
            Command::List | Command::Show | Command::Help => None,
            Command::Select(number) => Some(Msg::RecordSelected {
                index: number - 1,
            }),
            Command::Set(field, value) => Some(Msg::FieldEdited {
                field: *field,
                value: value.clone(),
            }),
            Command::Type(kind) => Some(Msg::SalaryTypeChosen(*kind)),
            Command::Save => Some(Msg::SaveClicked {
                stamp: CreationStamp::now(),
            }),
            Command::Update => Some(Msg::UpdateClicked),
            Command::Delete => Some(Msg::DeleteClicked),
            Command::Quit => Some(Msg::CloseRequested),
        }
    }
}

fn parse_number(text: &str) -> Result<usize, InputError> {
    if text.is_empty() {
        return Err(InputError::MissingArgument("select"));
    }
    match text.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(InputError::BadNumber(text.to_string())),
    }
}

fn parse_field(name: &str) -> Result<FormField, InputError> {
    match name.to_ascii_lowercase().as_str() {
        "company" => Ok(FormField::Company),
        "title" => Ok(FormField::JobTitle),
        "location" => Ok(FormField::Location),
        "min" => Ok(FormField::SalaryMin),
        "max" => Ok(FormField::SalaryMax),
        _ => Err(InputError::UnknownField(name.to_string())),
    }
}

fn parse_salary_type(text: &str) -> Result<SalaryType, InputError> {
    if text.is_empty() {
        return Err(InputError::MissingArgument("type"));
    }
    match text.to_ascii_lowercase().as_str() {
        "hourly" => Ok(SalaryType::Hourly),
        "yearly" => Ok(SalaryType::Yearly),
        "n/a" | "na" | "none" => Ok(SalaryType::NotApplicable),
        _ => Err(InputError::UnknownSalaryType(text.to_string())),
    }
}
