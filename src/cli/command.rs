//! The command vocabulary of the assistant.

use std::str::FromStr;

/// A recognized command word.
///
/// Words are matched case-insensitively. Argument shapes are checked by the
/// individual handlers, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `hello` - greet the user
    Hello,
    /// `add NAME PHONE` - create a contact or add a phone to an existing one
    Add,
    /// `change NAME OLD NEW` - replace a stored phone
    Change,
    /// `phone NAME` - show a contact's phones
    Phone,
    /// `all` - list every contact
    All,
    /// `add-birthday NAME DD.MM.YYYY` - set a contact's birthday
    AddBirthday,
    /// `show-birthday NAME` - show a stored birthday
    ShowBirthday,
    /// `birthdays [DAYS]` - contacts to congratulate within the window
    Birthdays,
    /// `close` - leave the session
    Close,
    /// `exit` - leave the session
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" => Ok(Command::Close),
            "exit" => Ok(Command::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// Split an input line into its command word and arguments.
///
/// Returns `None` when the line is blank or starts with an unknown word;
/// the loop answers both with the same invalid-command reply.
pub fn parse_input(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.parse::<Command>().ok()?;
    Some((command, words.collect()))
}
