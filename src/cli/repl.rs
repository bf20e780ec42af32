//! The interactive prompt loop.

use crate::cli::command::{parse_input, Command};
use crate::cli::handlers;
use crate::config::Config;
use crate::models::AddressBook;
use anyhow::Result;
use dialoguer::Input;
use tracing::debug;

/// One conversational turn: the reply to `line`, or `None` when the user
/// asked to leave the session.
pub fn respond(line: &str, book: &mut AddressBook, config: &Config) -> Option<String> {
    let (command, args) = match parse_input(line) {
        Some(parsed) => parsed,
        None => {
            debug!("Unrecognized input: {:?}", line);
            return Some("Invalid command.".to_string());
        }
    };

    debug!("Dispatching {:?} with {} argument(s)", command, args.len());

    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Close | Command::Exit => return None,
        Command::Add => handlers::reply(handlers::add_contact(&args, book)),
        Command::Change => handlers::reply(handlers::change_contact(&args, book)),
        Command::Phone => handlers::reply(handlers::show_phone(&args, book)),
        Command::All => handlers::reply(handlers::show_all(&args, book)),
        Command::AddBirthday => handlers::reply(handlers::add_birthday(&args, book)),
        Command::ShowBirthday => handlers::reply(handlers::show_birthday(&args, book)),
        Command::Birthdays => handlers::reply(handlers::upcoming_birthdays(
            &args,
            book,
            config.upcoming_window_days,
        )),
    };

    Some(reply)
}

/// Run the prompt loop over `book` until the user leaves.
///
/// Reads one line at a time, replies on stdout, and returns once the user
/// enters `close` or `exit` or the input stream ends.
pub fn run(book: &mut AddressBook, config: &Config) -> Result<()> {
    println!("Welcome to the assistant bot!");

    loop {
        let line: String = match Input::new()
            .with_prompt("Enter a command")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(e) => {
                // Ctrl-D or a closed terminal; leave like `exit` would.
                debug!("Input stream ended: {}", e);
                break;
            }
        };

        match respond(&line, book, config) {
            Some(reply) => println!("{}", reply),
            None => break,
        }
    }

    println!("Good bye!");
    Ok(())
}
