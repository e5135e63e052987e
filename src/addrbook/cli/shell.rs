//! Interactive command loop.
//!
//! Reads a command name, asks for its parameters through the UI port and calls
//! one `AddressBook` operation. Bad input (unknown field, malformed date) is
//! shown and the loop goes on; storage and log failures end the session.

use addrbook::activity::ActivityLog;
use addrbook::api::AddressBook;
use addrbook::commands::CmdMessage;
use addrbook::error::{AddressBookError, Result};
use addrbook::model::{parse_birthday, parse_phones, Contact, ContactField, SearchField};
use addrbook::store::BookStore;
use addrbook::ui::Ui;
use std::path::{Path, PathBuf};

pub const MSG_INVALID_COMMAND: &str = "Invalid command. Please try again.";
const HISTORY_LIMIT: usize = 20;

const HELP: [&str; 12] = [
    "Commands:",
    "add - Add a new contact",
    "search - Search for contacts",
    "edit - Edit a contact",
    "remove - Remove a contact",
    "list - Show all contacts",
    "birthdays - Show birthdays this week",
    "history - Show recent activity",
    "save - Save the address book",
    "load - Load the address book",
    "help - Show this list",
    "quit - Quit the program",
];

enum Step {
    Continue,
    Quit,
}

pub fn run<S, L, U>(book: &mut AddressBook<S, L, U>, default_book: &Path) -> Result<()>
where
    S: BookStore,
    L: ActivityLog,
    U: Ui,
{
    show_help(book);
    loop {
        let Some(command) = book.ui_mut().get_input("Enter a command: ")? else {
            return Ok(());
        };
        match dispatch(book, command.trim(), default_book) {
            Ok(Step::Continue) => {}
            Ok(Step::Quit) => return Ok(()),
            Err(e) if e.is_validation() => {
                book.ui_mut()
                    .display_message(&CmdMessage::error(e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }
}

fn dispatch<S, L, U>(book: &mut AddressBook<S, L, U>, command: &str, default_book: &Path) -> Result<Step>
where
    S: BookStore,
    L: ActivityLog,
    U: Ui,
{
    match command {
        "add" => add(book),
        "search" => search(book),
        "edit" => edit(book),
        "remove" => remove(book),
        "list" => book.list().map(|_| Step::Continue),
        "birthdays" | "congratulate" => book.congratulate().map(|_| Step::Continue),
        "history" => book.history(Some(HISTORY_LIMIT)).map(|_| Step::Continue),
        "save" => save(book, default_book),
        "load" => load(book, default_book),
        "help" => {
            show_help(book);
            Ok(Step::Continue)
        }
        "quit" | "exit" => Ok(Step::Quit),
        "" => Ok(Step::Continue),
        other => {
            log::debug!("unknown shell command: {}", other);
            book.ui_mut()
                .display_message(&CmdMessage::error(MSG_INVALID_COMMAND));
            Ok(Step::Continue)
        }
    }
}

fn show_help<S: BookStore, L: ActivityLog, U: Ui>(book: &mut AddressBook<S, L, U>) {
    for line in HELP {
        book.ui_mut().display_message(&CmdMessage::info(line));
    }
}

fn add<S: BookStore, L: ActivityLog, U: Ui>(book: &mut AddressBook<S, L, U>) -> Result<Step> {
    let ui = book.ui_mut();
    let Some(name) = ui.get_input("Enter name: ")? else {
        return Ok(Step::Quit);
    };
    if name.trim().is_empty() {
        return Err(AddressBookError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }
    let Some(phones) = ui.get_input("Enter phones (separated by comma): ")? else {
        return Ok(Step::Quit);
    };
    let Some(birthday) = ui.get_input("Enter birthday (YYYY-MM-DD): ")? else {
        return Ok(Step::Quit);
    };
    let birthday = parse_birthday(&birthday)?;
    let Some(email) = ui.get_input("Enter email: ")? else {
        return Ok(Step::Quit);
    };
    let Some(status) = ui.get_input("Enter status: ")? else {
        return Ok(Step::Quit);
    };
    let Some(note) = ui.get_input("Enter note: ")? else {
        return Ok(Step::Quit);
    };

    let contact = Contact::new(name)
        .with_phones(parse_phones(&phones))
        .with_birthday(birthday)
        .with_email(email)
        .with_status(status)
        .with_note(note);
    book.add(contact)?;
    Ok(Step::Continue)
}

fn search<S: BookStore, L: ActivityLog, U: Ui>(book: &mut AddressBook<S, L, U>) -> Result<Step> {
    let ui = book.ui_mut();
    let Some(pattern) = ui.get_input("Enter search pattern: ")? else {
        return Ok(Step::Quit);
    };
    let Some(field) = ui.get_input("Enter search category (name, email, status, note): ")? else {
        return Ok(Step::Quit);
    };
    let field = if field.trim().is_empty() {
        SearchField::default()
    } else {
        field.parse()?
    };
    book.search(&pattern, field)?;
    Ok(Step::Continue)
}

fn edit<S: BookStore, L: ActivityLog, U: Ui>(book: &mut AddressBook<S, L, U>) -> Result<Step> {
    let ui = book.ui_mut();
    let Some(name) = ui.get_input("Enter the name of the contact to edit: ")? else {
        return Ok(Step::Quit);
    };
    let Some(field) = ui.get_input(
        "Enter the parameter to edit (name, phones, birthday, email, status, note): ",
    )?
    else {
        return Ok(Step::Quit);
    };
    let field: ContactField = field.parse()?;
    let Some(value) = ui.get_input("Enter the new value: ")? else {
        return Ok(Step::Quit);
    };
    book.edit(&name, field, &value)?;
    Ok(Step::Continue)
}

fn remove<S: BookStore, L: ActivityLog, U: Ui>(book: &mut AddressBook<S, L, U>) -> Result<Step> {
    let Some(pattern) = book
        .ui_mut()
        .get_input("Enter a pattern to match contact names: ")?
    else {
        return Ok(Step::Quit);
    };
    book.remove(&pattern)?;
    Ok(Step::Continue)
}

fn save<S: BookStore, L: ActivityLog, U: Ui>(
    book: &mut AddressBook<S, L, U>,
    default_book: &Path,
) -> Result<Step> {
    let Some(file) = book.ui_mut().get_input("Enter file name to save: ")? else {
        return Ok(Step::Quit);
    };
    book.save(&file_or_default(&file, default_book))?;
    Ok(Step::Continue)
}

fn load<S: BookStore, L: ActivityLog, U: Ui>(
    book: &mut AddressBook<S, L, U>,
    default_book: &Path,
) -> Result<Step> {
    let Some(file) = book.ui_mut().get_input("Enter file name to load: ")? else {
        return Ok(Step::Quit);
    };
    book.load(&file_or_default(&file, default_book))?;
    Ok(Step::Continue)
}

/// An empty answer selects the configured book file.
fn file_or_default(input: &str, default_book: &Path) -> PathBuf {
    let input = input.trim();
    if input.is_empty() {
        default_book.to_path_buf()
    } else {
        PathBuf::from(input)
    }
}
