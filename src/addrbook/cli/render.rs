use addrbook::commands::{CmdMessage, MessageLevel};
use addrbook::error::Result;
use addrbook::model::Contact;
use addrbook::ui::Ui;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 50;

pub fn format_contact(contact: &Contact) -> String {
    let rule = "_".repeat(RULE_WIDTH);
    let phones: Vec<&str> = contact.visible_phones().collect();
    format!(
        "{rule}\nName: {}\nPhones: {}\nBirthday: {}\nEmail: {}\nStatus: {}\nNote: {}\n{rule}\n",
        contact.name,
        phones.join(", "),
        contact.birthday_display(),
        contact.email,
        contact.status,
        contact.note,
    )
}

pub fn format_contacts(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(format_contact)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.normal().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// Terminal implementation of the UI port: stdout for output, stdin for input.
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for ConsoleUi {
    fn display_contacts(&mut self, contacts: &[Contact]) {
        println!("{}", format_contacts(contacts));
    }

    fn display_message(&mut self, message: &CmdMessage) {
        println!("{}", format_message(message));
    }

    fn get_input(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        Ok(read_answer(&mut io::stdin().lock())?)
    }
}

/// One line of input without its line ending. Bytes that are not UTF-8 are
/// replaced rather than rejected. `None` once the reader is exhausted.
fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
