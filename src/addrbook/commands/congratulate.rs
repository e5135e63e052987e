use crate::calendar::{BirthdayMatch, WeekWindow};
use crate::commands::{CmdMessage, CmdResult, MSG_NO_BIRTHDAYS};
use crate::error::Result;
use crate::model::Contact;
use chrono::NaiveDate;

/// Contacts whose birthday falls in the Monday-to-Sunday week containing `today`.
pub fn run(contacts: &[Contact], today: NaiveDate, mode: BirthdayMatch) -> Result<CmdResult> {
    let week = WeekWindow::containing(today);
    log::debug!(
        "birthday window {} .. {} ({})",
        week.start,
        week.end,
        mode
    );

    let matches: Vec<Contact> = contacts
        .iter()
        .filter(|contact| {
            contact
                .birthday
                .is_some_and(|birthday| week.includes_birthday(birthday, mode))
        })
        .cloned()
        .collect();

    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(MSG_NO_BIRTHDAYS)));
    }
    Ok(CmdResult::default().with_listed_contacts(matches))
}
