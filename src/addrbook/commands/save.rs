use crate::activity::Action;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::BookStore;
use std::path::Path;

pub fn run<S: BookStore>(store: &mut S, path: &Path, contacts: &[Contact]) -> Result<CmdResult> {
    store.save(path, contacts)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Address book saved to {}.",
            path.display()
        )))
        .with_action(Action::SavedAddressBook))
}
