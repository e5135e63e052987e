use crate::activity::ActivityLog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// The most recent `limit` activity entries, oldest first.
pub fn run<L: ActivityLog>(log: &L, limit: Option<usize>) -> Result<CmdResult> {
    let entries = log.entries()?;
    if entries.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No activity recorded.")));
    }

    let skip = limit.map_or(0, |limit| entries.len().saturating_sub(limit));
    let mut result = CmdResult::default();
    for entry in entries.into_iter().skip(skip) {
        result.add_message(CmdMessage::info(entry.to_string()));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{Action, LogEntry, MemoryActivityLog};
    use crate::store::memory::fixtures::date;

    fn log_with(actions: &[Action]) -> MemoryActivityLog {
        let mut log = MemoryActivityLog::new();
        let stamp = date(2024, 3, 18).and_hms_opt(8, 0, 0).unwrap();
        for action in actions {
            log.append(&LogEntry::new(stamp, *action)).unwrap();
        }
        log
    }

    #[test]
    fn test_shows_the_tail() {
        let log = log_with(&[
            Action::AddedContact,
            Action::EditedContact,
            Action::SavedAddressBook,
        ]);
        let result = run(&log, Some(2)).unwrap();
        assert_eq!(
            result.message_texts(),
            vec![
                "2024-03-18 08:00:00 - Edited contact",
                "2024-03-18 08:00:00 - Saved address book"
            ]
        );
        assert!(result.action.is_none());
    }

    #[test]
    fn test_no_limit_shows_everything() {
        let log = log_with(&[Action::AddedContact, Action::RemovedContact]);
        assert_eq!(run(&log, None).unwrap().messages.len(), 2);
    }

    #[test]
    fn test_empty_log() {
        let result = run(&MemoryActivityLog::new(), Some(10)).unwrap();
        assert_eq!(result.message_texts(), vec!["No activity recorded."]);
    }
}
