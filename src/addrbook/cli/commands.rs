//! # CLI Layer
//!
//! This module is **one possible UI client** for addrbook, not the application
//! itself. It is the only place that knows about argument parsing, the data
//! directory on disk and the process exit status.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns the shell arguments into [`Commands`]
//! 2. **Context Setup**: resolve the data directory, load the config, build the book
//! 3. **Dispatch**: run the interactive shell or a single one-shot command
//! 4. **Persistence**: one-shot commands load the book file first and save it
//!    back when they changed it

use super::render::ConsoleUi;
use super::setup::{init_logging, Cli, Commands};
use super::shell;
use addrbook::activity::FileActivityLog;
use addrbook::api::AddressBook;
use addrbook::config::{AddressBookConfig, CONFIG_KEYS};
use addrbook::error::{AddressBookError, Result};
use addrbook::model::{parse_birthday, parse_phones, Contact};
use addrbook::store::fs::JsonFileStore;
use addrbook::store::BookStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

type ConsoleBook = AddressBook<JsonFileStore, FileActivityLog, ConsoleUi>;

struct AppContext {
    data_dir: PathBuf,
    config: AddressBookConfig,
}

impl AppContext {
    fn book_path(&self) -> PathBuf {
        self.config.book_path(&self.data_dir)
    }

    fn empty_book(&self) -> ConsoleBook {
        AddressBook::new(
            JsonFileStore::new(),
            FileActivityLog::new(self.config.log_path(&self.data_dir)),
            ConsoleUi::new(),
        )
        .with_birthday_match(self.config.birthday_match)
    }

    /// Book seeded from the configured file, without logging a load.
    fn stored_book(&self) -> Result<ConsoleBook> {
        let store = JsonFileStore::new();
        let contacts = store.load(&self.book_path())?.unwrap_or_default();
        log::debug!("{} contacts read at startup", contacts.len());
        Ok(self.empty_book().with_contacts(contacts))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = create_context(&cli)?;

    match cli.command {
        None | Some(Commands::Shell) => {
            let mut book = ctx.empty_book();
            shell::run(&mut book, &ctx.book_path())
        }
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        Some(command) => handle_one_shot(&ctx, command),
    }
}

fn create_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    log::debug!("using data directory {}", data_dir.display());
    let config = AddressBookConfig::load(&data_dir)?;
    Ok(AppContext { data_dir, config })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            AddressBookError::Config(
                "Could not determine a data directory, pass --data-dir".to_string(),
            )
        })
}

fn handle_one_shot(ctx: &AppContext, command: Commands) -> Result<()> {
    let mut book = ctx.stored_book()?;
    let before = book.contacts().to_vec();

    match command {
        Commands::List => book.list()?,
        Commands::Search { pattern, field } => book.search(&pattern, field)?,
        Commands::Birthdays => book.congratulate()?,
        Commands::History { limit } => book.history(Some(limit))?,
        Commands::Add {
            name,
            phones,
            birthday,
            email,
            status,
            note,
        } => {
            let birthday = match birthday {
                Some(raw) => parse_birthday(&raw)?,
                None => None,
            };
            let contact = new_contact(name, &phones)?
                .with_birthday(birthday)
                .with_email(email)
                .with_status(status)
                .with_note(note);
            book.add(contact)?
        }
        Commands::Edit { name, field, value } => book.edit(&name, field, &value)?,
        Commands::Remove { pattern } => book.remove(&pattern)?,
        Commands::Shell | Commands::Config { .. } => unreachable!("dispatched by run"),
    }

    if book.contacts() != before.as_slice() {
        book.save(&ctx.book_path())?;
    }
    Ok(())
}

fn new_contact(name: String, phones: &str) -> Result<Contact> {
    if name.trim().is_empty() {
        return Err(AddressBookError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }
    Ok(Contact::new(name).with_phones(parse_phones(phones)))
}

fn handle_config(ctx: AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let AppContext {
        data_dir,
        mut config,
    } = ctx;

    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(&data_dir)?;
            println!("{} = {}", key, config.get(&key)?);
        }
    }
    Ok(())
}
