use clap::Parser;
use figment::Figment;
use pinnotes::config::read::{read_app_config, ReadConfig};
use pinnotes::data::NoteDraft;
use pinnotes::error_exit;
use pinnotes::logging::init_tool_logging;
use pinnotes::store::{NoteStore, StoreError};
use crate::cli::{CliConfig, Command};

mod cli;
mod notify;
mod render;

fn main() {
    init_tool_logging();

    let cli_config = CliConfig::parse();

    let ReadConfig {
        app_config,
        ..
    } = read_app_config(cli_config.config_file.as_deref(), Figment::new())
        .unwrap_or_else(|e| {
            error_exit!("finishing due to a configuration error: {e}");
        });

    let mut store = NoteStore::new(&app_config)
        .unwrap_or_else(|e| error_exit!("could not load notes: {e}"));

    let result = execute(&mut store, cli_config.command);

    if let Some(e) = store.take_save_failure() {
        notify::warning(format!("changes were not saved: {e}"));
    }
    if let Err(e) = result {
        notify::failure(e);
        std::process::exit(1);
    }
}

fn execute(store: &mut NoteStore, command: Command) -> Result<(), StoreError> {
    match command {
        Command::Add { title, subtitle, content, subject } => {
            let note = store.create(
                NoteDraft { title, subtitle, content, subject },
            )?;
            notify::success(note.id);
        },
        Command::Edit { id, title, subtitle, content, subject } => {
            let current = store.get(id).ok_or(StoreError::NotFound(id))?;
            let prefilled = NoteDraft::from(current);
            store.update(
                id,
                NoteDraft {
                    title: title.unwrap_or(prefilled.title),
                    subtitle: subtitle.unwrap_or(prefilled.subtitle),
                    content: content.unwrap_or(prefilled.content),
                    subject: subject.or(prefilled.subject),
                },
            )?;
            notify::success(format!("updated note {id}"));
        },
        Command::Delete { id } => {
            store.delete(id);
            notify::success(format!("deleted note {id}"));
        },
        Command::Pin { id } => {
            let message = if store.toggle_pin(id)? {
                format!("pinned note {id}")
            } else {
                format!("unpinned note {id}")
            };
            notify::success(message);
        },
        Command::List { search, filter } => {
            for note in store.query(&search, filter) {
                println!("{}", render::list_line(note));
            }
        },
        Command::Show { id } => {
            let note = store.get(id).ok_or(StoreError::NotFound(id))?;
            println!("{}", render::details(note));
        },
    }
    Ok(())
}
