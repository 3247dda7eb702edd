//! Interactive phonebook terminal frontend.
//!
//! # Responsibility
//! - Translate input lines into controller events and render state
//!   snapshots once each action has settled.
//! - Keep stdin on a dedicated thread so completions and timer expiries
//!   are processed while waiting for input.

mod command;
mod render;

use anyhow::{anyhow, Result};
use clap::Parser;
use command::{parse_command, Command};
use phonebook_core::{
    default_log_level, init_logging, ContactRepository, Driver, Event, HttpContactRepository,
    MemoryContactRepository, UiRequest,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use tokio::sync::mpsc::{self, UnboundedReceiver};

#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    about = "Phonebook editor backed by a remote contact collection",
    version
)]
struct Cli {
    /// Base URL of the contact collection server
    #[arg(long, default_value = "http://localhost:3001")]
    server: String,

    /// Collection name under the server root
    #[arg(long, default_value = "persons")]
    collection: String,

    /// Run against an in-memory collection instead of a server
    #[arg(long)]
    memory: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = resolve_log_dir(cli.log_dir.clone())?;
    init_logging(&level, &log_dir).map_err(|err| anyhow!(err))?;

    if cli.memory {
        log::info!("event=cli_start module=cli status=ok backend=memory");
        run(MemoryContactRepository::new()).await
    } else {
        log::info!(
            "event=cli_start module=cli status=ok backend=http server={} collection={}",
            cli.server,
            cli.collection
        );
        run(HttpContactRepository::new(cli.server, cli.collection)).await
    }
}

async fn run<R>(repo: R) -> Result<()>
where
    R: ContactRepository + Send + Sync + 'static,
{
    let (mut driver, mut ui_rx) = Driver::new(repo);
    let mut lines = spawn_stdin_reader();

    driver.dispatch(Event::RefreshRequested);
    driver.settle().await;

    let mut last_banner = 0u64;
    report_banner(&driver, &mut last_banner);
    print_contacts(&driver);
    println!("Type 'help' for commands.");

    loop {
        print_prompt(&driver);

        let line: Option<String> = tokio::select! {
            maybe_line = lines.recv() => match maybe_line {
                Some(line) => Some(line),
                None => break,
            },
            _ = driver.pump() => None,
        };

        let Some(line) = line else {
            // A completion or timer expiry landed while idle.
            report_banner(&driver, &mut last_banner);
            continue;
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parsed = match parse_command(trimmed) {
            Ok(parsed) => parsed,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        if !handle_command(&mut driver, &mut ui_rx, parsed).await {
            break;
        }
        report_banner(&driver, &mut last_banner);
    }

    Ok(())
}

/// Executes one parsed command. Returns `false` when the session ends.
async fn handle_command<R>(
    driver: &mut Driver<R>,
    ui_rx: &mut UnboundedReceiver<UiRequest>,
    command: Command,
) -> bool
where
    R: ContactRepository + Send + Sync + 'static,
{
    // While a confirmation is outstanding, only an answer or quit applies.
    if driver.state().pending_overwrite().is_some()
        && !matches!(command, Command::Answer(_) | Command::Quit)
    {
        reprint_confirmation(driver);
        return true;
    }

    match command {
        Command::List => print_contacts(driver),
        Command::Filter(text) => {
            driver.dispatch(Event::FilterChanged(text));
            print_contacts(driver);
        }
        Command::Name(text) => {
            driver.dispatch(Event::NameChanged(text));
            println!("{}", render::draft_line(driver.state()));
        }
        Command::Number(text) => {
            driver.dispatch(Event::NumberChanged(text));
            println!("{}", render::draft_line(driver.state()));
        }
        Command::Add { name, number } => {
            driver.dispatch(Event::NameChanged(name));
            driver.dispatch(Event::NumberChanged(number));
            submit(driver, ui_rx).await;
        }
        Command::Submit => submit(driver, ui_rx).await,
        Command::Delete(name) => {
            let target = driver
                .state()
                .visible_contacts()
                .into_iter()
                .find(|contact| contact.name == name)
                .cloned();
            match target {
                Some(contact) => {
                    driver.dispatch(Event::DeleteRequested(contact));
                    driver.settle().await;
                }
                None => println!("No visible contact named \"{name}\"."),
            }
        }
        Command::Answer(accepted) => {
            if driver.state().pending_overwrite().is_none() {
                println!("No confirmation is pending.");
            } else {
                driver.dispatch(Event::OverwriteResolved { accepted });
                driver.settle().await;
            }
        }
        Command::Reload => {
            driver.dispatch(Event::RefreshRequested);
            driver.settle().await;
            print_contacts(driver);
        }
        Command::Help => println!("{}", render::help_text()),
        Command::Quit => return false,
    }

    true
}

/// Submits the current draft and prints any confirmation request that the
/// duplicate check raised.
async fn submit<R>(driver: &mut Driver<R>, ui_rx: &mut UnboundedReceiver<UiRequest>)
where
    R: ContactRepository + Send + Sync + 'static,
{
    if driver.state().draft_name().trim().is_empty() {
        println!("Set a name first: name <text> (or use: add <name> <number>).");
        return;
    }

    driver.dispatch(Event::SubmitRequested);
    driver.settle().await;

    while let Ok(request) = ui_rx.try_recv() {
        println!("{}", request.prompt());
        println!("Answer y or n.");
    }
}

fn reprint_confirmation<R>(driver: &Driver<R>)
where
    R: ContactRepository + Send + Sync + 'static,
{
    if let Some(pending) = driver.state().pending_overwrite() {
        let request = UiRequest::ConfirmOverwrite {
            name: pending.name().to_string(),
        };
        println!("{}", request.prompt());
        println!("Answer y or n.");
    }
}

fn print_contacts<R>(driver: &Driver<R>)
where
    R: ContactRepository + Send + Sync + 'static,
{
    println!(
        "{}",
        render::contact_table(&driver.state().visible_contacts())
    );
}

fn report_banner<R>(driver: &Driver<R>, last: &mut u64)
where
    R: ContactRepository + Send + Sync + 'static,
{
    if let Some(notification) = driver.state().notification() {
        if notification.generation > *last {
            *last = notification.generation;
            println!("{}", render::banner_line(notification));
        }
    }
}

fn print_prompt<R>(driver: &Driver<R>)
where
    R: ContactRepository + Send + Sync + 'static,
{
    let tag = if driver.state().pending_overwrite().is_some() {
        "confirm [y/n]> "
    } else {
        "phonebook> "
    };
    print!("{tag}");
    let _ = io::stdout().flush();
}

fn resolve_log_dir(flag: Option<PathBuf>) -> Result<String> {
    let dir = flag.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("phonebook")
            .join("logs")
    });
    dir.to_str()
        .map(|value| value.to_string())
        .ok_or_else(|| anyhow!("log directory `{}` is not valid UTF-8", dir.display()))
}

fn spawn_stdin_reader() -> UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
