//! pomotodo - Main Entry Point
//!
//! Terminal host for the Pomodoro timer and the to-do list.
//! The widgets themselves are implemented in the `pomotodo` library.

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use log::{debug, info};
use pomotodo::formatting::{format_settings, format_stats, format_summary, format_task_list, format_timer_status};
use pomotodo::terminal::{RunControl, TerminalDialogs, TerminalView};
use pomotodo::{AppConfig, FileStore, PomodoroHandler, TaskFilter, TaskId, TimerSettings, TodoHandler};
use std::path::PathBuf;
use std::io::BufRead;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio::{signal, time};

type TerminalPomodoro = PomodoroHandler<FileStore, TerminalDialogs, TerminalView>;
type TerminalTodo = TodoHandler<FileStore, TerminalDialogs, TerminalView>;

/// pomotodo - Pomodoro timer and to-do list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the snapshot files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pomodoro timer
    Pomodoro {
        #[command(subcommand)]
        action: PomodoroCommand,
    },
    /// To-do list
    Todo {
        #[command(subcommand)]
        action: TodoCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PomodoroCommand {
    /// Show the loaded session and the durations
    Status,
    /// Count down in the foreground, reading p/s/r/q from stdin;
    /// Ctrl-C pauses and exits
    Run {
        /// Number of consecutive sessions to run
        #[arg(long, default_value_t = 1)]
        sessions: u32,
    },
    /// Restore the full duration of the loaded session
    Reset,
    /// Change the session durations (in minutes)
    Settings {
        #[arg(long)]
        work: u32,
        #[arg(long)]
        short_break: u32,
        #[arg(long)]
        long_break: u32,
    },
    /// Show statistics and recent sessions
    Summary,
    /// Delete the session history
    ClearHistory,
}

#[derive(Subcommand, Debug)]
enum TodoCommand {
    /// Add a task
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List tasks
    List {
        /// all, active or completed
        #[arg(long, default_value_t = TaskFilter::All)]
        filter: TaskFilter,
    },
    /// Toggle a task's completion
    Toggle { id: TaskId },
    /// Replace a task's text
    Edit {
        id: TaskId,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a task
    Delete { id: TaskId },
    /// Delete all completed tasks
    ClearCompleted,
    /// Delete all tasks
    ClearAll,
    /// Show task counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;
    let store = FileStore::new(config.data_dir(args.data_dir.as_deref()));
    let dialogs = TerminalDialogs::new(args.yes);
    info!("using data directory {}", store.dir().display());

    match args.command {
        Command::Pomodoro { action } => {
            let defaults = config
                .timer_settings()
                .context("Invalid [pomodoro] durations in config")?;
            run_pomodoro(action, store, dialogs, defaults).await
        }
        Command::Todo { action } => run_todo(action, store, dialogs),
    }
}

async fn run_pomodoro(
    action: PomodoroCommand,
    store: FileStore,
    dialogs: TerminalDialogs,
    defaults: TimerSettings,
) -> Result<()> {
    let view = match action {
        PomodoroCommand::Run { .. } => TerminalView::default(),
        _ => TerminalView::quiet(),
    };
    let mut handler = PomodoroHandler::new(store, dialogs, view, defaults)?;

    match action {
        PomodoroCommand::Status => {
            println!("{}", format_timer_status(handler.timer()));
            println!("{}", format_settings(handler.timer()));
        }
        PomodoroCommand::Run { sessions } => run_sessions(&mut handler, sessions).await?,
        PomodoroCommand::Reset => {
            handler.reset()?;
            println!("{}", format_timer_status(handler.timer()));
        }
        PomodoroCommand::Settings {
            work,
            short_break,
            long_break,
        } => {
            if handler.update_settings_minutes(work, short_break, long_break)? {
                println!("{}", format_settings(handler.timer()));
            }
        }
        PomodoroCommand::Summary => println!("{}", format_summary(&handler.summary())),
        PomodoroCommand::ClearHistory => {
            if handler.clear_history()? {
                println!("Session history cleared");
            }
        }
    }
    Ok(())
}

/// Drive the timer from a one-second interval until `sessions` sessions
/// have completed, the user quits or Ctrl-C is pressed
///
/// Each completion pauses the timer; the next session starts on its own
/// until `sessions` is reached. Pausing, resetting and quitting persist the
/// countdown so a later run resumes it.
async fn run_sessions(handler: &mut TerminalPomodoro, sessions: u32) -> Result<()> {
    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut controls = spawn_stdin_reader();
    let mut stdin_open = true;

    let mut ticker = time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut completed = 0;
    println!("{}", RunControl::HELP);
    if !handler.start() {
        bail!("timer is already running");
    }
    // the first tick would otherwise complete immediately
    ticker.reset();

    loop {
        tokio::select! {
            _ = ticker.tick(), if handler.timer().is_running() => {
                if handler.tick(Local::now())?.is_some() {
                    completed += 1;
                    if completed >= sessions {
                        return Ok(());
                    }
                    handler.start();
                    ticker.reset();
                }
            }
            line = controls.recv(), if stdin_open => {
                let Some(line) = line else {
                    debug!("stdin closed, controls disabled");
                    stdin_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<RunControl>() {
                    Ok(RunControl::Pause) => {
                        handler.pause()?;
                    }
                    Ok(RunControl::Start) => {
                        if handler.start() {
                            ticker.reset();
                        }
                    }
                    Ok(RunControl::Reset) => handler.reset()?,
                    Ok(RunControl::Quit) => {
                        handler.pause()?;
                        return Ok(());
                    }
                    Err(message) => eprintln!("{message}"),
                }
            }
            _ = &mut ctrl_c => {
                handler.pause()?;
                info!("interrupted, timer paused");
                return Ok(());
            }
        }
    }
}

/// Forward stdin lines from a plain thread
///
/// A blocking read cannot be cancelled, so it must not hold up runtime
/// shutdown once the countdown is over.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn run_todo(action: TodoCommand, store: FileStore, dialogs: TerminalDialogs) -> Result<()> {
    let mut handler: TerminalTodo = TodoHandler::new(store, dialogs, TerminalView::quiet())?;

    match action {
        TodoCommand::Add { text } => {
            if let Some(id) = handler.add(&text.join(" "), Local::now())? {
                println!("Task created with ID: {id}");
            }
        }
        TodoCommand::List { filter } => {
            handler.set_filter(filter);
            println!("{}", format_task_list(handler.list()));
        }
        TodoCommand::Toggle { id } => {
            if !handler.toggle(id)? {
                bail!("Task {id} does not exist");
            }
            println!("{}", format_task_list(handler.list()));
        }
        TodoCommand::Edit { id, text } => {
            if !handler.start_edit(id) {
                bail!("Task {id} does not exist");
            }
            if handler.save_edit(id, &text.join(" "))? {
                println!("Task {id} updated");
            }
        }
        TodoCommand::Delete { id } => {
            if handler.list().find(id).is_none() {
                bail!("Task {id} does not exist");
            }
            if handler.delete(id)? {
                println!("Task {id} deleted");
            }
        }
        TodoCommand::ClearCompleted => {
            let removed = handler.clear_completed()?;
            if removed > 0 {
                println!("Deleted {removed} completed task(s)");
            }
        }
        TodoCommand::ClearAll => {
            let removed = handler.clear_all()?;
            if removed > 0 {
                println!("Deleted {removed} task(s)");
            }
        }
        TodoCommand::Stats => println!("{}", format_stats(&handler.stats())),
    }
    Ok(())
}
