use cardz::api::CardzApi;
use cardz::commands::{CmdMessage, MessageLevel, ReviewReport, ScheduledCard};
use cardz::config::CardzConfig;
use cardz::error::{CardzError, Result};
use cardz::model::{Card, Outcome};
use cardz::store::fs::DirStore;
use cardz::viewer::{CommandViewer, Viewer};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use colored::*;
use std::path::Path;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Mode};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = parse_cli();
    let Some(mode) = cli.mode() else {
        let _ = Cli::command().print_help();
        return Ok(());
    };

    let cwd = std::env::current_dir().map_err(CardzError::Io)?;
    let config = CardzConfig::load(&cwd)?;
    let mut api = CardzApi::new(DirStore::new(&cwd), config);
    let now = Utc::now().timestamp() as u64;

    match mode {
        Mode::Query(policy) => {
            let result = api.query(policy, now)?;
            print_messages(&result.messages);
            if let Some(card) = &result.selected {
                show_card(&cwd, card);
            }
        }
        Mode::Review(outcome) => {
            let result = api.record(outcome, now)?;
            if let Some(report) = &result.review {
                print_report(report, now);
            }
            print_messages(&result.messages);
        }
        Mode::Print => {
            let result = api.schedule(now)?;
            print_schedule(&result.listed);
            print_messages(&result.messages);
        }
        Mode::Add => print_messages(&api.stamp_new()?.messages),
        Mode::Restore => print_messages(&api.strip()?.messages),
        Mode::Import { dir, keep_stamps } => {
            print_messages(&api.import(&dir, keep_stamps)?.messages)
        }
    }
    Ok(())
}

/// Clap exits 2 on bad usage by default; the contract here is help on
/// stdout with exit 0, everything else on stderr with exit 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Hands the selected card to the external viewer, detached. A missing or
/// broken viewer is a warning; the card stays selected either way.
fn show_card(root: &Path, card: &Card) {
    let path = root.join(card.filename());
    let opened = CommandViewer::from_env().and_then(|viewer| viewer.open(&path));
    if let Err(e) = opened {
        eprintln!("Warning: {}", e);
        println!("Open it yourself: {}", path.display());
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_report(report: &ReviewReport, now: u64) {
    let verdict = match report.outcome {
        Outcome::Hit => "Hit".green(),
        Outcome::Miss => "Miss".red(),
    };
    let since = match report.elapsed {
        Some(secs) => format!("last review {}", format_ago(secs)),
        None => "first review".to_string(),
    };
    println!(
        "{} on {} ({}), due again {}",
        verdict,
        report.card.title.bold(),
        since,
        format_hence(report.card.awake.saturating_sub(now))
    );
}

const LINE_WIDTH: usize = 72;
const TIME_WIDTH: usize = 20;

fn print_schedule(cards: &[ScheduledCard]) {
    for entry in cards {
        let when = if entry.wait <= 0 {
            format!("overdue {}", format_duration(entry.wait.unsigned_abs()))
        } else {
            format!("due in {}", format_duration(entry.wait as u64))
        };

        let available = LINE_WIDTH.saturating_sub(TIME_WIDTH + 2);
        let title = truncate_to_width(&entry.card.title, available);
        let padding = available.saturating_sub(title.width());

        let when_colored = if entry.wait <= 0 {
            when.yellow()
        } else {
            when.dimmed()
        };
        println!("  {}{}  {}", title, " ".repeat(padding), when_colored);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_ago(secs: u64) -> String {
    timeago::Formatter::new().convert(Duration::from_secs(secs))
}

fn format_hence(secs: u64) -> String {
    format!("in {}", format_duration(secs))
}

/// A bare humanized duration, no "ago" suffix.
fn format_duration(secs: u64) -> String {
    let mut formatter = timeago::Formatter::new();
    formatter.ago("");
    formatter.convert(Duration::from_secs(secs)).trim().to_string()
}
