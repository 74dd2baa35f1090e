//! Interactive session.
//!
//! One command per line. A rejected or failing command prints its error and
//! the session goes on with its state untouched.

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Result};
use gpta_dashboard::{Dashboard, FailureLogForm, SharedDashboard};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render;

const HELP: &str = "\
Commands:
  organs                                   list organs and metrics
  organ <name>                             create an organ
  select <name>                            select an organ
  show                                     details of the selected organ
  log <organ>;<date>;<uptime>;<repair>;<description>
                                           log a failure (blank organ = selection,
                                           blank date = today)
  target <hours>                           set the reliability horizon T
  threshold <r>                            set the minimum reliability
  pareto                                   failures per organ
  curve                                    reliability curve of the selection
  bars                                     MTBF/MTTR of the selection
  export [path]                            CSV report of the selection
  help                                     this text
  quit                                     leave";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Organs,
    CreateOrgan(String),
    Select(String),
    Show,
    Log(FailureLogForm),
    Target(String),
    Threshold(String),
    Pareto,
    Curve,
    Bars,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

/// Parse one input line; blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "organs" | "ls" => ShellCommand::Organs,
        "organ" => ShellCommand::CreateOrgan(argument(word, rest)?),
        "select" => ShellCommand::Select(argument(word, rest)?),
        "show" => ShellCommand::Show,
        "log" => ShellCommand::Log(parse_log(rest)?),
        "target" => ShellCommand::Target(argument(word, rest)?),
        "threshold" => ShellCommand::Threshold(argument(word, rest)?),
        "pareto" => ShellCommand::Pareto,
        "curve" => ShellCommand::Curve,
        "bars" => ShellCommand::Bars,
        "export" => ShellCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => bail!("Unknown command '{}', try 'help'", other),
    };
    Ok(Some(command))
}

fn argument(word: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("'{}' needs an argument", word);
    }
    Ok(rest.to_string())
}

// Blank organ and date are filled in by `complete_form` at execution time
fn parse_log(rest: &str) -> Result<FailureLogForm> {
    let fields: Vec<&str> = rest.splitn(5, ';').map(str::trim).collect();
    let [organ, date, uptime, repair, description] = fields[..] else {
        bail!("usage: log <organ>;<date>;<uptime>;<repair>;<description>");
    };

    Ok(FailureLogForm {
        organ_name: organ.to_string(),
        failure_date: date.to_string(),
        uptime_since_last_failure: uptime.to_string(),
        repair_duration: repair.to_string(),
        description: description.to_string(),
    })
}

/// Fill a typed form's blank organ and date from the dashboard's defaults.
fn complete_form(dashboard: &Dashboard, typed: FailureLogForm) -> FailureLogForm {
    let organ = (!typed.organ_name.is_empty()).then_some(typed.organ_name.as_str());
    let mut form = dashboard.new_failure_form(organ);
    if !typed.failure_date.is_empty() {
        form.failure_date = typed.failure_date;
    }
    form.uptime_since_last_failure = typed.uptime_since_last_failure;
    form.repair_duration = typed.repair_duration;
    form.description = typed.description;
    form
}

/// Run the session until `quit` or end of input.
pub async fn run(dashboard: SharedDashboard) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => {
                debug!("Shell command: {:?}", command);
                if let Err(e) = execute(&dashboard, command).await {
                    println!("error: {e:#}");
                }
            }
            Err(e) => println!("error: {e}"),
        }
        prompt()?;
    }
    Ok(())
}

async fn execute(dashboard: &SharedDashboard, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::Organs => {
            print!("{}", render::organ_table(&*dashboard.lock().await));
        }
        ShellCommand::CreateOrgan(name) => {
            let organ = dashboard.create_organ(&name).await?;
            println!("Created organ '{}'", organ.name);
        }
        ShellCommand::Select(name) => {
            dashboard.select_organ(&name).await?;
            print!("{}", render::organ_details(&*dashboard.lock().await));
        }
        ShellCommand::Show => {
            print!("{}", render::organ_details(&*dashboard.lock().await));
        }
        ShellCommand::Log(typed) => {
            let mut guard = dashboard.lock().await;
            let form = complete_form(&guard, typed);
            guard.submit_failure_form(&form)?;
            println!("Failure logged for '{}'", form.organ_name.trim());
        }
        ShellCommand::Target(raw) => {
            let mut guard = dashboard.lock().await;
            guard.set_target_uptime_input(&raw)?;
            println!("T = {} h", guard.params().target_uptime_t);
        }
        ShellCommand::Threshold(raw) => {
            let mut guard = dashboard.lock().await;
            guard.set_min_reliability_threshold_input(&raw)?;
            println!("Threshold = {}", guard.params().min_reliability_threshold);
        }
        ShellCommand::Pareto => {
            print!("{}", render::pareto_table(&dashboard.lock().await.pareto_series()));
        }
        ShellCommand::Curve => {
            print!("{}", render::curve_table(&dashboard.lock().await.reliability_curve()));
        }
        ShellCommand::Bars => {
            print!("{}", render::bars_table(&dashboard.lock().await.mtbf_mttr_series()));
        }
        ShellCommand::Export(path) => {
            let guard = dashboard.lock().await;
            crate::export(&guard, path).await?;
        }
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("gpta> ");
    std::io::stdout().flush()
}
