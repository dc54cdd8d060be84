mod commands;
mod logging;
mod progress;

use std::io::{self, Write};
use std::path::Path;
use std::process::{self, Command};

use anyhow::{bail, Context};
use clap::Parser;
use colored::*;
use commands::{Cli, Commands, LocateArgs};
use dotenv::dotenv;
use progress::CliReporter;
use save_locator_core::models::WIKI_HINT_PREFIX;
use save_locator_core::{parse_app_id, AppConfig, DiscoveryReport, SaveLocator, SilentReporter};
use tracing::{error, info};

const BANNER: &str = r"
  ___  __ ___ _____   _    ___   ___ __ _ _____ ___  ___
 (_-< / _` \ V / -_) | |__/ _ \ / _/ _` |  _/ _ \| '_|
 /__/ \__,_|\_/\___| |____\___/ \__\__,_|\__\___/|_|
";

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match save_locator_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Locate(locate)) => run_locate(config, locate, false),
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:#?}", config);
            Ok(())
        }
        None => {
            print_banner();
            run_locate(config, LocateArgs::default(), true)
        }
    }
}

fn print_banner() {
    println!("{}", BANNER.cyan());
    println!("{}", "steam save locator".cyan());
    println!("{}", "for the lazy or the ones that cant be bothered".yellow());
}

fn run_locate(mut config: AppConfig, args: LocateArgs, interactive: bool) -> anyhow::Result<()> {
    let input = match args.app_id {
        Some(input) => input,
        None => prompt_line(&format!("\n{}", "Enter Steam Game ID: ".white()))?,
    };

    let app_id = match parse_app_id(&input) {
        Ok(app_id) => app_id,
        Err(err) => {
            info!("{}", err);
            eprintln!("\n{}", "Invalid ID! Must be a number (e.g. 292030)".red());
            if interactive {
                pause()?;
            }
            process::exit(1);
        }
    };

    if args.offline {
        config.offline = true;
    }
    let locator = SaveLocator::new(config).context("Failed to set up the locator")?;

    let report = if args.json {
        locator.locate(app_id, &SilentReporter)
    } else {
        locator.locate(app_id, &CliReporter::new())
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(choice) = args.open {
        open_result(&report.results, choice)?;
    } else if !args.no_prompt && !args.json && !report.results.is_empty() {
        if let Some(choice) = prompt_choice(report.results.len())? {
            open_result(&report.results, choice)?;
        }
    }

    if interactive {
        pause()?;
    }
    Ok(())
}

fn print_report(report: &DiscoveryReport) {
    let identity = &report.identity;
    println!("\n{} {}", "Searching for:".white(), identity.display_name.green());
    if identity.publishers.is_empty() {
        println!(
            "{} {}",
            "Developer(s):".white(),
            "Could not retrieve developer info".yellow()
        );
    } else {
        println!(
            "{} {}",
            "Developer(s):".white(),
            identity.publishers.join(", ").cyan()
        );
    }

    for warning in &report.warnings {
        println!("\n{}", format!("Warning: {}", warning).yellow());
    }

    if report.results.is_empty() {
        println!("\n{}", "No save locations found".red());
        println!("{}", "Try checking these manually:".yellow());
        println!("- Game installation folder");
        println!("- Documents/My Games subfolders");
        println!("- AppData/LocalLow (common for Unity games)");
        return;
    }

    println!(
        "\n{}",
        format!("Found {} save locations:", report.results.len()).green()
    );
    for (idx, path) in report.results.iter().enumerate() {
        println!("{} {}", format!("{:2}.", idx + 1).white(), path.cyan());
    }
}

/// Opens result number `choice` (1-based) in the platform file browser.
fn open_result(results: &[String], choice: usize) -> anyhow::Result<()> {
    let Some(entry) = choice.checked_sub(1).and_then(|idx| results.get(idx)) else {
        bail!("No result number {} (found {})", choice, results.len());
    };
    let path = entry.strip_prefix(WIKI_HINT_PREFIX).unwrap_or(entry);
    open_folder(Path::new(path))
}

fn open_folder(path: &Path) -> anyhow::Result<()> {
    let opener = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    info!("Opening {} with {}", path.display(), opener);
    Command::new(opener)
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(())
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Asks which result to open. `None` when the user declines.
fn prompt_choice(count: usize) -> io::Result<Option<usize>> {
    let prompt = format!("\nOpen a location? (1-{} or N): ", count);
    loop {
        let input = prompt_line(&prompt)?;
        match input.to_uppercase().as_str() {
            "" | "N" => return Ok(None),
            answer => match answer.parse::<usize>() {
                Ok(choice) if (1..=count).contains(&choice) => return Ok(Some(choice)),
                _ => continue,
            },
        }
    }
}

fn pause() -> io::Result<()> {
    prompt_line(&format!("\n{}", "Press Enter to exit...".yellow())).map(|_| ())
}
