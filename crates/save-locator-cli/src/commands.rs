use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "save-locator")]
#[command(about = "Finds where a Steam game keeps its save files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the system for a game's save locations
    Locate(LocateArgs),
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Default, Args)]
pub struct LocateArgs {
    /// Steam app id, e.g. 292030. Prompted for when omitted.
    pub app_id: Option<String>,

    /// Print the full discovery report as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the Steam store and PCGamingWiki lookups
    #[arg(long)]
    pub offline: bool,

    /// Open result number N in the file browser
    #[arg(long, value_name = "N")]
    pub open: Option<usize>,

    /// Never ask whether to open a result
    #[arg(long)]
    pub no_prompt: bool,
}
