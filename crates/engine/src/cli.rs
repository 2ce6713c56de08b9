use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Inspect a rules catalog the way clients see it")]
pub struct Cli {
    /// Rules catalog JSON (overrides CHARFORGE_RULES_PATH)
    #[arg(long)]
    pub rules: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Show a race with its choices")]
    Race { id: String },
    #[command(about = "Show a class with its skill and equipment choices")]
    Class { id: String },
    #[command(about = "Show a background with its choices")]
    Background { id: String },
    #[command(about = "List catalog entries")]
    List { kind: ListKind },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListKind {
    Races,
    Classes,
    Backgrounds,
}
