//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

/// cvkit - resume authoring and ATS readiness toolkit
#[derive(Parser, Debug)]
#[command(name = "cvkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Data directory (default: platform data dir + /cvkit)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use a throwaway in-memory store (nothing persisted)
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the printable resume preview
    Show(commands::show::ShowArgs),

    /// Compute the ATS readiness score and suggestions
    Score(commands::score::ScoreArgs),

    /// Set a scalar resume field (dotted path)
    Set(commands::set::SetArgs),

    /// Manage categorized skills
    Skill(commands::skill::SkillArgs),

    /// Get or set the preview template
    Template(commands::template::TemplateArgs),

    /// Import resume data from a JSON file
    Import(commands::import::ImportArgs),

    /// Export the canonical resume document as JSON
    Export(commands::export::ExportArgs),

    /// Reset the resume to a blank document
    Clear(commands::clear::ClearArgs),

    /// Load the bundled sample resume
    Sample(commands::sample::SampleArgs),
}
