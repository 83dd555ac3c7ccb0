//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod clear;
pub mod export;
pub mod import;
pub mod sample;
pub mod score;
pub mod set;
pub mod show;
pub mod skill;
pub mod template;

/// Dispatch a command to its handler
pub fn run(ctx: &mut AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Show(args) => show::run(ctx, args),
        Commands::Score(args) => score::run(ctx, args),
        Commands::Set(args) => set::run(ctx, args),
        Commands::Skill(args) => skill::run(ctx, args),
        Commands::Template(args) => template::run(ctx, args),
        Commands::Import(args) => import::run(ctx, args),
        Commands::Export(args) => export::run(ctx, args),
        Commands::Clear(args) => clear::run(ctx, args),
        Commands::Sample(args) => sample::run(ctx, args),
    }
}
