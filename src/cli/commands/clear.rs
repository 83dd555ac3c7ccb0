//! cvkit clear - reset to the blank document

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(ctx: &mut AppContext, args: &ClearArgs) -> Result<()> {
    if !args.yes && !ctx.robot_mode {
        eprintln!("This resets every resume field. Re-run with --yes to confirm.");
        return Ok(());
    }

    ctx.store.clear_document()?;
    if ctx.robot_mode {
        println!("{}", serde_json::json!({ "ok": true }));
    } else if !ctx.quiet {
        println!("Resume cleared.");
    }
    Ok(())
}
