//! cvkit import - bring arbitrary JSON through the normalizer

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::error::Result;
use crate::resume::normalize::normalize;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file to import ("-" reads stdin). Any shape is accepted;
    /// unrecognized fields degrade to blanks.
    pub file: PathBuf,
}

pub fn run(ctx: &mut AppContext, args: &ImportArgs) -> Result<()> {
    let bytes = if args.file.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(&args.file)?
    };

    // A file that is not JSON at all is a user error; any valid JSON value
    // is absorbed by the normalizer.
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    let doc = normalize(&value);
    ctx.store.save_document(&doc)?;
    info!("document imported");

    if ctx.robot_mode {
        println!("{}", serde_json::json!({ "ok": true }));
    } else if !ctx.quiet {
        println!("Imported.");
    }
    Ok(())
}
