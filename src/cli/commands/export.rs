//! cvkit export - canonical document as JSON

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ExportArgs {}

pub fn run(ctx: &mut AppContext, _args: &ExportArgs) -> Result<()> {
    let doc = ctx.store.load_document();
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
