//! cvkit set - scalar field mutation by dotted path

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::error::{CvError, Result};
use crate::resume::model::ResumeDocument;

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Field path: personal.name, personal.email, personal.phone,
    /// personal.location, summary, skills, github, linkedin
    pub field: String,

    /// New value (empty string clears the field)
    pub value: String,
}

pub fn run(ctx: &mut AppContext, args: &SetArgs) -> Result<()> {
    let mut doc = ctx.store.load_document();
    apply(&mut doc, &args.field, &args.value)?;
    ctx.store.save_document(&doc)?;
    info!(field = %args.field, "field updated");

    if ctx.robot_mode {
        println!("{}", serde_json::json!({ "ok": true, "field": args.field }));
    } else if !ctx.quiet {
        println!("Set {}.", args.field);
    }
    Ok(())
}

fn apply(doc: &mut ResumeDocument, field: &str, value: &str) -> Result<()> {
    let slot = match field {
        "personal.name" => &mut doc.personal.name,
        "personal.email" => &mut doc.personal.email,
        "personal.phone" => &mut doc.personal.phone,
        "personal.location" => &mut doc.personal.location,
        "summary" => &mut doc.summary,
        "skills" => &mut doc.skills,
        "github" => &mut doc.github,
        "linkedin" => &mut doc.linkedin,
        other => return Err(CvError::UnknownField(other.to_string())),
    };
    *slot = value.to_string();
    Ok(())
}
