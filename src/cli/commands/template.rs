//! cvkit template - get or set the preview template

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::error::Result;
use crate::resume::model::Template;

#[derive(Args, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub action: TemplateAction,
}

#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Show the current template
    Get,

    /// Choose a template: classic, modern, minimal
    Set { template: String },
}

pub fn run(ctx: &mut AppContext, args: &TemplateArgs) -> Result<()> {
    match &args.action {
        TemplateAction::Get => {
            let template = ctx.store.load_template();
            if ctx.robot_mode {
                println!("{}", serde_json::json!({ "template": template.as_str() }));
            } else {
                println!("{template}");
            }
        }
        TemplateAction::Set { template } => {
            let template: Template = template.parse()?;
            ctx.store.save_template(template)?;
            if ctx.robot_mode {
                println!(
                    "{}",
                    serde_json::json!({ "ok": true, "template": template.as_str() })
                );
            } else if !ctx.quiet {
                println!("Template set to {template}.");
            }
        }
    }
    Ok(())
}
