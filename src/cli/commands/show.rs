//! cvkit show - render the printable preview

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::render;
use crate::resume::model::Template;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Render with a specific template without persisting the choice
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<String>,
}

pub fn run(ctx: &mut AppContext, args: &ShowArgs) -> Result<()> {
    let template = match &args.template {
        Some(raw) => raw.parse::<Template>()?,
        None => ctx.store.load_template(),
    };
    let doc = ctx.store.load_document();

    if ctx.robot_mode {
        let json = serde_json::json!({
            "template": template.as_str(),
            "preview": render::render(&doc, template),
        });
        println!("{}", serde_json::to_string(&json)?);
    } else {
        print!("{}", render::render(&doc, template));
    }
    Ok(())
}
